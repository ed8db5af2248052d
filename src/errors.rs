use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Data fetch error: {0}")]
    DataFetchError(String),

    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("No quiz is loaded")]
    QuizNotLoaded,

    #[error("The current quiz has no more questions")]
    QuizExhausted,

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::DataFetchError(_) => "DATA_FETCH_ERROR",
            AppError::InvalidQuestion(_) => "INVALID_QUESTION",
            AppError::QuizNotLoaded => "QUIZ_NOT_LOADED",
            AppError::QuizExhausted => "QUIZ_EXHAUSTED",
            AppError::InvalidState(_) => "INVALID_STATE",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub error_code: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::DataFetchError(_) => StatusCode::BAD_GATEWAY,
            AppError::InvalidQuestion(_) => StatusCode::BAD_GATEWAY,
            AppError::QuizNotLoaded => StatusCode::CONFLICT,
            AppError::QuizExhausted => StatusCode::CONFLICT,
            AppError::InvalidState(_) => StatusCode::CONFLICT,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
            error_code: self.error_code(),
        })
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::DataFetchError(err.to_string())
    }
}
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

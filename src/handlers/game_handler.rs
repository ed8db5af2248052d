use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::AnswerId,
        dto::{
            request::{ChooseLevelRequest, PlayerInputRequest, SubmitAnswerRequest},
            response::{HealthResponse, PlayerInputResponse, SubmitAnswerResponse},
        },
    },
    services::answer_handler::LevelChoice,
};

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Starts the game over at level 1. Also the manual retry after a failed fetch.
#[post("/api/game/start")]
pub async fn start_game(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let mut handler = state.handler.lock().await;
    handler.start().await?;
    Ok(HttpResponse::Ok().json(handler.status()))
}

#[get("/api/game")]
pub async fn get_game(state: web::Data<AppState>) -> HttpResponse {
    let handler = state.handler.lock().await;
    HttpResponse::Ok().json(handler.status())
}

#[post("/api/answers")]
pub async fn submit_answer(
    state: web::Data<AppState>,
    request: web::Json<SubmitAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();

    let mut handler = state.handler.lock().await;
    let outcome = handler.submit_answer(AnswerId(request.answer_id))?;

    Ok(HttpResponse::Ok().json(SubmitAnswerResponse {
        result: outcome.into(),
        message: handler.message().to_string(),
        quiz_over: handler.is_quiz_over(),
    }))
}

#[post("/api/levels")]
pub async fn choose_level(
    state: web::Data<AppState>,
    request: web::Json<ChooseLevelRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;
    let choice: LevelChoice = request.choice.parse()?;

    let mut handler = state.handler.lock().await;
    handler.choose_next_level(choice).await?;
    Ok(HttpResponse::Ok().json(handler.status()))
}

/// Text entry point: routed to an answer or a level choice depending on
/// whether the current quiz is over.
#[post("/api/input")]
pub async fn player_input(
    state: web::Data<AppState>,
    request: web::Json<PlayerInputRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let mut handler = state.handler.lock().await;
    let outcome = handler.handle_input(&request.input).await?;

    Ok(HttpResponse::Ok().json(PlayerInputResponse::new(
        outcome,
        handler.message(),
        handler.is_quiz_over(),
    )))
}

use async_trait::async_trait;

use crate::{errors::AppResult, models::dto::question_record::QuestionRecord};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Returns every question record in the order the source serves them.
    async fn fetch_all(&self) -> AppResult<Vec<QuestionRecord>>;
}

pub struct HttpQuestionRepository {
    client: reqwest::Client,
    url: String,
}

impl HttpQuestionRepository {
    pub fn new(url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.to_string(),
        }
    }
}

#[async_trait]
impl QuestionRepository for HttpQuestionRepository {
    async fn fetch_all(&self) -> AppResult<Vec<QuestionRecord>> {
        log::debug!("Fetching question records from {}", self.url);

        let records = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<QuestionRecord>>()
            .await?;

        log::info!("Fetched {} question records", records.len());
        Ok(records)
    }
}

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    config::Config,
    repositories::{HttpQuestionRepository, QuestionRepository},
    services::{answer_handler::AnswerHandler, game_service::Game},
};

#[derive(Clone)]
pub struct AppState {
    // One game per process; the lock is held for a whole operation.
    pub handler: Arc<Mutex<AnswerHandler>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let repository = Arc::new(HttpQuestionRepository::new(&config.questions_url));
        Self::with_repository(config, repository)
    }

    pub fn with_repository(config: Config, repository: Arc<dyn QuestionRepository>) -> Self {
        let handler = AnswerHandler::new(Game::new(repository));

        Self {
            handler: Arc::new(Mutex::new(handler)),
            config: Arc::new(config),
        }
    }
}

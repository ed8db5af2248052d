use std::str::FromStr;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{AnswerId, Question},
        dto::response::{DisplayState, GameStatus},
    },
    services::game_service::{AnswerOutcome, Game, Score},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelChoice {
    Redo,
    Advance,
}

impl FromStr for LevelChoice {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(LevelChoice::Redo),
            "2" => Ok(LevelChoice::Advance),
            other => Err(AppError::ValidationError(format!(
                "'{}' is not a level choice, expected 1 or 2",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Answered(AnswerOutcome),
    LevelChosen(LevelChoice),
    Ignored,
}

/// Drives a [`Game`] for one player and keeps the text shown to them.
pub struct AnswerHandler {
    game: Game,
    quiz_over: bool,
    message: String,
}

impl AnswerHandler {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            quiz_over: false,
            message: String::new(),
        }
    }

    pub async fn start(&mut self) -> AppResult<()> {
        self.game.start().await?;
        self.quiz_over = false;
        self.show_current_question()
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn is_quiz_over(&self) -> bool {
        self.quiz_over
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn display_state(&self) -> AppResult<DisplayState> {
        let question = self.game.current_question()?;
        Ok(DisplayState::new(self.game.level(), question))
    }

    pub fn status(&self) -> GameStatus {
        let display = if self.quiz_over {
            None
        } else {
            self.display_state().ok()
        };

        GameStatus {
            level: self.game.level(),
            num_levels: self.game.num_levels(),
            state: self.game.state(),
            score: self.game.current_score().to_string(),
            quiz_over: self.quiz_over,
            message: self.message.clone(),
            quiz_name: self.game.current_quiz().map(|q| q.name().to_string()),
            quiz_loaded_at: self.game.current_quiz().map(|q| q.loaded_at()),
            display,
        }
    }

    /// Single text entry point: a level choice once the quiz is over,
    /// otherwise an answer ID.
    pub async fn handle_input(&mut self, input: &str) -> AppResult<InputOutcome> {
        if self.quiz_over {
            return match input.parse::<LevelChoice>() {
                Ok(choice) => {
                    self.choose_next_level(choice).await?;
                    Ok(InputOutcome::LevelChosen(choice))
                }
                Err(_) => Ok(InputOutcome::Ignored),
            };
        }

        match input.trim().parse::<u32>() {
            Ok(id) => Ok(InputOutcome::Answered(self.submit_answer(AnswerId(id))?)),
            Err(_) => Ok(InputOutcome::Answered(AnswerOutcome::NotFound)),
        }
    }

    pub fn submit_answer(&mut self, answer_id: AnswerId) -> AppResult<AnswerOutcome> {
        if self.quiz_over {
            return Err(AppError::InvalidState(
                "the quiz is over, choose 1 to redo this level or 2 to advance".to_string(),
            ));
        }

        let outcome = self.game.process_answer(answer_id)?;
        if outcome == AnswerOutcome::NotFound {
            return Ok(outcome);
        }

        let exhausted = self.game.next_question()?.is_none();
        if exhausted {
            self.quiz_over = true;
            self.message = score_message(self.game.current_score());
        } else {
            self.show_current_question()?;
        }
        Ok(outcome)
    }

    pub async fn choose_next_level(&mut self, choice: LevelChoice) -> AppResult<()> {
        if !self.quiz_over {
            return Err(AppError::InvalidState(
                "the current quiz is still in progress".to_string(),
            ));
        }

        self.game
            .finish_level(choice == LevelChoice::Advance)
            .await?;
        self.quiz_over = false;
        self.show_current_question()
    }

    fn show_current_question(&mut self) -> AppResult<()> {
        let question = self.game.current_question()?;
        self.message = question_message(question, self.game.level());
        Ok(())
    }
}

fn question_message(question: &Question, level: usize) -> String {
    let mut message = format!("{}\nLevel: {}\n", question.text(), level);
    for answer in question.answers() {
        message.push_str(&format!("{}. {}\n", answer.id(), answer.text()));
    }
    message
}

fn score_message(score: Score) -> String {
    format!(
        "Your score is {}! Choose 1 to redo this level, choose 2 to advance to the next level.",
        score
    )
}

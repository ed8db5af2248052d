use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{AnswerId, Question};
use crate::services::answer_handler::InputOutcome;
use crate::services::game_service::{AnswerOutcome, GameState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerView {
    pub id: AnswerId,
    pub text: String,
}

/// What the player sees for the active question. Never carries the correct answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    pub level: usize,
    pub question: String,
    pub answers: Vec<AnswerView>,
}

impl DisplayState {
    pub fn new(level: usize, question: &Question) -> Self {
        DisplayState {
            level,
            question: question.text().to_string(),
            answers: question
                .answers()
                .iter()
                .map(|a| AnswerView {
                    id: a.id(),
                    text: a.text().to_string(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnswerResult {
    Graded {
        correct: bool,
    },
    NotFound {
        #[serde(rename = "notFound")]
        not_found: bool,
    },
}

impl From<AnswerOutcome> for AnswerResult {
    fn from(outcome: AnswerOutcome) -> Self {
        match outcome {
            AnswerOutcome::Correct => AnswerResult::Graded { correct: true },
            AnswerOutcome::Wrong => AnswerResult::Graded { correct: false },
            AnswerOutcome::NotFound => AnswerResult::NotFound { not_found: true },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitAnswerResponse {
    #[serde(flatten)]
    pub result: AnswerResult,
    pub message: String,
    pub quiz_over: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerInputResponse {
    /// `answered`, `level_chosen` or `ignored`
    pub outcome: &'static str,
    #[serde(flatten)]
    pub result: Option<AnswerResult>,
    pub message: String,
    pub quiz_over: bool,
}

impl PlayerInputResponse {
    pub fn new(outcome: InputOutcome, message: &str, quiz_over: bool) -> Self {
        let (kind, result) = match outcome {
            InputOutcome::Answered(answer) => ("answered", Some(answer.into())),
            InputOutcome::LevelChosen(_) => ("level_chosen", None),
            InputOutcome::Ignored => ("ignored", None),
        };

        PlayerInputResponse {
            outcome: kind,
            result,
            message: message.to_string(),
            quiz_over,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GameStatus {
    pub level: usize,
    pub num_levels: usize,
    pub state: GameState,
    pub score: String,
    pub quiz_over: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz_loaded_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayState>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn answer_result_wire_shapes() {
        let correct = serde_json::to_value(AnswerResult::from(AnswerOutcome::Correct)).unwrap();
        assert_eq!(correct, json!({ "correct": true }));

        let missing = serde_json::to_value(AnswerResult::from(AnswerOutcome::NotFound)).unwrap();
        assert_eq!(missing, json!({ "notFound": true }));
    }

    #[test]
    fn submit_answer_response_flattens_result() {
        let response = SubmitAnswerResponse {
            result: AnswerOutcome::Wrong.into(),
            message: "next".to_string(),
            quiz_over: false,
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({ "correct": false, "message": "next", "quiz_over": false })
        );
    }

    #[test]
    fn display_state_never_exposes_correctness() {
        let question = Question::new("q", "right", "wrong", "", "");
        let display = DisplayState::new(1, &question);

        let json = serde_json::to_string(&display).unwrap();
        assert!(!json.contains("correct"));
        assert_eq!(display.answers.len(), 2);
    }

    #[test]
    fn player_input_response_shapes() {
        let answered = PlayerInputResponse::new(
            InputOutcome::Answered(AnswerOutcome::NotFound),
            "same question",
            false,
        );
        assert_eq!(
            serde_json::to_value(&answered).unwrap(),
            json!({
                "outcome": "answered",
                "notFound": true,
                "message": "same question",
                "quiz_over": false
            })
        );

        let ignored = PlayerInputResponse::new(InputOutcome::Ignored, "prompt", true);
        assert_eq!(
            serde_json::to_value(&ignored).unwrap(),
            json!({ "outcome": "ignored", "message": "prompt", "quiz_over": true })
        );
    }
}

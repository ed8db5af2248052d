use serde::Deserialize;
use validator::Validate;

/// Any ID is accepted; IDs that match no answer are graded as not found.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAnswerRequest {
    pub answer_id: u32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChooseLevelRequest {
    // "1" redoes the level, "2" advances
    #[validate(length(equal = 1, message = "Choice must be 1 or 2"))]
    pub choice: String,
}

/// Free text from the player: an answer ID while a quiz runs, a level choice after.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PlayerInputRequest {
    #[validate(length(min = 1, max = 32, message = "Input must be 1 to 32 characters"))]
    pub input: String,
}

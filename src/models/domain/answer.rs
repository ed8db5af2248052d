use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordinal identifier of an answer within its question, starting at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct AnswerId(pub u32);

impl fmt::Display for AnswerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AnswerId {
    fn from(id: u32) -> Self {
        AnswerId(id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Answer {
    id: AnswerId,
    text: String,
    is_correct: bool,
}

impl Answer {
    pub fn new(id: AnswerId, text: &str, is_correct: bool) -> Self {
        Answer {
            id,
            text: text.to_string(),
            is_correct,
        }
    }

    pub fn id(&self) -> AnswerId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}

use chrono::{DateTime, Utc};

use crate::models::domain::question::Question;

/// One level's worth of questions, kept in data-source order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quiz {
    name: String,
    questions: Vec<Question>,
    loaded_at: DateTime<Utc>,
}

impl Quiz {
    pub fn new(name: &str, questions: Vec<Question>) -> Self {
        Quiz {
            name: name.to_string(),
            questions,
            loaded_at: Utc::now(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

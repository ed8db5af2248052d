use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::domain::Question;

/// A raw question row as served by the question data source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionRecord {
    #[serde(rename = "testName")]
    pub test_name: String,
    pub name: String,
    #[serde(default)]
    pub correct: String,
    #[serde(default)]
    pub wrong1: String,
    #[serde(default)]
    pub wrong2: String,
    #[serde(default)]
    pub wrong3: String,
}

impl TryFrom<&QuestionRecord> for Question {
    type Error = AppError;

    fn try_from(record: &QuestionRecord) -> Result<Self, Self::Error> {
        let has_distractors = [&record.wrong1, &record.wrong2, &record.wrong3]
            .iter()
            .any(|w| !w.is_empty());

        if record.correct.is_empty() && has_distractors {
            return Err(AppError::InvalidQuestion(format!(
                "question '{}' in quiz '{}' has answers but no correct answer",
                record.name, record.test_name
            )));
        }

        Ok(Question::new(
            &record.name,
            &record.correct,
            &record.wrong1,
            &record.wrong2,
            &record.wrong3,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_deserializes_from_camel_case_test_name() {
        let json = r#"{
            "testName": "Basics",
            "name": "2 + 2?",
            "correct": "4",
            "wrong1": "3",
            "wrong2": "5",
            "wrong3": ""
        }"#;

        let record: QuestionRecord = serde_json::from_str(json).expect("record should parse");
        assert_eq!(record.test_name, "Basics");
        assert_eq!(record.correct, "4");
        assert_eq!(record.wrong3, "");
    }

    #[test]
    fn record_defaults_missing_distractors_to_empty() {
        let json = r#"{"testName": "Basics", "name": "q", "correct": "yes"}"#;

        let record: QuestionRecord = serde_json::from_str(json).expect("record should parse");
        let question = Question::try_from(&record).expect("record should convert");
        assert_eq!(question.answers().len(), 1);
    }

    #[test]
    fn record_without_correct_answer_is_rejected() {
        let record = QuestionRecord {
            test_name: "Basics".to_string(),
            name: "q".to_string(),
            correct: String::new(),
            wrong1: "a".to_string(),
            wrong2: String::new(),
            wrong3: String::new(),
        };

        let err = Question::try_from(&record).unwrap_err();
        assert!(matches!(err, AppError::InvalidQuestion(_)));
    }
}

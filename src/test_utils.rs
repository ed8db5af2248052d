use crate::models::dto::question_record::QuestionRecord;

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Creates a single question record
    pub fn record(test_name: &str, name: &str, correct: &str, wrong: [&str; 3]) -> QuestionRecord {
        QuestionRecord {
            test_name: test_name.to_string(),
            name: name.to_string(),
            correct: correct.to_string(),
            wrong1: wrong[0].to_string(),
            wrong2: wrong[1].to_string(),
            wrong3: wrong[2].to_string(),
        }
    }

    /// Three interleaved quizzes with 2, 3 and 1 questions
    pub fn sample_records() -> Vec<QuestionRecord> {
        vec![
            record("Geography", "Geography 1", "Paris", ["Lyon", "Nice", "Lille"]),
            record("History", "History 1", "1066", ["1067", "1166", ""]),
            record("Geography", "Geography 2", "Nile", ["Amazon", "", ""]),
            record("History", "History 2", "Rome", ["Athens", "Sparta", "Troy"]),
            record("Science", "Science 1", "H2O", ["CO2", "O2", "NaCl"]),
            record("History", "History 3", "1945", ["1939", "", ""]),
        ]
    }

    /// A two-question quiz followed by a one-question quiz
    pub fn two_question_records() -> Vec<QuestionRecord> {
        vec![
            record("First", "First 1", "a", ["b", "c", "d"]),
            record("First", "First 2", "e", ["f", "", ""]),
            record("Second", "Second 1", "g", ["h", "i", ""]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_record() {
        let record = record("Quiz", "Question", "yes", ["no", "", ""]);
        assert_eq!(record.test_name, "Quiz");
        assert_eq!(record.wrong1, "no");
        assert!(record.wrong3.is_empty());
    }

    #[test]
    fn test_fixtures_sample_records() {
        let records = sample_records();
        assert_eq!(records.len(), 6);
        assert_eq!(records[0].test_name, "Geography");
        assert_eq!(records[1].test_name, "History");
        assert_eq!(records[4].test_name, "Science");
    }
}

use rand::{seq::SliceRandom, Rng};

use crate::models::domain::answer::{Answer, AnswerId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    text: String,
    answers: Vec<Answer>,
    correct_answer_id: Option<AnswerId>,
}

impl Question {
    /// Builds a question from one correct answer and up to three distractors.
    ///
    /// Empty answer strings are dropped, the rest are shuffled and numbered
    /// from 1 in their shuffled order.
    pub fn new(text: &str, correct: &str, wrong1: &str, wrong2: &str, wrong3: &str) -> Self {
        Self::with_rng(
            text,
            correct,
            [wrong1, wrong2, wrong3],
            &mut rand::thread_rng(),
        )
    }

    pub fn with_rng<R: Rng + ?Sized>(
        text: &str,
        correct: &str,
        wrong: [&str; 3],
        rng: &mut R,
    ) -> Self {
        let mut candidates: Vec<(&str, bool)> = std::iter::once((correct, true))
            .chain(wrong.into_iter().map(|w| (w, false)))
            .filter(|(answer_text, _)| !answer_text.is_empty())
            .collect();

        candidates.shuffle(rng);

        let answers: Vec<Answer> = candidates
            .into_iter()
            .enumerate()
            .map(|(i, (answer_text, is_correct))| {
                Answer::new(AnswerId(i as u32 + 1), answer_text, is_correct)
            })
            .collect();

        let correct_answer_id = answers.iter().find(|a| a.is_correct()).map(Answer::id);

        Question {
            text: text.to_string(),
            answers,
            correct_answer_id,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// `None` only when every answer string was empty.
    pub fn correct_answer_id(&self) -> Option<AnswerId> {
        self.correct_answer_id
    }

    pub fn answer(&self, id: AnswerId) -> Option<&Answer> {
        self.answers.iter().find(|a| a.id() == id)
    }

    pub fn has_answer_id(&self, id: AnswerId) -> bool {
        self.answer(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn texts(question: &Question) -> Vec<String> {
        let mut texts: Vec<String> = question
            .answers()
            .iter()
            .map(|a| a.text().to_string())
            .collect();
        texts.sort();
        texts
    }

    #[test]
    fn question_keeps_every_non_empty_answer() {
        let question = Question::new("Capital of France?", "Paris", "Lyon", "Nice", "Lille");

        assert_eq!(question.answers().len(), 4);
        assert_eq!(question.answers().iter().filter(|a| a.is_correct()).count(), 1);
        assert_eq!(texts(&question), vec!["Lille", "Lyon", "Nice", "Paris"]);
    }

    #[test]
    fn question_drops_empty_distractors() {
        for k in 0..=3 {
            let mut wrong = ["", "", ""];
            for (i, slot) in wrong.iter_mut().enumerate().take(k) {
                *slot = ["A", "B", "C"][i];
            }
            let question = Question::new("q", "right", wrong[0], wrong[1], wrong[2]);

            assert_eq!(question.answers().len(), 1 + k);
            assert_eq!(question.answers().iter().filter(|a| a.is_correct()).count(), 1);

            let correct = question
                .answer(question.correct_answer_id().expect("correct id should be set"))
                .expect("correct id should resolve");
            assert!(correct.is_correct());
            assert_eq!(correct.text(), "right");
        }
    }

    #[test]
    fn question_ids_are_contiguous_from_one() {
        let question = Question::new("q", "a", "", "b", "c");
        let ids: Vec<u32> = question.answers().iter().map(|a| a.id().0).collect();

        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn shuffle_only_permutes_answers() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..50 {
            let question = Question::with_rng("q", "w", ["x", "y", "z"], &mut rng);
            assert_eq!(texts(&question), vec!["w", "x", "y", "z"]);
        }
    }

    #[test]
    fn shuffle_places_correct_answer_in_more_than_one_position() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            let question = Question::with_rng("q", "w", ["x", "y", "z"], &mut rng);
            seen.insert(question.correct_answer_id());
        }

        assert!(seen.len() > 1);
    }

    #[test]
    fn all_empty_answers_leave_question_without_correct_id() {
        let question = Question::new("q", "", "", "", "");

        assert!(question.answers().is_empty());
        assert_eq!(question.correct_answer_id(), None);
        assert!(!question.has_answer_id(AnswerId(1)));
    }
}

use std::{fmt, sync::Arc};

use serde::Serialize;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{AnswerId, Question, Quiz},
        dto::question_record::QuestionRecord,
    },
    repositories::QuestionRepository,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameState {
    Idle,
    Loading,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Wrong,
    /// No answer with the submitted ID exists; nothing was counted.
    NotFound,
}

impl AnswerOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerOutcome::Correct)
    }
}

/// Percentage of correctly answered questions, rounded down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score(u32);

impl Score {
    pub fn percent(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

pub struct Game {
    repository: Arc<dyn QuestionRepository>,
    level: usize,
    current_quiz: Option<Quiz>,
    current_question_index: usize,
    num_correct: u32,
    num_wrong: u32,
    num_levels: usize,
    state: GameState,
}

impl Game {
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self {
            repository,
            level: 1,
            current_quiz: None,
            current_question_index: 0,
            num_correct: 0,
            num_wrong: 0,
            num_levels: 0,
            state: GameState::Idle,
        }
    }

    /// Loads the quiz for level 1 and resets the score counters.
    pub async fn start(&mut self) -> AppResult<()> {
        self.load_level(1).await
    }

    pub fn current_question(&self) -> AppResult<&Question> {
        let quiz = self.current_quiz.as_ref().ok_or(AppError::QuizNotLoaded)?;
        quiz.question(self.current_question_index)
            .ok_or(AppError::QuizExhausted)
    }

    /// Grades `answer_id` against the current question and counts it.
    ///
    /// Every graded call is counted, so callers must move on with
    /// [`Game::next_question`] after each `Correct` or `Wrong` outcome to keep
    /// the score within 100%.
    pub fn process_answer(&mut self, answer_id: AnswerId) -> AppResult<AnswerOutcome> {
        let question = self.current_question()?;
        if !question.has_answer_id(answer_id) {
            log::debug!("Answer {} not found", answer_id);
            return Ok(AnswerOutcome::NotFound);
        }

        if question.correct_answer_id() == Some(answer_id) {
            self.num_correct += 1;
            log::debug!("Answer {} is correct", answer_id);
            Ok(AnswerOutcome::Correct)
        } else {
            self.num_wrong += 1;
            log::debug!("Answer {} is wrong", answer_id);
            Ok(AnswerOutcome::Wrong)
        }
    }

    /// Moves to the next question. `None` means the quiz is exhausted; the
    /// index then stays past the end until the level is finished.
    pub fn next_question(&mut self) -> AppResult<Option<&Question>> {
        let len = self
            .current_quiz
            .as_ref()
            .ok_or(AppError::QuizNotLoaded)?
            .len();

        if self.current_question_index < len {
            self.current_question_index += 1;
        }

        if self.current_question_index >= len {
            if self.state != GameState::Completed {
                log::info!(
                    "Level {} completed with score {}",
                    self.level,
                    self.current_score()
                );
            }
            self.state = GameState::Completed;
            return Ok(None);
        }

        Ok(self
            .current_quiz
            .as_ref()
            .and_then(|quiz| quiz.question(self.current_question_index)))
    }

    pub fn current_score(&self) -> Score {
        match &self.current_quiz {
            Some(quiz) if !quiz.is_empty() => {
                Score((self.num_correct as usize * 100 / quiz.len()) as u32)
            }
            _ => Score(0),
        }
    }

    /// Reloads the current level, or the next one when `advance` is set.
    /// Levels wrap back to 1 after the last one.
    pub async fn finish_level(&mut self, advance: bool) -> AppResult<()> {
        let level = if advance {
            next_level(self.level, self.num_levels)
        } else {
            self.level
        };
        self.load_level(level).await
    }

    async fn load_level(&mut self, level: usize) -> AppResult<()> {
        let repository = Arc::clone(&self.repository);
        let loading = LoadingGuard::enter(&mut self.state);

        let loaded = match repository.fetch_all().await {
            Ok(records) => quiz_for_level(&records, level),
            Err(err) => Err(err),
        };

        match loaded {
            Ok((quiz, num_levels)) => {
                log::info!(
                    "Loaded quiz '{}' for level {} of {} ({} questions)",
                    quiz.name(),
                    level,
                    num_levels,
                    quiz.len()
                );
                self.level = level;
                self.num_levels = num_levels;
                self.current_quiz = Some(quiz);
                self.current_question_index = 0;
                self.num_correct = 0;
                self.num_wrong = 0;
                loading.commit(GameState::InProgress);
                Ok(())
            }
            Err(err) => {
                log::error!("Failed to load quiz for level {}: {}", level, err);
                Err(err)
            }
        }
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn num_levels(&self) -> usize {
        self.num_levels
    }

    pub fn num_correct(&self) -> u32 {
        self.num_correct
    }

    pub fn num_wrong(&self) -> u32 {
        self.num_wrong
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn current_quiz(&self) -> Option<&Quiz> {
        self.current_quiz.as_ref()
    }

    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }
}

/// Holds the game in `Loading` for the duration of a load. Unless committed,
/// dropping it puts back the previous state, including when the load future
/// is cancelled mid-fetch.
struct LoadingGuard<'a> {
    state: &'a mut GameState,
    previous: GameState,
    committed: bool,
}

impl<'a> LoadingGuard<'a> {
    fn enter(state: &'a mut GameState) -> Self {
        let previous = *state;
        *state = GameState::Loading;
        Self {
            state,
            previous,
            committed: false,
        }
    }

    fn commit(mut self, state: GameState) {
        *self.state = state;
        self.committed = true;
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if !self.committed {
            *self.state = self.previous;
        }
    }
}

fn next_level(level: usize, num_levels: usize) -> usize {
    if level + 1 > num_levels {
        1
    } else {
        level + 1
    }
}

/// Groups records by quiz name in first-seen order and builds the quiz for
/// the 1-based `level`. Also returns how many distinct quizzes exist.
pub fn quiz_for_level(records: &[QuestionRecord], level: usize) -> AppResult<(Quiz, usize)> {
    let mut quiz_names: Vec<&str> = Vec::new();
    for record in records {
        if !quiz_names.contains(&record.test_name.as_str()) {
            quiz_names.push(&record.test_name);
        }
    }

    let num_levels = quiz_names.len();
    if num_levels == 0 {
        return Err(AppError::NotFound(
            "question source returned no quizzes".to_string(),
        ));
    }

    let quiz_name = level
        .checked_sub(1)
        .and_then(|i| quiz_names.get(i))
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "no quiz for level {} ({} levels available)",
                level, num_levels
            ))
        })?;

    let questions = records
        .iter()
        .filter(|record| record.test_name == *quiz_name)
        .map(Question::try_from)
        .collect::<AppResult<Vec<_>>>()?;

    Ok((Quiz::new(quiz_name, questions), num_levels))
}

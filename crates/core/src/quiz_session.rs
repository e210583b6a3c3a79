use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

use crate::model::{AnswerMap, Question, QuestionId, QuizId, QuizResult, QuizResultError, UserId};
use crate::timer::{Countdown, TickOutcome};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSessionError {
    #[error("answers are locked in review mode")]
    ReviewLocked,

    #[error("question index {index} out of range for {len} questions")]
    IndexOutOfRange { index: usize, len: usize },
}

/// How a single option should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    /// Active session, option not chosen.
    Selectable,
    /// Active session, option currently chosen.
    Selected,
    /// Review mode: this is the correct answer.
    Correct,
    /// Review mode: chosen, but not the correct answer.
    Incorrect,
    /// Review mode: neither chosen nor correct.
    Neutral,
}

impl OptionState {
    #[must_use]
    pub fn is_interactive(self) -> bool {
        matches!(self, Self::Selectable | Self::Selected)
    }
}

/// Decides how `option` renders given the stored answer and review flag.
///
/// Comparisons are exact and case-sensitive.
#[must_use]
pub fn option_state(
    question: &Question,
    stored: Option<&str>,
    option: &str,
    review_mode: bool,
) -> OptionState {
    let chosen = stored == Some(option);
    if !review_mode {
        return if chosen {
            OptionState::Selected
        } else {
            OptionState::Selectable
        };
    }
    if question.is_correct(option) {
        OptionState::Correct
    } else if chosen {
        OptionState::Incorrect
    } else {
        OptionState::Neutral
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub total: u32,
    pub answered: u32,
    pub correct: u32,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory state of one quiz attempt.
///
/// Owns the answer map, the current position, the countdown and the review
/// flag. Review mode is terminal: once entered, answers are frozen but
/// navigation keeps working.
pub struct QuizSession {
    quiz_id: QuizId,
    questions: Vec<Question>,
    answers: AnswerMap,
    current: usize,
    countdown: Countdown,
    review_mode: bool,
    started_at: DateTime<Utc>,
}

impl QuizSession {
    #[must_use]
    pub fn new(
        quiz_id: QuizId,
        questions: Vec<Question>,
        duration_secs: u32,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            quiz_id,
            questions,
            answers: AnswerMap::new(),
            current: 0,
            countdown: Countdown::new(duration_secs),
            review_mode: false,
            started_at,
        }
    }

    #[must_use]
    pub fn quiz_id(&self) -> &QuizId {
        &self.quiz_id
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.countdown.remaining()
    }

    #[must_use]
    pub fn is_review(&self) -> bool {
        self.review_mode
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Records `option` for `question_id`, overwriting any earlier choice.
    ///
    /// The option is not checked against the question's option list.
    ///
    /// # Errors
    ///
    /// Returns `QuizSessionError::ReviewLocked` once the session is in review
    /// mode; the answer map is left untouched.
    pub fn answer(
        &mut self,
        question_id: QuestionId,
        option: impl Into<String>,
    ) -> Result<(), QuizSessionError> {
        if self.review_mode {
            return Err(QuizSessionError::ReviewLocked);
        }
        self.answers.record(question_id, option);
        Ok(())
    }

    /// Jumps to `index`, answered or not, in either mode.
    ///
    /// # Errors
    ///
    /// Returns `QuizSessionError::IndexOutOfRange` for an index past the end;
    /// the current position is left untouched.
    pub fn navigate(&mut self, index: usize) -> Result<(), QuizSessionError> {
        if index >= self.questions.len() {
            return Err(QuizSessionError::IndexOutOfRange {
                index,
                len: self.questions.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    /// Enters review mode. Returns `false` if the session was already there.
    pub fn expire_or_submit(&mut self) -> bool {
        self.countdown.halt();
        if self.review_mode {
            return false;
        }
        self.review_mode = true;
        true
    }

    /// Advances the countdown by one second; expiry switches to review mode.
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.countdown.tick();
        if outcome == TickOutcome::Expired {
            self.expire_or_submit();
        }
        outcome
    }

    #[must_use]
    pub fn option_state(&self, question: &Question, option: &str) -> OptionState {
        option_state(
            question,
            self.answers.get(question.id()),
            option,
            self.review_mode,
        )
    }

    #[must_use]
    pub fn score(&self) -> Score {
        let mut score = Score {
            total: saturating_u32(self.questions.len()),
            ..Score::default()
        };
        for question in &self.questions {
            if let Some(selected) = self.answers.get(question.id()) {
                score.answered += 1;
                if question.is_correct(selected) {
                    score.correct += 1;
                }
            }
        }
        score
    }

    /// # Errors
    ///
    /// Returns `QuizResultError` if `completed_at` precedes the session start.
    pub fn result(
        &self,
        user_id: UserId,
        completed_at: DateTime<Utc>,
    ) -> Result<QuizResult, QuizResultError> {
        let score = self.score();
        QuizResult::new(
            self.quiz_id.clone(),
            user_id,
            self.started_at,
            completed_at,
            score.total,
            score.answered,
            score.correct,
        )
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("quiz_id", &self.quiz_id)
            .field("questions_len", &self.questions.len())
            .field("answered", &self.answers.len())
            .field("current", &self.current)
            .field("remaining", &self.countdown.remaining())
            .field("review_mode", &self.review_mode)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{QuizId, UserId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizResultError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("counts out of order: correct {correct} <= answered {answered} <= total {total}")]
    CountMismatch {
        total: u32,
        answered: u32,
        correct: u32,
    },
}

/// Outcome of one finished quiz attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    quiz_id: QuizId,
    user_id: UserId,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    total: u32,
    answered: u32,
    correct: u32,
}

impl QuizResult {
    /// # Errors
    ///
    /// Returns `QuizResultError::InvalidTimeRange` if `completed_at < started_at`,
    /// or `QuizResultError::CountMismatch` if the counts are not nested.
    pub fn new(
        quiz_id: QuizId,
        user_id: UserId,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        total: u32,
        answered: u32,
        correct: u32,
    ) -> Result<Self, QuizResultError> {
        if completed_at < started_at {
            return Err(QuizResultError::InvalidTimeRange);
        }
        if correct > answered || answered > total {
            return Err(QuizResultError::CountMismatch {
                total,
                answered,
                correct,
            });
        }

        Ok(Self {
            quiz_id,
            user_id,
            started_at,
            completed_at,
            total,
            answered,
            correct,
        })
    }

    #[must_use]
    pub fn quiz_id(&self) -> &QuizId {
        &self.quiz_id
    }

    #[must_use]
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn answered(&self) -> u32 {
        self.answered
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }
}

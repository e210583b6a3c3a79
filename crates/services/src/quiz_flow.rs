use std::sync::Arc;

use rand::seq::SliceRandom;

use quiz_core::QuizSession;
use quiz_core::model::{Quiz, QuizId, QuizResult, UserId, Viewer};
use storage::repository::{PurchaseRepository, QuizRepository, QuizResultRepository};

use crate::Clock;
use crate::error::QuizFlowError;

/// Stored outcome of a submitted session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSubmission {
    pub result_id: i64,
    pub result: QuizResult,
}

/// Loads quizzes into sessions and persists their results.
#[derive(Clone)]
pub struct QuizFlowService {
    clock: Clock,
    quizzes: Arc<dyn QuizRepository>,
    purchases: Arc<dyn PurchaseRepository>,
    results: Arc<dyn QuizResultRepository>,
    shuffle_questions: bool,
}

impl QuizFlowService {
    #[must_use]
    pub fn new(
        clock: Clock,
        quizzes: Arc<dyn QuizRepository>,
        purchases: Arc<dyn PurchaseRepository>,
        results: Arc<dyn QuizResultRepository>,
    ) -> Self {
        Self {
            clock,
            quizzes,
            purchases,
            results,
            shuffle_questions: false,
        }
    }

    /// Present questions in random order.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle_questions = shuffle;
        self
    }

    /// # Errors
    ///
    /// Returns `QuizFlowError::Storage` on read failures.
    pub async fn catalog(&self, limit: u32) -> Result<Vec<Quiz>, QuizFlowError> {
        Ok(self.quizzes.list_quizzes(limit).await?)
    }

    /// # Errors
    ///
    /// Returns `QuizFlowError::NotFound` if there is no such quiz.
    pub async fn quiz(&self, quiz_id: &QuizId) -> Result<Quiz, QuizFlowError> {
        self.quizzes
            .get_quiz(quiz_id)
            .await?
            .ok_or_else(|| QuizFlowError::NotFound(quiz_id.clone()))
    }

    /// Opens a new session on `quiz_id` for `viewer`.
    ///
    /// Paid quizzes require a recorded purchase unless the viewer is an admin.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::NotFound` or `QuizFlowError::NotPurchased`,
    /// or a storage error.
    pub async fn start_quiz(
        &self,
        quiz_id: &QuizId,
        viewer: &Viewer,
    ) -> Result<QuizSession, QuizFlowError> {
        let quiz = self.quiz(quiz_id).await?;
        let user_id = viewer.identity().user_id();
        if !quiz.is_free()
            && !viewer.role().is_admin()
            && !self.purchases.has_purchase(user_id, quiz_id).await?
        {
            return Err(QuizFlowError::NotPurchased(quiz_id.clone()));
        }

        let mut questions = quiz.questions().to_vec();
        if self.shuffle_questions {
            questions.shuffle(&mut rand::rng());
        }
        tracing::info!(%quiz_id, %user_id, questions = questions.len(), "quiz session started");
        Ok(QuizSession::new(
            quiz_id.clone(),
            questions,
            quiz.duration_secs(),
            self.clock.now(),
        ))
    }

    /// Ends `session` (if the timer has not already) and stores its result.
    ///
    /// Call once per session; every call appends a result.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError` if the result is inconsistent or cannot be stored.
    pub async fn submit(
        &self,
        session: &mut QuizSession,
        user_id: &UserId,
    ) -> Result<QuizSubmission, QuizFlowError> {
        session.expire_or_submit();
        let result = session.result(user_id.clone(), self.clock.now())?;
        let result_id = self.results.append_result(&result).await?;
        tracing::info!(
            quiz_id = %result.quiz_id(),
            %user_id,
            correct = result.correct(),
            total = result.total(),
            "quiz submitted"
        );
        Ok(QuizSubmission { result_id, result })
    }
}

use quiz_core::model::{QuestionId, QuizId, Viewer};
use quiz_core::{QuizSession, TickOutcome};
use services::{QuizFlowError, QuizFlowService, QuizSubmission};

use crate::views::ViewError;
use crate::vm::navigation_vm::{NavigationVm, map_navigation};
use crate::vm::question_vm::{QuestionVm, map_current_question};
use crate::vm::time_fmt::format_countdown;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Answer { question_id: QuestionId, option: String },
    Navigate(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreVm {
    pub correct: u32,
    pub answered: u32,
    pub total: u32,
    pub saved: bool,
}

/// A running quiz plus its stored result, once submitted.
pub struct QuizVm {
    title: String,
    session: QuizSession,
    submission: Option<QuizSubmission>,
}

impl QuizVm {
    #[must_use]
    pub fn new(title: impl Into<String>, session: QuizSession) -> Self {
        Self {
            title: title.into(),
            session,
            submission: None,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn is_review(&self) -> bool {
        self.session.is_review()
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submission.is_some()
    }

    /// Applies a click. Clicks the session refuses (answers in review mode,
    /// stale indices) are dropped.
    pub fn apply(&mut self, intent: QuizIntent) {
        let outcome = match intent {
            QuizIntent::Answer {
                question_id,
                option,
            } => self.session.answer(question_id, option),
            QuizIntent::Navigate(index) => self.session.navigate(index),
        };
        if let Err(err) = outcome {
            tracing::debug!(error = %err, "quiz intent ignored");
        }
    }

    pub fn tick(&mut self) -> TickOutcome {
        self.session.tick()
    }

    #[must_use]
    pub fn timer_label(&self) -> String {
        format_countdown(self.session.time_remaining())
    }

    #[must_use]
    pub fn question(&self) -> Option<QuestionVm> {
        map_current_question(&self.session)
    }

    #[must_use]
    pub fn navigation(&self) -> NavigationVm {
        map_navigation(&self.session)
    }

    #[must_use]
    pub fn score(&self) -> ScoreVm {
        let score = self.session.score();
        ScoreVm {
            correct: score.correct,
            answered: score.answered,
            total: score.total,
            saved: self.submission.is_some(),
        }
    }

    /// Enters review mode and stores the result. A second call is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if the result cannot be stored; the
    /// session still stays in review mode.
    pub async fn submit(&mut self, flow: &QuizFlowService, viewer: &Viewer) -> Result<(), ViewError> {
        if self.submission.is_some() {
            return Ok(());
        }
        let submission = flow
            .submit(&mut self.session, viewer.identity().user_id())
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "storing quiz result failed");
                ViewError::Unknown
            })?;
        self.submission = Some(submission);
        Ok(())
    }
}

/// # Errors
///
/// Returns `ViewError::NotFound` or `ViewError::NotPurchased`, or
/// `ViewError::Unknown` for other failures.
pub async fn start_quiz(
    flow: &QuizFlowService,
    quiz_id: &QuizId,
    viewer: &Viewer,
) -> Result<QuizVm, ViewError> {
    let quiz = flow.quiz(quiz_id).await.map_err(map_flow_error)?;
    let session = flow
        .start_quiz(quiz_id, viewer)
        .await
        .map_err(map_flow_error)?;
    Ok(QuizVm::new(quiz.title(), session))
}

fn map_flow_error(err: QuizFlowError) -> ViewError {
    match err {
        QuizFlowError::NotFound(_) => ViewError::NotFound,
        QuizFlowError::NotPurchased(_) => ViewError::NotPurchased,
        other => {
            tracing::error!(error = %other, "starting quiz failed");
            ViewError::Unknown
        }
    }
}

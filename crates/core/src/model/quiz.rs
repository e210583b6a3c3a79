use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{QuestionId, QuizId};
use crate::model::question::Question;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz title cannot be empty")]
    EmptyTitle,

    #[error("quiz duration must be > 0 seconds")]
    InvalidDuration,

    #[error("duplicate question id {0}")]
    DuplicateQuestion(QuestionId),
}

//
// ─── QUIZ ──────────────────────────────────────────────────────────────────────
//

/// Default time allowed for a quiz when the document does not carry one.
pub const DEFAULT_QUIZ_DURATION_SECS: u32 = 600;

/// Raw quiz document as stored by the content source.
///
/// Call [`QuizDraft::validate`] to obtain a [`Quiz`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizDraft {
    pub id: QuizId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Price in minor currency units (paise). Zero means free.
    #[serde(default)]
    pub price: u32,
    #[serde(default = "default_duration")]
    pub duration_secs: u32,
    #[serde(default)]
    pub questions: Vec<Question>,
}

fn default_duration() -> u32 {
    DEFAULT_QUIZ_DURATION_SECS
}

impl QuizDraft {
    /// # Errors
    ///
    /// Returns `QuizError` when the title is blank, the duration is zero, or two
    /// questions share an id.
    pub fn validate(self) -> Result<Quiz, QuizError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(QuizError::EmptyTitle);
        }
        if self.duration_secs == 0 {
            return Err(QuizError::InvalidDuration);
        }

        let mut seen = HashSet::with_capacity(self.questions.len());
        for question in &self.questions {
            if !seen.insert(question.id()) {
                return Err(QuizError::DuplicateQuestion(question.id().clone()));
            }
        }

        Ok(Quiz {
            id: self.id,
            title: title.to_owned(),
            description: self
                .description
                .map(|d| d.trim().to_owned())
                .filter(|d| !d.is_empty()),
            price: self.price,
            duration_secs: self.duration_secs,
            questions: self.questions,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    id: QuizId,
    title: String,
    description: Option<String>,
    price: u32,
    duration_secs: u32,
    questions: Vec<Question>,
}

impl Quiz {
    #[must_use]
    pub fn id(&self) -> &QuizId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn price(&self) -> u32 {
        self.price
    }

    #[must_use]
    pub fn is_free(&self) -> bool {
        self.price == 0
    }

    #[must_use]
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Back to the storable document shape.
    #[must_use]
    pub fn to_draft(&self) -> QuizDraft {
        QuizDraft {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            price: self.price,
            duration_secs: self.duration_secs,
            questions: self.questions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str) -> Question {
        Question::new(QuestionId::new(id).unwrap(), "Q", vec!["A".into()], "A")
    }

    fn draft(questions: Vec<Question>) -> QuizDraft {
        QuizDraft {
            id: QuizId::new("rust-101").unwrap(),
            title: "  Rust 101 ".into(),
            description: Some("   ".into()),
            price: 4900,
            duration_secs: 300,
            questions,
        }
    }

    #[test]
    fn validate_trims_and_drops_blank_description() {
        let quiz = draft(vec![question("q1"), question("q2")]).validate().unwrap();
        assert_eq!(quiz.title(), "Rust 101");
        assert_eq!(quiz.description(), None);
        assert_eq!(quiz.questions().len(), 2);
        assert!(!quiz.is_free());
    }

    #[test]
    fn duplicate_question_ids_are_rejected() {
        let err = draft(vec![question("q1"), question("q1")])
            .validate()
            .unwrap_err();
        assert_eq!(err, QuizError::DuplicateQuestion(QuestionId::new("q1").unwrap()));
    }

    #[test]
    fn zero_duration_is_rejected() {
        let mut d = draft(Vec::new());
        d.duration_secs = 0;
        assert_eq!(d.validate().unwrap_err(), QuizError::InvalidDuration);
    }

    #[test]
    fn document_defaults_apply() {
        let d: QuizDraft = serde_json::from_str(r#"{"id":"free","title":"Free quiz"}"#).unwrap();
        let quiz = d.validate().unwrap();
        assert!(quiz.is_free());
        assert_eq!(quiz.duration_secs(), DEFAULT_QUIZ_DURATION_SECS);
        assert!(quiz.questions().is_empty());
    }
}

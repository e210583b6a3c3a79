use serde::{Deserialize, Serialize};

use crate::model::ids::QuestionId;

/// One multiple-choice question as delivered by the content source.
///
/// Read-only once loaded: the quiz session never edits questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    id: QuestionId,
    #[serde(rename = "question")]
    text: String,
    #[serde(default)]
    options: Vec<String>,
    correct_answer: String,
}

impl Question {
    #[must_use]
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            options,
            correct_answer: correct_answer.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    /// Exact, case-sensitive comparison against the correct answer.
    #[must_use]
    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_answer == option
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correctness_is_case_sensitive() {
        let q = Question::new(
            QuestionId::new("q1").unwrap(),
            "Capital of France?",
            vec!["Paris".into(), "paris".into()],
            "Paris",
        );
        assert!(q.is_correct("Paris"));
        assert!(!q.is_correct("paris"));
    }

    #[test]
    fn document_without_options_loads_empty() {
        let q: Question =
            serde_json::from_str(r#"{"id":"q1","question":"?","correctAnswer":"A"}"#).unwrap();
        assert!(q.options().is_empty());
        assert_eq!(q.text(), "?");
    }
}

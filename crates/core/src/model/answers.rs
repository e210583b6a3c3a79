use std::collections::HashMap;

use crate::model::ids::QuestionId;

/// Selected option per question for one quiz session.
///
/// A missing key means "unanswered". Entries are overwritten, never removed;
/// a new session starts from a fresh map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerMap {
    entries: HashMap<QuestionId, String>,
}

impl AnswerMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `option` for `question_id`, returning the previous selection.
    pub fn record(&mut self, question_id: QuestionId, option: impl Into<String>) -> Option<String> {
        self.entries.insert(question_id, option.into())
    }

    #[must_use]
    pub fn get(&self, question_id: &QuestionId) -> Option<&str> {
        self.entries.get(question_id).map(String::as_str)
    }

    #[must_use]
    pub fn is_answered(&self, question_id: &QuestionId) -> bool {
        self.entries.contains_key(question_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qid(raw: &str) -> QuestionId {
        QuestionId::new(raw).unwrap()
    }

    #[test]
    fn last_write_wins_per_question() {
        let mut map = AnswerMap::new();
        let replay = [("q1", "A"), ("q2", "B"), ("q1", "C"), ("q3", "D"), ("q2", "A")];
        for (id, option) in replay {
            map.record(qid(id), option);
        }

        assert_eq!(map.len(), 3);
        assert_eq!(map.get(&qid("q1")), Some("C"));
        assert_eq!(map.get(&qid("q2")), Some("A"));
        assert_eq!(map.get(&qid("q3")), Some("D"));
        assert!(!map.is_answered(&qid("q4")));
    }

    #[test]
    fn record_returns_previous_selection() {
        let mut map = AnswerMap::new();
        assert_eq!(map.record(qid("q1"), "A"), None);
        assert_eq!(map.record(qid("q1"), "B"), Some("A".to_string()));
    }
}

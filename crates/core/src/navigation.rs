use crate::quiz_session::QuizSession;

/// Visual state of one entry in the question navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEntryState {
    Current,
    Answered,
    Unanswered,
}

/// Per-question states, in question order. `Current` wins over `Answered`.
#[must_use]
pub fn nav_entry_states(session: &QuizSession) -> Vec<NavEntryState> {
    session
        .questions()
        .iter()
        .enumerate()
        .map(|(index, question)| {
            if index == session.current_index() {
                NavEntryState::Current
            } else if session.answers().is_answered(question.id()) {
                NavEntryState::Answered
            } else {
                NavEntryState::Unanswered
            }
        })
        .collect()
}

/// Answered-of-total progress for the navigator bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
}

impl Progress {
    #[must_use]
    pub fn of(session: &QuizSession) -> Self {
        Self {
            answered: session.answers().len(),
            total: session.question_count(),
        }
    }

    /// `answered / total`, clamped to `[0, 1]`; zero when there are no questions.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.answered as f64 / self.total as f64).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn percent(self) -> f64 {
        self.fraction() * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Question, QuestionId, QuizId};
    use crate::time::fixed_now;

    fn session(n: usize) -> QuizSession {
        let questions = (0..n)
            .map(|i| {
                Question::new(
                    QuestionId::new(format!("q{i}")).unwrap(),
                    "Q",
                    vec!["A".into(), "B".into()],
                    "A",
                )
            })
            .collect();
        QuizSession::new(QuizId::new("quiz").unwrap(), questions, 60, fixed_now())
    }

    #[test]
    fn two_of_five_is_forty_percent() {
        let mut s = session(5);
        s.answer(QuestionId::new("q1").unwrap(), "A").unwrap();
        s.answer(QuestionId::new("q3").unwrap(), "B").unwrap();
        let progress = Progress::of(&s);
        assert!((progress.percent() - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn fraction_tracks_every_intermediate_state() {
        let mut s = session(4);
        for i in 0..4 {
            let progress = Progress::of(&s);
            assert!((progress.fraction() - (i as f64 / 4.0)).abs() < f64::EPSILON);
            s.answer(QuestionId::new(format!("q{i}")).unwrap(), "A").unwrap();
        }
        assert!((Progress::of(&s).fraction() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn fraction_is_clamped_and_safe_on_empty() {
        assert!(Progress { answered: 0, total: 0 }.fraction().abs() < f64::EPSILON);
        let over = Progress { answered: 7, total: 5 };
        assert!((over.fraction() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn entry_states_mark_current_answered_unanswered() {
        let mut s = session(3);
        s.answer(QuestionId::new("q0").unwrap(), "A").unwrap();
        s.answer(QuestionId::new("q2").unwrap(), "A").unwrap();
        s.navigate(2).unwrap();

        assert_eq!(
            nav_entry_states(&s),
            vec![
                NavEntryState::Answered,
                NavEntryState::Unanswered,
                NavEntryState::Current,
            ]
        );
    }
}

use quiz_core::QuizSession;
use quiz_core::navigation::{NavEntryState, Progress, nav_entry_states};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntryVm {
    pub index: usize,
    pub label: String,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationVm {
    pub entries: Vec<NavEntryVm>,
    pub answered: usize,
    pub total: usize,
    /// CSS width of the filled progress bar, e.g. `"40%"`.
    pub progress_width: String,
}

fn entry_class(state: NavEntryState) -> &'static str {
    match state {
        NavEntryState::Current => "nav-entry nav-entry--current",
        NavEntryState::Answered => "nav-entry nav-entry--answered",
        NavEntryState::Unanswered => "nav-entry",
    }
}

#[must_use]
pub fn map_navigation(session: &QuizSession) -> NavigationVm {
    let entries = nav_entry_states(session)
        .into_iter()
        .enumerate()
        .map(|(index, state)| NavEntryVm {
            index,
            label: (index + 1).to_string(),
            class: entry_class(state),
        })
        .collect();
    let progress = Progress::of(session);

    NavigationVm {
        entries,
        answered: progress.answered.min(progress.total),
        total: progress.total,
        progress_width: format!("{}%", progress.percent().round()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{Question, QuestionId, QuizId};
    use quiz_core::time::fixed_now;

    fn session(n: usize) -> QuizSession {
        let questions = (0..n)
            .map(|i| {
                Question::new(
                    QuestionId::new(format!("q{i}")).unwrap(),
                    "Q",
                    vec!["A".into()],
                    "A",
                )
            })
            .collect();
        QuizSession::new(QuizId::new("quiz").unwrap(), questions, 60, fixed_now())
    }

    #[test]
    fn bar_width_follows_answer_count() {
        let mut s = session(5);
        assert_eq!(map_navigation(&s).progress_width, "0%");
        s.answer(QuestionId::new("q0").unwrap(), "A").unwrap();
        s.answer(QuestionId::new("q4").unwrap(), "A").unwrap();
        let vm = map_navigation(&s);
        assert_eq!(vm.progress_width, "40%");
        assert_eq!(vm.answered, 2);
        assert_eq!(vm.entries[0].class, "nav-entry nav-entry--current");
        assert_eq!(vm.entries[4].class, "nav-entry nav-entry--answered");
        assert_eq!(vm.entries[2].class, "nav-entry");
        assert_eq!(vm.entries[2].label, "3");
    }

    #[test]
    fn empty_quiz_has_no_entries() {
        let vm = map_navigation(&session(0));
        assert!(vm.entries.is_empty());
        assert_eq!(vm.progress_width, "0%");
    }
}

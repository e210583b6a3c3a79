use quiz_core::model::QuestionId;
use quiz_core::{OptionState, QuizSession};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub label: String,
    pub state: OptionState,
    pub class: &'static str,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub id: QuestionId,
    /// 1-based.
    pub number: usize,
    pub total: usize,
    pub text: String,
    pub options: Vec<OptionVm>,
}

#[must_use]
pub fn option_class(state: OptionState) -> &'static str {
    match state {
        OptionState::Selectable => "option",
        OptionState::Selected => "option option--selected",
        OptionState::Correct => "option option--correct",
        OptionState::Incorrect => "option option--incorrect",
        OptionState::Neutral => "option option--neutral",
    }
}

/// The question at the session's current index; `None` for an empty quiz.
#[must_use]
pub fn map_current_question(session: &QuizSession) -> Option<QuestionVm> {
    let question = session.current_question()?;
    let options = question
        .options()
        .iter()
        .map(|option| {
            let state = session.option_state(question, option);
            OptionVm {
                label: option.clone(),
                state,
                class: option_class(state),
                disabled: !state.is_interactive(),
            }
        })
        .collect();

    Some(QuestionVm {
        id: question.id().clone(),
        number: session.current_index() + 1,
        total: session.question_count(),
        text: question.text().to_string(),
        options,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{Question, QuizId};
    use quiz_core::time::fixed_now;

    fn session(options: Vec<String>) -> QuizSession {
        let question = Question::new(QuestionId::new("q1").unwrap(), "Pick", options, "B");
        QuizSession::new(QuizId::new("quiz").unwrap(), vec![question], 30, fixed_now())
    }

    #[test]
    fn active_options_are_clickable() {
        let mut s = session(vec!["A".into(), "B".into()]);
        s.answer(QuestionId::new("q1").unwrap(), "A").unwrap();
        let vm = map_current_question(&s).unwrap();
        assert_eq!(vm.number, 1);
        assert_eq!(vm.options[0].class, "option option--selected");
        assert!(vm.options.iter().all(|o| !o.disabled));
    }

    #[test]
    fn review_options_are_inert_and_colored() {
        let mut s = session(vec!["A".into(), "B".into(), "C".into()]);
        s.answer(QuestionId::new("q1").unwrap(), "A").unwrap();
        s.expire_or_submit();
        let vm = map_current_question(&s).unwrap();
        let classes: Vec<_> = vm.options.iter().map(|o| o.class).collect();
        assert_eq!(
            classes,
            vec![
                "option option--incorrect",
                "option option--correct",
                "option option--neutral",
            ]
        );
        assert!(vm.options.iter().all(|o| o.disabled));
    }

    #[test]
    fn empty_option_list_renders_nothing() {
        let vm = map_current_question(&session(Vec::new())).unwrap();
        assert!(vm.options.is_empty());
        let empty = QuizSession::new(QuizId::new("quiz").unwrap(), Vec::new(), 30, fixed_now());
        assert!(map_current_question(&empty).is_none());
    }
}

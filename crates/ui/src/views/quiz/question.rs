use dioxus::prelude::*;
use quiz_core::model::QuestionId;

use crate::vm::{OptionVm, QuestionVm, QuizIntent};

/// Renders one question. Inert options (review mode) ignore clicks.
#[component]
pub fn QuestionCard(question: Option<QuestionVm>, on_intent: EventHandler<QuizIntent>) -> Element {
    let Some(question) = question else {
        return rsx! {};
    };

    rsx! {
        article { class: "question",
            p { class: "question-count", "Question {question.number} of {question.total}" }
            h3 { "{question.text}" }
            ul { class: "options",
                for option in question.options.clone() {
                    OptionButton {
                        key: "{option.label}",
                        question_id: question.id.clone(),
                        option,
                        on_intent,
                    }
                }
            }
        }
    }
}

#[component]
fn OptionButton(question_id: QuestionId, option: OptionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let label = option.label.clone();
    let disabled = option.disabled;
    rsx! {
        li {
            button {
                class: option.class,
                disabled,
                onclick: move |_| {
                    if disabled {
                        return;
                    }
                    on_intent.call(QuizIntent::Answer {
                        question_id: question_id.clone(),
                        option: label.clone(),
                    });
                },
                "{option.label}"
            }
        }
    }
}

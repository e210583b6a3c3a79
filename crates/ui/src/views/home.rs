use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, use_identity, view_state_from_resource};
use crate::vm::{QuizCardVm, map_quiz_cards};

const CATALOG_LIMIT: u32 = 50;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_flow = ctx.quiz_flow();
    let identity = use_identity();

    let resource = use_resource(move || {
        let quiz_flow = quiz_flow.clone();
        async move {
            let quizzes = quiz_flow
                .catalog(CATALOG_LIMIT)
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(map_quiz_cards(&quizzes))
        }
    });
    let state = view_state_from_resource(&resource);
    let signed_in = identity.read().is_some();

    rsx! {
        div { class: "page landing",
            section { class: "hero",
                h2 { "Practice with timed quizzes" }
                p { "Pick a quiz, beat the clock, then review every answer." }
                if !signed_in {
                    Link { class: "primary", to: Route::SignUp {}, "Sign up to get started" }
                }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(cards) => rsx! {
                    if cards.is_empty() {
                        p { "No quizzes published yet." }
                    } else {
                        ul { class: "quiz-cards",
                            for card in cards {
                                QuizCard { key: "{card.id}", card }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn QuizCard(card: QuizCardVm) -> Element {
    rsx! {
        li { class: "quiz-card",
            h3 { "{card.title}" }
            if let Some(description) = card.description.as_ref() {
                p { class: "quiz-description", "{description}" }
            }
            p { class: "quiz-meta",
                span { "{card.question_count} questions" }
                span { " · {card.duration_label}" }
                span { class: "quiz-price", " · {card.price_label}" }
            }
            div { class: "quiz-actions",
                Link { to: Route::Quiz { quiz_id: card.id.clone() }, "Start" }
                if !card.is_free {
                    Link { to: Route::Checkout { quiz_id: card.id.clone() }, "Buy" }
                }
            }
        }
    }
}

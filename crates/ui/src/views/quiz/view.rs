use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use quiz_core::model::{QuizId, Viewer};

use super::{NavigationPanel, QuestionCard, QuizTimer};
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, use_identity, view_state_from_resource};
use crate::vm::{QuizIntent, QuizVm, ScoreVm, start_quiz};

#[component]
pub fn QuizView(quiz_id: ReadSignal<String>) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let identity = use_identity();
    let quiz_flow = ctx.quiz_flow();
    let role_gate = ctx.role_gate();

    let vm = use_signal(|| None::<QuizVm>);
    let viewer = use_signal(|| None::<Viewer>);
    let submit_error = use_signal(|| None::<ViewError>);

    use_effect(move || {
        if identity.read().is_none() {
            navigator.replace(Route::SignUp {});
        }
    });

    let quiz_flow_for_resource = quiz_flow.clone();
    let resource = use_resource(move || {
        let quiz_flow = quiz_flow_for_resource.clone();
        let role_gate = role_gate.clone();
        let parsed = QuizId::new(quiz_id());
        let current = identity();
        let mut vm = vm;
        let mut viewer = viewer;
        async move {
            let quiz_id = parsed.map_err(|_| ViewError::NotFound)?;
            let current = current.ok_or(ViewError::SignedOut)?;
            let role = role_gate.resolve_role(current.user_id()).await;
            let who = Viewer::new(current, role);
            let started = start_quiz(&quiz_flow, &quiz_id, &who).await?;
            vm.set(Some(started));
            viewer.set(Some(who));
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(&resource);

    let on_intent = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        if let Some(quiz) = vm.write().as_mut() {
            quiz.apply(intent);
        }
    });

    let on_submit = use_callback(move |()| {
        let quiz_flow = quiz_flow.clone();
        spawn(async move {
            let mut vm = vm;
            let mut submit_error = submit_error;
            let Some(who) = viewer() else {
                return;
            };
            let taken = vm.write().take();
            let Some(mut quiz) = taken else {
                return;
            };
            let result = quiz.submit(&quiz_flow, &who).await;

            // Always put the session back so review stays available after errors.
            vm.set(Some(quiz));
            submit_error.set(result.err());
        });
    });

    rsx! {
        div { class: "page quiz",
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(()) => rsx! {
                    QuizBody { vm, on_intent, on_submit }
                },
                ViewState::Error(ViewError::NotPurchased) => rsx! {
                    p { "{ViewError::NotPurchased.message()}" }
                    Link { class: "primary", to: Route::Checkout { quiz_id: quiz_id() }, "Buy this quiz" }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    Link { to: Route::Home {}, "Back to quizzes" }
                },
            }
            if let Some(err) = submit_error() {
                p { class: "error", "{err.message()}" }
            }
        }
    }
}

#[component]
fn QuizBody(
    vm: Signal<Option<QuizVm>>,
    on_intent: EventHandler<QuizIntent>,
    on_submit: EventHandler<()>,
) -> Element {
    let snapshot = vm.read().as_ref().map(|quiz| {
        (
            quiz.title().to_string(),
            quiz.is_review(),
            quiz.question(),
            quiz.navigation(),
            quiz.score(),
        )
    });
    let Some((title, review, question, navigation, score)) = snapshot else {
        return rsx! {
            p { "Saving..." }
        };
    };

    rsx! {
        header { class: "quiz-header",
            h2 { "{title}" }
            if review {
                span { class: "timer timer--done", "Review" }
            } else {
                QuizTimer { vm, on_expired: on_submit }
            }
        }
        div { class: "quiz-layout",
            QuestionCard { question, on_intent }
            NavigationPanel {
                navigation,
                on_navigate: move |index| on_intent.call(QuizIntent::Navigate(index)),
            }
        }
        if review {
            ScoreSummary { score }
        } else {
            button { class: "primary", onclick: move |_| on_submit.call(()), "Submit" }
        }
    }
}

#[component]
fn ScoreSummary(score: ScoreVm) -> Element {
    rsx! {
        section { class: "score",
            h3 { "You scored {score.correct} of {score.total}" }
            p { "{score.answered} answered" }
            if score.saved {
                p { class: "muted", "Result saved to your profile." }
            }
            Link { to: Route::Dashboard {}, "Go to dashboard" }
        }
    }
}

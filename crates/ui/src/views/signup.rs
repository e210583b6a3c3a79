use dioxus::prelude::*;
use dioxus_router::use_navigator;
use quiz_core::model::{Identity, UserId};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, use_identity};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SignUpState {
    Idle,
    Saving,
    InvalidUserId,
    Error(ViewError),
}

/// Entry point for unauthenticated users. The auth provider is external, so
/// this only records the identity it issued and creates the profile document.
#[component]
pub fn SignUpView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let identity = use_identity();
    let hub = ctx.identity();
    let dashboard = ctx.dashboard();

    let mut user_id = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut display_name = use_signal(String::new);
    let mut state = use_signal(|| SignUpState::Idle);

    let on_submit = {
        let hub = hub.clone();
        use_callback(move |()| {
            let Ok(parsed) = UserId::new(user_id().trim()) else {
                state.set(SignUpState::InvalidUserId);
                return;
            };
            let email = email().trim().to_string();
            let new_identity = Identity::new(parsed, (!email.is_empty()).then_some(email));
            let name = display_name();
            let hub = hub.clone();
            let dashboard = dashboard.clone();
            state.set(SignUpState::Saving);
            spawn(async move {
                let mut state = state;
                match dashboard.register(&new_identity, &name).await {
                    Ok(_) => {
                        hub.sign_in(new_identity);
                        state.set(SignUpState::Idle);
                        navigator.push(Route::Dashboard {});
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "sign-up failed");
                        state.set(SignUpState::Error(ViewError::Unknown));
                    }
                }
            });
        })
    };

    let on_sign_out = use_callback(move |()| hub.sign_out());

    if let Some(current) = identity() {
        return rsx! {
            div { class: "page signup",
                h2 { "Account" }
                p { "Signed in as {current.user_id()}" }
                if let Some(address) = current.email() {
                    p { class: "muted", "{address}" }
                }
                button { class: "secondary", onclick: move |_| on_sign_out.call(()), "Sign out" }
            }
        };
    }

    let saving = state() == SignUpState::Saving;

    rsx! {
        div { class: "page signup",
            h2 { "Sign up" }
            form {
                onsubmit: move |evt| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                label { "User id"
                    input {
                        value: "{user_id}",
                        oninput: move |evt| user_id.set(evt.value()),
                    }
                }
                label { "Email"
                    input {
                        r#type: "email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                label { "Display name"
                    input {
                        value: "{display_name}",
                        oninput: move |evt| display_name.set(evt.value()),
                    }
                }
                button { class: "primary", r#type: "submit", disabled: saving, "Create account" }
            }
            match state() {
                SignUpState::InvalidUserId => rsx! {
                    p { class: "error", "User id cannot be blank." }
                },
                SignUpState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
                SignUpState::Idle | SignUpState::Saving => rsx! {},
            }
        }
    }
}

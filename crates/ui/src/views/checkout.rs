use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use quiz_core::model::{PaymentConfirmation, QuizId};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, use_identity, view_state_from_resource};
use crate::vm::{CheckoutVm, map_checkout_error};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ConfirmState {
    Idle,
    Confirming,
    Error(ViewError),
}

/// Order summary plus the values the external checkout widget returns.
#[component]
pub fn CheckoutView(quiz_id: ReadSignal<String>) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let identity = use_identity();
    let checkout = ctx.checkout();

    let mut payment_id = use_signal(String::new);
    let mut signature = use_signal(String::new);
    let confirm_state = use_signal(|| ConfirmState::Idle);

    use_effect(move || {
        if identity.read().is_none() {
            navigator.replace(Route::SignUp {});
        }
    });

    let checkout_for_resource = checkout.clone();
    let resource = use_resource(move || {
        let checkout = checkout_for_resource.clone();
        let parsed = QuizId::new(quiz_id());
        let current = identity();
        async move {
            let quiz_id = parsed.map_err(|_| ViewError::NotFound)?;
            let current = current.ok_or(ViewError::SignedOut)?;
            let order = checkout
                .create_order(&quiz_id, current.user_id())
                .await
                .map_err(|err| map_checkout_error(&err))?;
            Ok::<_, ViewError>(CheckoutVm::from(&order))
        }
    });
    let state = view_state_from_resource(&resource);

    let on_confirm = use_callback(move |order: CheckoutVm| {
        let checkout = checkout.clone();
        let Some(current) = identity() else {
            return;
        };
        let Ok(quiz_id) = QuizId::new(order.quiz_id.clone()) else {
            return;
        };
        let confirmation = PaymentConfirmation {
            razorpay_order_id: order.order_id,
            razorpay_payment_id: payment_id().trim().to_string(),
            razorpay_signature: signature().trim().to_string(),
        };
        let mut confirm_state = confirm_state;
        confirm_state.set(ConfirmState::Confirming);
        spawn(async move {
            let mut confirm_state = confirm_state;
            match checkout
                .confirm(&quiz_id, current.user_id(), confirmation)
                .await
            {
                Ok(_) => {
                    confirm_state.set(ConfirmState::Idle);
                    navigator.push(Route::Quiz {
                        quiz_id: quiz_id.to_string(),
                    });
                }
                Err(err) => confirm_state.set(ConfirmState::Error(map_checkout_error(&err))),
            }
        });
    });

    let confirming = confirm_state() == ConfirmState::Confirming;
    let can_confirm = !confirming && !payment_id.read().trim().is_empty() && !signature.read().trim().is_empty();

    rsx! {
        div { class: "page checkout",
            h2 { "Checkout" }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Creating order..." }
                },
                ViewState::Ready(order) => {
                    let submitted = order.clone();
                    rsx! {
                        dl { class: "order",
                            dt { "Quiz" }
                            dd { "{order.title}" }
                            dt { "Order" }
                            dd { "{order.order_id}" }
                            dt { "Amount" }
                            dd { "{order.amount_label}" }
                        }
                        form {
                            onsubmit: move |evt| {
                                evt.prevent_default();
                                on_confirm.call(submitted.clone());
                            },
                            label { "Payment id"
                                input {
                                    value: "{payment_id}",
                                    oninput: move |evt| payment_id.set(evt.value()),
                                }
                            }
                            label { "Signature"
                                input {
                                    value: "{signature}",
                                    oninput: move |evt| signature.set(evt.value()),
                                }
                            }
                            button { class: "primary", r#type: "submit", disabled: !can_confirm, "Confirm payment" }
                        }
                    }
                }
                ViewState::Error(ViewError::FreeQuiz) => rsx! {
                    p { "{ViewError::FreeQuiz.message()}" }
                    Link { class: "primary", to: Route::Quiz { quiz_id: quiz_id() }, "Start quiz" }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
            if let ConfirmState::Error(err) = confirm_state() {
                p { class: "error", "{err.message()}" }
            }
        }
    }
}

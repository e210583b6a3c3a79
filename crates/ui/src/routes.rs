use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{CheckoutView, DashboardView, HomeView, QuizView, SignUpView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/signup", SignUpView)] SignUp {},
        #[route("/dashboard", DashboardView)] Dashboard {},
        #[route("/quiz/:quiz_id", QuizView)] Quiz { quiz_id: String },
        #[route("/checkout/:quiz_id", CheckoutView)] Checkout { quiz_id: String },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Quiz Desk" }
            ul {
                li { Link { to: Route::Home {}, "Quizzes" } }
                li { Link { to: Route::Dashboard {}, "Dashboard" } }
                li { Link { to: Route::SignUp {}, "Account" } }
            }
        }
    }
}

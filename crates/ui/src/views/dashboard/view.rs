use dioxus::prelude::*;
use dioxus_router::use_navigator;
use quiz_core::model::{DashboardTab, Identity, Role};
use services::{RoleResolution, TabRouter};

use super::tabs::{
    OptedQuizzesTab, ProfileTab, QuestionsTab, QuizListTab, TransactionsTab, UsersTab, VideoPanel,
};
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, use_identity};
use crate::vm::{TabVm, map_tabs};

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let identity = use_identity();
    let role_gate = ctx.role_gate();

    let mut resolution = use_signal(RoleResolution::new);
    let mut router = use_signal(|| TabRouter::new(Role::Regular));

    // One role lookup per identity; a lookup finishing after the identity
    // changed is dropped by the ticket check.
    use_effect(move || {
        let current = identity();
        let ticket = resolution
            .write()
            .begin(current.as_ref().map(Identity::user_id));
        let pending_role = resolution.peek().effective_role();
        router.write().set_role(pending_role);

        if current.is_none() {
            navigator.replace(Route::SignUp {});
            return;
        }
        let Some(ticket) = ticket else {
            return;
        };
        let role_gate = role_gate.clone();
        spawn(async move {
            let role = role_gate.resolve_role(ticket.user_id()).await;
            let mut resolution = resolution;
            let mut router = router;
            if resolution.write().apply(&ticket, role) {
                router.write().set_role(role);
            }
        });
    });

    let on_select = use_callback(move |tab: DashboardTab| {
        router.write().set_active_tab(tab);
    });

    let Some(current) = identity() else {
        return rsx! {
            div { class: "page",
                p { "{ViewError::SignedOut.message()}" }
            }
        };
    };

    let tabs = map_tabs(&router.read());
    let active = router.read().active();
    let resolving = !resolution.read().is_resolved();
    let user_id = current.user_id().clone();

    rsx! {
        div { class: "page dashboard",
            h2 { "Dashboard" }
            if resolving {
                p { class: "muted", "Checking permissions..." }
            }
            nav { class: "tabs",
                for tab in tabs {
                    TabButton { key: "{tab.tab}", tab, on_select }
                }
            }
            section { class: "tab-panel",
                match active {
                    DashboardTab::Profile => rsx! { ProfileTab { user_id } },
                    DashboardTab::Transactions => rsx! { TransactionsTab {} },
                    DashboardTab::QuizList => rsx! { QuizListTab {} },
                    DashboardTab::Users => rsx! { UsersTab {} },
                    DashboardTab::Questions => rsx! { QuestionsTab {} },
                    DashboardTab::AdminQuizVideos => rsx! {
                        VideoPanel { title: "Quiz videos", body: "Videos attached to quizzes are served by the media store." }
                    },
                    DashboardTab::OptedQuizzes => rsx! { OptedQuizzesTab { user_id } },
                    DashboardTab::VideoUpload => rsx! {
                        VideoPanel { title: "Upload video", body: "Uploads go straight to the media store and are not handled here." }
                    },
                }
            }
        }
    }
}

#[component]
fn TabButton(tab: TabVm, on_select: EventHandler<DashboardTab>) -> Element {
    let id = tab.tab;
    rsx! {
        button {
            class: tab.class,
            onclick: move |_| on_select.call(id),
            "{tab.label}"
        }
    }
}

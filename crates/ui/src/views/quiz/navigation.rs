use dioxus::prelude::*;

use crate::vm::{NavEntryVm, NavigationVm};

#[component]
pub fn NavigationPanel(navigation: NavigationVm, on_navigate: EventHandler<usize>) -> Element {
    rsx! {
        aside { class: "quiz-nav",
            div { class: "progress",
                div { class: "progress-fill", style: "width: {navigation.progress_width}" }
            }
            p { class: "progress-label", "{navigation.answered} of {navigation.total} answered" }
            div { class: "nav-grid",
                for entry in navigation.entries.clone() {
                    NavButton { key: "{entry.index}", entry, on_navigate }
                }
            }
        }
    }
}

#[component]
fn NavButton(entry: NavEntryVm, on_navigate: EventHandler<usize>) -> Element {
    let index = entry.index;
    rsx! {
        button {
            class: entry.class,
            onclick: move |_| on_navigate.call(index),
            "{entry.label}"
        }
    }
}

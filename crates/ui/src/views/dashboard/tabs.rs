use dioxus::prelude::*;
use dioxus_router::Link;
use quiz_core::model::UserId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    OptedQuizRowVm, ProfileVm, QuestionRowVm, QuizRowVm, ResultRowVm, TransactionRowVm,
    map_profile, map_question_rows, map_rows,
};

const LIST_LIMIT: u32 = 100;
const RECENT_RESULTS: u32 = 10;

#[derive(Clone, Debug, PartialEq)]
struct ProfileData {
    profile: Option<ProfileVm>,
    results: Vec<ResultRowVm>,
}

#[component]
pub fn ProfileTab(user_id: ReadSignal<UserId>) -> Element {
    let ctx = use_context::<AppContext>();
    let dashboard = ctx.dashboard();

    let resource = use_resource(move || {
        let dashboard = dashboard.clone();
        let user_id = user_id();
        async move {
            let profile = dashboard
                .profile(&user_id)
                .await
                .map_err(|_| ViewError::Unknown)?;
            let results = dashboard
                .results(&user_id, RECENT_RESULTS)
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(ProfileData {
                profile: profile.as_ref().map(map_profile),
                results: map_rows(&results),
            })
        }
    });
    let state = view_state_from_resource(&resource);

    match state {
        ViewState::Idle | ViewState::Loading => rsx! {
            p { "Loading..." }
        },
        ViewState::Ready(data) => rsx! {
            if let Some(profile) = data.profile {
                dl { class: "profile",
                    dt { "Name" }
                    dd { "{profile.display_name}" }
                    dt { "Email" }
                    dd { "{profile.email}" }
                    dt { "Role" }
                    dd { "{profile.role_label}" }
                }
            } else {
                p { "No profile yet." }
            }
            h3 { "Recent results" }
            if data.results.is_empty() {
                p { "No quizzes taken yet." }
            } else {
                table {
                    thead { tr { th { "Quiz" } th { "Score" } th { "Date" } } }
                    tbody {
                        for row in data.results {
                            tr {
                                td { "{row.quiz_id}" }
                                td { "{row.score}" }
                                td { "{row.date}" }
                            }
                        }
                    }
                }
            }
        },
        ViewState::Error(err) => rsx! {
            p { "{err.message()}" }
        },
    }
}

#[component]
pub fn TransactionsTab() -> Element {
    let ctx = use_context::<AppContext>();
    let dashboard = ctx.dashboard();

    let resource = use_resource(move || {
        let dashboard = dashboard.clone();
        async move {
            let purchases = dashboard
                .transactions(LIST_LIMIT)
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(map_rows::<_, TransactionRowVm>(&purchases))
        }
    });

    match view_state_from_resource(&resource) {
        ViewState::Idle | ViewState::Loading => rsx! {
            p { "Loading..." }
        },
        ViewState::Ready(rows) => rsx! {
            if rows.is_empty() {
                p { "No transactions yet." }
            } else {
                table {
                    thead { tr { th { "Order" } th { "User" } th { "Quiz" } th { "Amount" } th { "Date" } } }
                    tbody {
                        for row in rows {
                            tr { key: "{row.order_id}",
                                td { "{row.order_id}" }
                                td { "{row.user_id}" }
                                td { "{row.quiz_id}" }
                                td { "{row.amount}" }
                                td { "{row.date}" }
                            }
                        }
                    }
                }
            }
        },
        ViewState::Error(err) => rsx! {
            p { "{err.message()}" }
        },
    }
}

#[component]
pub fn QuizListTab() -> Element {
    let ctx = use_context::<AppContext>();
    let dashboard = ctx.dashboard();

    let resource = use_resource(move || {
        let dashboard = dashboard.clone();
        async move {
            let quizzes = dashboard
                .quizzes(LIST_LIMIT)
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(map_rows::<_, QuizRowVm>(&quizzes))
        }
    });

    match view_state_from_resource(&resource) {
        ViewState::Idle | ViewState::Loading => rsx! {
            p { "Loading..." }
        },
        ViewState::Ready(rows) => rsx! {
            if rows.is_empty() {
                p { "No quizzes yet." }
            } else {
                table {
                    thead { tr { th { "Title" } th { "Questions" } th { "Duration" } th { "Price" } } }
                    tbody {
                        for row in rows {
                            tr { key: "{row.id}",
                                td { Link { to: Route::Quiz { quiz_id: row.id.clone() }, "{row.title}" } }
                                td { "{row.question_count}" }
                                td { "{row.duration}" }
                                td { "{row.price}" }
                            }
                        }
                    }
                }
            }
        },
        ViewState::Error(err) => rsx! {
            p { "{err.message()}" }
        },
    }
}

#[component]
pub fn UsersTab() -> Element {
    let ctx = use_context::<AppContext>();
    let dashboard = ctx.dashboard();

    let resource = use_resource(move || {
        let dashboard = dashboard.clone();
        async move {
            let profiles = dashboard
                .users(LIST_LIMIT)
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(
                profiles
                    .iter()
                    .map(|profile| (profile.user_id.to_string(), map_profile(profile)))
                    .collect::<Vec<_>>(),
            )
        }
    });

    match view_state_from_resource(&resource) {
        ViewState::Idle | ViewState::Loading => rsx! {
            p { "Loading..." }
        },
        ViewState::Ready(rows) => rsx! {
            table {
                thead { tr { th { "User" } th { "Name" } th { "Email" } th { "Role" } } }
                tbody {
                    for (id, profile) in rows {
                        tr { key: "{id}",
                            td { "{id}" }
                            td { "{profile.display_name}" }
                            td { "{profile.email}" }
                            td { "{profile.role_label}" }
                        }
                    }
                }
            }
        },
        ViewState::Error(err) => rsx! {
            p { "{err.message()}" }
        },
    }
}

#[component]
pub fn QuestionsTab() -> Element {
    let ctx = use_context::<AppContext>();
    let dashboard = ctx.dashboard();

    let resource = use_resource(move || {
        let dashboard = dashboard.clone();
        async move {
            let quizzes = dashboard
                .quizzes(LIST_LIMIT)
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(map_question_rows(&quizzes))
        }
    });

    match view_state_from_resource(&resource) {
        ViewState::Idle | ViewState::Loading => rsx! {
            p { "Loading..." }
        },
        ViewState::Ready(rows) => rsx! {
            QuestionTable { rows }
        },
        ViewState::Error(err) => rsx! {
            p { "{err.message()}" }
        },
    }
}

#[component]
fn QuestionTable(rows: Vec<QuestionRowVm>) -> Element {
    rsx! {
        table {
            thead { tr { th { "Quiz" } th { "Question" } th { "Options" } th { "Answer" } } }
            tbody {
                for row in rows {
                    tr {
                        td { "{row.quiz_title}" }
                        td { "{row.text}" }
                        td { "{row.options}" }
                        td { "{row.correct_answer}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn OptedQuizzesTab(user_id: ReadSignal<UserId>) -> Element {
    let ctx = use_context::<AppContext>();
    let dashboard = ctx.dashboard();

    let resource = use_resource(move || {
        let dashboard = dashboard.clone();
        let user_id = user_id();
        async move {
            let items = dashboard
                .opted_quizzes(&user_id)
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(map_rows::<_, OptedQuizRowVm>(&items))
        }
    });

    match view_state_from_resource(&resource) {
        ViewState::Idle | ViewState::Loading => rsx! {
            p { "Loading..." }
        },
        ViewState::Ready(rows) => rsx! {
            if rows.is_empty() {
                p { "You have not bought any quizzes yet." }
                Link { to: Route::Home {}, "Browse quizzes" }
            } else {
                ul { class: "opted",
                    for row in rows {
                        li {
                            Link { to: Route::Quiz { quiz_id: row.quiz_id.clone() }, "{row.title}" }
                            span { class: "muted", " {row.amount} · {row.date}" }
                        }
                    }
                }
            }
        },
        ViewState::Error(err) => rsx! {
            p { "{err.message()}" }
        },
    }
}

#[component]
pub fn VideoPanel(title: &'static str, body: &'static str) -> Element {
    rsx! {
        div { class: "video-panel",
            h3 { "{title}" }
            p { "{body}" }
        }
    }
}

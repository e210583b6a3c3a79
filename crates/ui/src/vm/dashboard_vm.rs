use quiz_core::model::{DashboardTab, Purchase, Quiz, QuizResult, UserProfile};
use services::{OptedQuizItem, TabRouter};

use crate::vm::price_fmt::format_price;
use crate::vm::time_fmt::{format_datetime, format_duration};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabVm {
    pub tab: DashboardTab,
    pub label: &'static str,
    pub class: &'static str,
}

#[must_use]
pub fn map_tabs(router: &TabRouter) -> Vec<TabVm> {
    router
        .tabs()
        .iter()
        .map(|tab| TabVm {
            tab: *tab,
            label: tab.label(),
            class: if *tab == router.active() {
                "tab tab--active"
            } else {
                "tab"
            },
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileVm {
    pub display_name: String,
    pub email: String,
    pub role_label: &'static str,
}

#[must_use]
pub fn map_profile(profile: &UserProfile) -> ProfileVm {
    ProfileVm {
        display_name: if profile.display_name.is_empty() {
            profile.user_id.to_string()
        } else {
            profile.display_name.clone()
        },
        email: profile.email.clone().unwrap_or_else(|| "-".to_string()),
        role_label: if profile.resolved_role().is_admin() {
            "Administrator"
        } else {
            "Member"
        },
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionRowVm {
    pub order_id: String,
    pub user_id: String,
    pub quiz_id: String,
    pub amount: String,
    pub date: String,
}

impl From<&Purchase> for TransactionRowVm {
    fn from(purchase: &Purchase) -> Self {
        Self {
            order_id: purchase.order_id.clone(),
            user_id: purchase.user_id.to_string(),
            quiz_id: purchase.quiz_id.to_string(),
            amount: format_price(purchase.amount, "INR"),
            date: format_datetime(purchase.purchased_at),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptedQuizRowVm {
    pub quiz_id: String,
    pub title: String,
    pub amount: String,
    pub date: String,
}

impl From<&OptedQuizItem> for OptedQuizRowVm {
    fn from(item: &OptedQuizItem) -> Self {
        Self {
            quiz_id: item.quiz_id.to_string(),
            title: item.title.clone(),
            amount: format_price(item.amount, "INR"),
            date: format_datetime(item.purchased_at),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizRowVm {
    pub id: String,
    pub title: String,
    pub price: String,
    pub duration: String,
    pub question_count: usize,
}

impl From<&Quiz> for QuizRowVm {
    fn from(quiz: &Quiz) -> Self {
        Self {
            id: quiz.id().to_string(),
            title: quiz.title().to_string(),
            price: format_price(u64::from(quiz.price()), "INR"),
            duration: format_duration(quiz.duration_secs()),
            question_count: quiz.questions().len(),
        }
    }
}

/// One question of the admin question bank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionRowVm {
    pub quiz_title: String,
    pub text: String,
    pub options: String,
    pub correct_answer: String,
}

#[must_use]
pub fn map_question_rows(quizzes: &[Quiz]) -> Vec<QuestionRowVm> {
    quizzes
        .iter()
        .flat_map(|quiz| {
            quiz.questions().iter().map(|question| QuestionRowVm {
                quiz_title: quiz.title().to_string(),
                text: question.text().to_string(),
                options: question.options().join(" / "),
                correct_answer: question.correct_answer().to_string(),
            })
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRowVm {
    pub quiz_id: String,
    pub score: String,
    pub date: String,
}

impl From<&QuizResult> for ResultRowVm {
    fn from(result: &QuizResult) -> Self {
        Self {
            quiz_id: result.quiz_id().to_string(),
            score: format!("{} / {}", result.correct(), result.total()),
            date: format_datetime(result.completed_at()),
        }
    }
}

#[must_use]
pub fn map_rows<'a, T, R>(items: &'a [T]) -> Vec<R>
where
    R: From<&'a T>,
{
    items.iter().map(R::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{Role, UserId};

    #[test]
    fn tabs_mark_the_active_entry() {
        let mut router = TabRouter::new(Role::Regular);
        router.set_active_tab(DashboardTab::OptedQuizzes);
        let tabs = map_tabs(&router);
        let labels: Vec<_> = tabs.iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["Profile", "My Quizzes", "Upload Video"]);
        assert_eq!(tabs[1].class, "tab tab--active");
        assert_eq!(tabs[0].class, "tab");
    }

    #[test]
    fn profile_falls_back_to_user_id() {
        let profile = UserProfile::new(UserId::new("u-9").unwrap(), "");
        let vm = map_profile(&profile);
        assert_eq!(vm.display_name, "u-9");
        assert_eq!(vm.email, "-");
        assert_eq!(vm.role_label, "Member");
        assert_eq!(format_duration(60), "1 min");
    }
}

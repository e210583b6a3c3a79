use quiz_core::model::Quiz;

use crate::vm::price_fmt::format_price;
use crate::vm::time_fmt::format_duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizCardVm {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub price_label: String,
    pub duration_label: String,
    pub question_count: usize,
    pub is_free: bool,
}

impl From<&Quiz> for QuizCardVm {
    fn from(quiz: &Quiz) -> Self {
        Self {
            id: quiz.id().to_string(),
            title: quiz.title().to_string(),
            description: quiz.description().map(str::to_string),
            price_label: format_price(u64::from(quiz.price()), "INR"),
            duration_label: format_duration(quiz.duration_secs()),
            question_count: quiz.questions().len(),
            is_free: quiz.is_free(),
        }
    }
}

#[must_use]
pub fn map_quiz_cards(quizzes: &[Quiz]) -> Vec<QuizCardVm> {
    quizzes.iter().map(QuizCardVm::from).collect()
}

use services::{CheckoutError, CheckoutOrder};

use crate::views::ViewError;

use crate::vm::price_fmt::format_price;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckoutVm {
    pub quiz_id: String,
    pub title: String,
    pub order_id: String,
    pub amount_label: String,
}

impl From<&CheckoutOrder> for CheckoutVm {
    fn from(checkout: &CheckoutOrder) -> Self {
        Self {
            quiz_id: checkout.quiz.id().to_string(),
            title: checkout.quiz.title().to_string(),
            order_id: checkout.order.id.clone(),
            amount_label: format_price(checkout.order.amount, &checkout.order.currency),
        }
    }
}

#[must_use]
pub fn map_checkout_error(err: &CheckoutError) -> ViewError {
    match err {
        CheckoutError::QuizNotFound(_) => ViewError::NotFound,
        CheckoutError::FreeQuiz(_) => ViewError::FreeQuiz,
        CheckoutError::Rejected(_) => ViewError::PaymentRejected,
        CheckoutError::Payment(_) => ViewError::PaymentFailed,
        _ => ViewError::Unknown,
    }
}

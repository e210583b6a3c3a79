use std::sync::Arc;

use quiz_core::model::{
    CreateOrderRequest, OrderPayload, PaymentConfirmation, Purchase, Quiz, QuizId, UserId,
    VerifyPaymentRequest,
};
use storage::repository::{PurchaseRepository, QuizRepository};

use crate::Clock;
use crate::error::CheckoutError;
use crate::payments::PaymentsApi;

/// Order handed to the checkout widget, with the quiz it pays for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutOrder {
    pub quiz: Quiz,
    pub order: OrderPayload,
}

/// Paid-quiz purchase flow: create an order, then verify and record the payment.
#[derive(Clone)]
pub struct CheckoutService {
    clock: Clock,
    payments: Arc<dyn PaymentsApi>,
    quizzes: Arc<dyn QuizRepository>,
    purchases: Arc<dyn PurchaseRepository>,
}

impl CheckoutService {
    #[must_use]
    pub fn new(
        clock: Clock,
        payments: Arc<dyn PaymentsApi>,
        quizzes: Arc<dyn QuizRepository>,
        purchases: Arc<dyn PurchaseRepository>,
    ) -> Self {
        Self {
            clock,
            payments,
            quizzes,
            purchases,
        }
    }

    async fn paid_quiz(&self, quiz_id: &QuizId) -> Result<Quiz, CheckoutError> {
        let quiz = self
            .quizzes
            .get_quiz(quiz_id)
            .await?
            .ok_or_else(|| CheckoutError::QuizNotFound(quiz_id.clone()))?;
        if quiz.is_free() {
            return Err(CheckoutError::FreeQuiz(quiz_id.clone()));
        }
        Ok(quiz)
    }

    /// Creates a payment order for `quiz_id` at the quiz's price.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError` if the quiz is missing or free, or the
    /// payments API call fails.
    pub async fn create_order(
        &self,
        quiz_id: &QuizId,
        user_id: &UserId,
    ) -> Result<CheckoutOrder, CheckoutError> {
        let quiz = self.paid_quiz(quiz_id).await?;
        let request = CreateOrderRequest {
            quiz_id: quiz_id.clone(),
            user_id: user_id.clone(),
            amount: quiz.price(),
        };
        let order = self.payments.create_order(&request).await?;
        tracing::info!(%quiz_id, %user_id, order_id = %order.id, "payment order created");
        Ok(CheckoutOrder { quiz, order })
    }

    /// Verifies a completed payment and records the purchase.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::Rejected` if the payments API does not confirm
    /// the payment, or another `CheckoutError` if a call fails.
    pub async fn confirm(
        &self,
        quiz_id: &QuizId,
        user_id: &UserId,
        confirmation: PaymentConfirmation,
    ) -> Result<Purchase, CheckoutError> {
        let quiz = self.paid_quiz(quiz_id).await?;
        let request =
            VerifyPaymentRequest::from_confirmation(confirmation, quiz_id.clone(), user_id.clone());
        let verification = self.payments.verify_payment(&request).await?;
        if !verification.success {
            let message = verification
                .message
                .unwrap_or_else(|| "verification failed".to_string());
            tracing::warn!(%quiz_id, %user_id, %message, "payment rejected");
            return Err(CheckoutError::Rejected(message));
        }

        let purchase = Purchase {
            order_id: request.razorpay_order_id,
            payment_id: request.razorpay_payment_id,
            quiz_id: quiz_id.clone(),
            user_id: user_id.clone(),
            amount: u64::from(quiz.price()),
            purchased_at: self.clock.now(),
        };
        self.purchases.record_purchase(&purchase).await?;
        tracing::info!(%quiz_id, %user_id, order_id = %purchase.order_id, "purchase recorded");
        Ok(purchase)
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::{QuizId, UserId};

/// Body of `POST /create-order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub quiz_id: QuizId,
    pub user_id: UserId,
    /// Minor currency units.
    pub amount: u32,
}

/// Order returned by the payments API, handed to the checkout widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPayload {
    pub id: String,
    pub amount: u64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub receipt: Option<String>,
}

fn default_currency() -> String {
    "INR".to_string()
}

/// Values the checkout widget hands back once the user has paid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaymentConfirmation {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
}

/// Body of `POST /verify-payment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyPaymentRequest {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
    #[serde(rename = "quizId")]
    pub quiz_id: QuizId,
    #[serde(rename = "userId")]
    pub user_id: UserId,
}

impl VerifyPaymentRequest {
    #[must_use]
    pub fn from_confirmation(confirmation: PaymentConfirmation, quiz_id: QuizId, user_id: UserId) -> Self {
        Self {
            razorpay_order_id: confirmation.razorpay_order_id,
            razorpay_payment_id: confirmation.razorpay_payment_id,
            razorpay_signature: confirmation.razorpay_signature,
            quiz_id,
            user_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VerificationResult {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// A verified payment granting access to a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub order_id: String,
    pub payment_id: String,
    pub quiz_id: QuizId,
    pub user_id: UserId,
    pub amount: u64,
    pub purchased_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_order_uses_camel_case_keys() {
        let body = CreateOrderRequest {
            quiz_id: QuizId::new("rust-101").unwrap(),
            user_id: UserId::new("u1").unwrap(),
            amount: 4900,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"quizId": "rust-101", "userId": "u1", "amount": 4900})
        );
    }

    #[test]
    fn verify_payment_mixes_gateway_and_app_keys() {
        let confirmation = PaymentConfirmation {
            razorpay_order_id: "order_1".into(),
            razorpay_payment_id: "pay_1".into(),
            razorpay_signature: "sig".into(),
        };
        let body = VerifyPaymentRequest::from_confirmation(
            confirmation,
            QuizId::new("rust-101").unwrap(),
            UserId::new("u1").unwrap(),
        );
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["razorpay_order_id"], "order_1");
        assert_eq!(json["razorpay_payment_id"], "pay_1");
        assert_eq!(json["razorpay_signature"], "sig");
        assert_eq!(json["quizId"], "rust-101");
        assert_eq!(json["userId"], "u1");
    }

    #[test]
    fn order_payload_defaults_currency() {
        let order: OrderPayload = serde_json::from_str(r#"{"id":"order_1","amount":4900}"#).unwrap();
        assert_eq!(order.currency, "INR");
        assert_eq!(order.receipt, None);
    }
}

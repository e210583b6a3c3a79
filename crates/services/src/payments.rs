use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use quiz_core::model::{CreateOrderRequest, OrderPayload, VerificationResult, VerifyPaymentRequest};

use crate::auth::TokenProvider;
use crate::config::PaymentsConfig;
use crate::error::PaymentError;

/// Order creation and payment verification, as seen by checkout.
#[async_trait]
pub trait PaymentsApi: Send + Sync {
    /// # Errors
    ///
    /// Returns `PaymentError` if the call fails or the service rejects it.
    async fn create_order(&self, request: &CreateOrderRequest) -> Result<OrderPayload, PaymentError>;

    /// # Errors
    ///
    /// Returns `PaymentError` if the call fails or the service rejects it.
    async fn verify_payment(
        &self,
        request: &VerifyPaymentRequest,
    ) -> Result<VerificationResult, PaymentError>;
}

/// Thin HTTP client for the payments API. Every call carries the current
/// bearer token; failures are logged and returned unchanged.
#[derive(Clone)]
pub struct PaymentsClient {
    client: Client,
    config: PaymentsConfig,
    tokens: Arc<dyn TokenProvider>,
}

impl PaymentsClient {
    #[must_use]
    pub fn new(config: PaymentsConfig, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            client: Client::new(),
            config,
            tokens,
        }
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, PaymentError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        let result = self.send(&url, body).await;
        if let Err(err) = &result {
            tracing::error!(%url, error = %err, "payments request failed");
        }
        result
    }

    async fn send<B, R>(&self, url: &str, body: &B) -> Result<R, PaymentError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let token = self.tokens.bearer_token().await?;
        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PaymentError::HttpStatus { status, body });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl PaymentsApi for PaymentsClient {
    async fn create_order(&self, request: &CreateOrderRequest) -> Result<OrderPayload, PaymentError> {
        self.post("create-order", request).await
    }

    async fn verify_payment(
        &self,
        request: &VerifyPaymentRequest,
    ) -> Result<VerificationResult, PaymentError> {
        self.post("verify-payment", request).await
    }
}

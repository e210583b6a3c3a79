//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{QuizId, QuizResultError};
use storage::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors from the auth provider boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AuthError {
    #[error("no signed-in user")]
    SignedOut,
    #[error("auth provider error: {0}")]
    Provider(String),
}

/// Errors emitted by `PaymentsClient`. Returned to callers unchanged.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PaymentError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("payments request failed with status {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `CheckoutService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CheckoutError {
    #[error("quiz {0} not found")]
    QuizNotFound(QuizId),
    #[error("quiz {0} is free")]
    FreeQuiz(QuizId),
    #[error("payment was not verified: {0}")]
    Rejected(String),
    #[error(transparent)]
    Payment(#[from] PaymentError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `QuizFlowService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizFlowError {
    #[error("quiz {0} not found")]
    NotFound(QuizId),
    #[error("quiz {0} has not been purchased")]
    NotPurchased(QuizId),
    #[error(transparent)]
    Result(#[from] QuizResultError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `DashboardService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DashboardError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors while reading configuration from the environment.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid {var} value {raw:?}: {reason}")]
    Invalid {
        var: &'static str,
        raw: String,
        reason: String,
    },
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

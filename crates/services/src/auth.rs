use async_trait::async_trait;

use crate::error::AuthError;

/// Source of bearer tokens issued by the external auth provider.
///
/// Called once per outgoing request; implementations may refresh.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns `AuthError::SignedOut` when nobody is signed in.
    async fn bearer_token(&self) -> Result<String, AuthError>;
}

/// Token fixed at startup, e.g. from `QUIZ_AUTH_TOKEN`.
#[derive(Clone, Debug, Default)]
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    #[must_use]
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn bearer_token(&self) -> Result<String, AuthError> {
        self.token.clone().ok_or(AuthError::SignedOut)
    }
}

use std::env;

use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_PAYMENTS_URL: &str = "http://localhost:5000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaymentsConfig {
    pub base_url: Url,
}

impl PaymentsConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if `raw` is not an http(s) URL.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::Invalid {
            var: "QUIZ_PAYMENTS_URL",
            raw: raw.to_string(),
            reason,
        };
        let base_url = Url::parse(raw.trim()).map_err(|err| invalid(err.to_string()))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https".into()));
        }
        Ok(Self { base_url })
    }

    /// Full URL for an endpoint below the base, e.g. `create-order`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Runtime settings read from the environment (after `.env` is loaded).
#[derive(Clone, Debug)]
pub struct ServicesConfig {
    pub payments: PaymentsConfig,
    pub auth_token: Option<String>,
    pub shuffle_questions: bool,
}

impl ServicesConfig {
    /// Signed out, questions in document order.
    #[must_use]
    pub fn with_payments(payments: PaymentsConfig) -> Self {
        Self {
            payments,
            auth_token: None,
            shuffle_questions: false,
        }
    }

    /// Reads `QUIZ_PAYMENTS_URL`, `QUIZ_AUTH_TOKEN` and `QUIZ_SHUFFLE_QUESTIONS`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let payments_url =
            env::var("QUIZ_PAYMENTS_URL").unwrap_or_else(|_| DEFAULT_PAYMENTS_URL.into());
        let payments = PaymentsConfig::parse(&payments_url)?;
        let auth_token = env::var("QUIZ_AUTH_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());
        let shuffle_questions = match env::var("QUIZ_SHUFFLE_QUESTIONS") {
            Ok(raw) => parse_flag("QUIZ_SHUFFLE_QUESTIONS", &raw)?,
            Err(_) => false,
        };
        Ok(Self {
            payments,
            auth_token,
            shuffle_questions,
        })
    }
}

fn parse_flag(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            var,
            raw: raw.to_string(),
            reason: "expected a boolean".into(),
        }),
    }
}

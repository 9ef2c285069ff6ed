//! Client configuration for the oracle endpoint.

use crate::retry::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Gemini API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-09-2025";

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "PLATONIC_API_KEY";

/// Configuration for [`OracleClient`](crate::OracleClient).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleConfig {
    /// API key for authentication. Absence is reported at submission time.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL for the API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model name/identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// Timeout for a single attempt.
    #[serde(default = "default_timeout")]
    pub timeout: Duration,

    /// Retry policy applied to every flow.
    #[serde(default)]
    pub retry: RetryPolicy,
}

impl OracleConfig {
    /// Create a configuration with the default endpoint and model.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: default_base_url(),
            model: default_model(),
            timeout: default_timeout(),
            retry: RetryPolicy::default(),
        }
    }

    /// Create configuration reading the key from [`API_KEY_ENV`].
    pub fn from_env() -> Self {
        Self::new(std::env::var(API_KEY_ENV).ok())
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the per-attempt timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry policy.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// The credential, if one is set and not blank.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Full generateContent URL, without the key.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = OracleConfig::new(Some("test-key".to_string()))
            .with_base_url("http://localhost:8080/")
            .with_model("gemini-pro")
            .with_timeout(Duration::from_secs(3));

        assert_eq!(config.credential(), Some("test-key"));
        assert_eq!(config.model, "gemini-pro");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(
            config.endpoint(),
            "http://localhost:8080/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn test_default_endpoint() {
        let config = OracleConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(
            config.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-preview-09-2025:generateContent"
        );
    }

    #[test]
    fn test_blank_credential_is_absent() {
        assert_eq!(OracleConfig::new(None).credential(), None);
        assert_eq!(OracleConfig::new(Some("   ".to_string())).credential(), None);
    }
}

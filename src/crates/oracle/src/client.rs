//! Oracle client: one submission, bounded retries, parsed verdict.
//!
//! # Example
//!
//! ```rust,ignore
//! use oracle::{OracleClient, OracleConfig};
//!
//! let client = OracleClient::new(OracleConfig::from_env())?;
//! if let Some(verdict) = client.submit("Nespresso Machine").await? {
//!     println!("{:?}", verdict.status_kind());
//! }
//! ```

use crate::config::{OracleConfig, API_KEY_ENV};
use crate::error::{OracleError, Result};
use crate::prompt::{ChallengeTarget, OraclePrompt};
use crate::remote::gemini::{api_error_message, GenerateContentRequest, GenerateContentResponse};
use crate::remote::{HttpTransport, Transport};
use crate::retry::with_retry;
use crate::verdict::{parse_verdict, OracleVerdict};
use tracing::{debug, info};

/// Client for the judge and challenge flows.
#[derive(Clone)]
pub struct OracleClient<T = HttpTransport> {
    config: OracleConfig,
    transport: T,
}

impl OracleClient<HttpTransport> {
    /// Create a client talking to the configured endpoint over HTTP.
    pub fn new(config: OracleConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.timeout)?;
        Ok(Self { config, transport })
    }
}

impl<T: Transport> OracleClient<T> {
    /// Create a client over a custom transport.
    pub fn with_transport(config: OracleConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Ask the oracle to judge `query`.
    ///
    /// Blank queries are a no-op and return `Ok(None)` without any request.
    pub async fn submit(&self, query: &str) -> Result<Option<OracleVerdict>> {
        let query = query.trim();
        if query.is_empty() {
            debug!("Ignoring blank oracle query");
            return Ok(None);
        }

        let text = self.generate(&OraclePrompt::Judge { query }).await?;
        let verdict = parse_verdict(&text)?;

        info!(
            category = verdict.category.as_deref().unwrap_or("-"),
            status = verdict.status.as_deref().unwrap_or("-"),
            "Oracle verdict received"
        );
        Ok(Some(verdict))
    }

    /// Pit `challenger` against a declared item. The reply is free text.
    ///
    /// Blank challengers are a no-op and return `Ok(None)`.
    pub async fn challenge(
        &self,
        target: &ChallengeTarget,
        challenger: &str,
    ) -> Result<Option<String>> {
        let challenger = challenger.trim();
        if challenger.is_empty() {
            debug!("Ignoring blank challenger");
            return Ok(None);
        }

        let text = self
            .generate(&OraclePrompt::Challenge { target, challenger })
            .await?;

        info!(category = %target.category, "Challenge answered");
        Ok(Some(text.trim().to_string()))
    }

    /// Send `prompt` under the retry policy and return the generated text.
    async fn generate(&self, prompt: &OraclePrompt<'_>) -> Result<String> {
        let api_key = self.config.credential().ok_or_else(|| {
            OracleError::ConfigurationMissing(format!(
                "set {} or oracle.api_key in the configuration",
                API_KEY_ENV
            ))
        })?;

        let operation = prompt.operation();
        let body = prompt.build();
        let request = &body;
        let url = self.config.endpoint();
        let url = url.as_str();

        let response = with_retry(&self.config.retry, operation, move |attempt| {
            self.attempt(url, api_key, request, attempt)
        })
        .await?;

        response
            .first_text()
            .map(str::to_string)
            .ok_or(OracleError::EmptyVerdict)
    }

    async fn attempt(
        &self,
        url: &str,
        api_key: &str,
        request: &GenerateContentRequest,
        attempt: u32,
    ) -> Result<GenerateContentResponse> {
        debug!(attempt, model = %self.config.model, "Oracle call initiated");

        let reply = self.transport.send(url, api_key, request).await?;
        if !reply.is_success() {
            return Err(OracleError::from_status(
                reply.status,
                api_error_message(&reply.body),
            ));
        }

        let response: GenerateContentResponse = serde_json::from_str(&reply.body)
            .map_err(|e| OracleError::InvalidResponse(e.to_string()))?;

        debug!(
            attempt,
            candidates = response.candidates.len(),
            finish_reason = response.finish_reason().unwrap_or("-"),
            "Oracle call succeeded"
        );
        Ok(response)
    }
}

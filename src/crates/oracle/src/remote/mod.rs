//! Remote transport for the oracle endpoint.
//!
//! [`Transport`] is the seam between the client and the network: it sends one
//! `generateContent` request and hands back the raw status and body. Status
//! classification and payload parsing happen in the client, so a transport
//! only fails when no HTTP response was obtained at all.

pub mod gemini;

pub use gemini::{GenerateContentRequest, GenerateContentResponse};

use crate::error::{OracleError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Raw HTTP reply: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a single request to the generative endpoint.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `request` to `url`, authenticating with `api_key`.
    ///
    /// Returns `Err` only when no HTTP response was received.
    async fn send(
        &self,
        url: &str,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<HttpReply>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(
        &self,
        url: &str,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<HttpReply> {
        (**self).send(url, api_key, request).await
    }
}

/// [`Transport`] backed by `reqwest`.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    timeout: Duration,
}

impl HttpTransport {
    /// Create a transport whose every attempt is bounded by `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            OracleError::ConnectivityFailure(format!("failed to create HTTP client: {}", e))
        })?;

        Ok(Self { client, timeout })
    }

    fn describe(&self, err: reqwest::Error) -> String {
        if err.is_timeout() {
            format!("request timed out after {}s", self.timeout.as_secs_f64())
        } else {
            // The URL carries the API key as a query parameter.
            err.without_url().to_string()
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        url: &str,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<HttpReply> {
        // Gemini uses API key as query parameter
        let response = self
            .client
            .post(url)
            .query(&[("key", api_key)])
            .json(request)
            .send()
            .await
            .map_err(|e| OracleError::ConnectivityFailure(self.describe(e)))?;

        let status = response.status();
        debug!(status = status.as_u16(), "Oracle response received");

        let body = match response.text().await {
            Ok(body) => body,
            // Status alone is enough to classify a failed reply.
            Err(_) if !status.is_success() => String::new(),
            Err(e) => return Err(OracleError::ConnectivityFailure(self.describe(e))),
        };

        Ok(HttpReply {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation() {
        let transport = HttpTransport::new(Duration::from_secs(10));
        assert!(transport.is_ok());
    }

    #[test]
    fn test_reply_success_range() {
        assert!(HttpReply::new(200, "").is_success());
        assert!(HttpReply::new(204, "").is_success());
        assert!(!HttpReply::new(301, "").is_success());
        assert!(!HttpReply::new(429, "").is_success());
    }
}

//! Common test utilities: a scripted transport and reply builders

#![allow(dead_code)]

use async_trait::async_trait;
use oracle::remote::GenerateContentRequest;
use oracle::{HttpReply, OracleClient, OracleConfig, OracleError, Transport};
use serde_json::json;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::time::Instant;

/// One request as seen by the scripted transport
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub at: Instant,
    pub url: String,
    pub api_key: String,
    pub request: GenerateContentRequest,
}

/// Transport that replays a fixed script of outcomes
///
/// Once the script runs out, the last outcome is repeated.
#[derive(Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Result<HttpReply, OracleError>>>,
    last: Mutex<Option<Result<HttpReply, OracleError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedTransport {
    pub fn new(script: Vec<Result<HttpReply, OracleError>>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            ..Default::default()
        })
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(
        &self,
        url: &str,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<HttpReply, OracleError> {
        self.calls.lock().unwrap().push(RecordedCall {
            at: Instant::now(),
            url: url.to_string(),
            api_key: api_key.to_string(),
            request: request.clone(),
        });

        let next = self.script.lock().unwrap().pop_front();
        let mut last = self.last.lock().unwrap();
        match next {
            Some(outcome) => {
                *last = Some(outcome.clone());
                outcome
            }
            None => last
                .clone()
                .unwrap_or_else(|| Err(OracleError::ConnectivityFailure("script empty".into()))),
        }
    }
}

/// A client with a test key over the given transport
pub fn client_with(transport: Arc<ScriptedTransport>) -> OracleClient<Arc<ScriptedTransport>> {
    OracleClient::with_transport(OracleConfig::new(Some("test-key".to_string())), transport)
}

/// 200 reply whose first candidate part carries `text`
pub fn text_reply(text: &str) -> Result<HttpReply, OracleError> {
    let body = json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    });
    Ok(HttpReply::new(200, body.to_string()))
}

/// Non-2xx reply with a Google error envelope
pub fn error_reply(status: u16, message: &str) -> Result<HttpReply, OracleError> {
    let body = json!({ "error": { "code": status, "message": message, "status": "ERROR" } });
    Ok(HttpReply::new(status, body.to_string()))
}

pub fn connection_refused() -> Result<HttpReply, OracleError> {
    Err(OracleError::ConnectivityFailure("connection refused".into()))
}

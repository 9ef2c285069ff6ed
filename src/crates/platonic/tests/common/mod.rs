//! Common test utilities: config files on disk and a latency-scripted oracle

#![allow(dead_code)]

use async_trait::async_trait;
use oracle::remote::GenerateContentRequest;
use oracle::{HttpReply, OracleClient, OracleConfig, OracleError, Transport};
use serde_json::json;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;

/// Create `<root>/.platonic/platonic.toml` with `content`
pub fn write_config(root: &Path, content: &str) -> PathBuf {
    let dir = root.join(".platonic");
    std::fs::create_dir_all(&dir).expect("Failed to create config dir");
    let path = dir.join("platonic.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    path
}

/// User and project roots in separate temp dirs
pub fn setup_config_dirs() -> (TempDir, TempDir) {
    (
        TempDir::new().expect("Failed to create temp dir"),
        TempDir::new().expect("Failed to create temp dir"),
    )
}

/// Oracle stand-in that answers each query with a verdict naming it, after a
/// per-query delay
#[derive(Default)]
pub struct EchoOracle {
    delays: HashMap<String, Duration>,
    failures: HashMap<String, u16>,
    seen: Mutex<Vec<String>>,
}

impl EchoOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delay(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_string(), delay);
        self
    }

    pub fn fail(mut self, query: &str, status: u16) -> Self {
        self.failures.insert(query.to_string(), status);
        self
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for EchoOracle {
    async fn send(
        &self,
        _url: &str,
        _api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<HttpReply, OracleError> {
        let query = request.user_text().unwrap_or_default().to_string();
        self.seen.lock().unwrap().push(query.clone());

        if let Some(delay) = self.delays.get(&query) {
            tokio::time::sleep(*delay).await;
        }

        if let Some(status) = self.failures.get(&query) {
            let body = json!({"error": {"code": status, "message": "scripted", "status": "X"}});
            return Ok(HttpReply::new(*status, body.to_string()));
        }

        let verdict = json!({"category": query, "status": "DECLARED"}).to_string();
        let body = json!({
            "candidates": [{"content": {"parts": [{"text": verdict}]}}]
        });
        Ok(HttpReply::new(200, body.to_string()))
    }
}

/// Client over `transport` with a test key and a single attempt per query
pub fn client_with(transport: Arc<EchoOracle>) -> OracleClient<Arc<EchoOracle>> {
    let config = OracleConfig::new(Some("test-key".to_string()))
        .with_retry(oracle::RetryPolicy::single_attempt());
    OracleClient::with_transport(config, transport)
}

//! Configuration schema for Platonic

use crate::error::{PlatonicError, Result};
use oracle::{OracleConfig, RetryPolicy, API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::Level;

/// Environment variable overriding `oracle.model`
pub const MODEL_ENV: &str = "PLATONIC_MODEL";

/// Environment variable overriding `oracle.base_url`
pub const BASE_URL_ENV: &str = "PLATONIC_BASE_URL";

/// Main Platonic configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PlatonicConfig {
    /// Oracle endpoint configuration
    #[serde(default)]
    pub oracle: OracleSection,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// `[oracle]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleSection {
    /// API key (supports environment variable interpolation)
    #[serde(default)]
    pub api_key: Option<String>,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// Timeout for a single attempt, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Total attempts per submission
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Base backoff delay in seconds
    #[serde(default = "default_initial_delay_secs")]
    pub initial_delay_secs: u64,

    /// Maximum backoff delay in seconds
    #[serde(default = "default_max_delay_secs")]
    pub max_delay_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_attempts() -> u32 {
    3
}

fn default_initial_delay_secs() -> u64 {
    1
}

fn default_max_delay_secs() -> u64 {
    60
}

impl Default for OracleSection {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
            max_attempts: default_max_attempts(),
            initial_delay_secs: default_initial_delay_secs(),
            max_delay_secs: default_max_delay_secs(),
        }
    }
}

/// `[logging]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    pub fn level(&self) -> Result<Level> {
        self.level
            .trim()
            .parse()
            .map_err(|_| PlatonicError::Config(format!("Invalid log level: {}", self.level)))
    }
}

impl PlatonicConfig {
    /// Resolve `${VAR_NAME}` references in string fields
    ///
    /// An API key pointing at an unset variable counts as no key at all.
    pub fn resolve_env_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_key) = self.oracle.api_key.take() {
            self.oracle.api_key = expand_env_var(&api_key, &lookup);
        }

        if let Some(base_url) = expand_env_var(&self.oracle.base_url, &lookup) {
            self.oracle.base_url = base_url;
        }

        if let Some(model) = expand_env_var(&self.oracle.model, &lookup) {
            self.oracle.model = model;
        }
    }

    /// Apply `PLATONIC_*` environment overrides
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let set = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(api_key) = set(API_KEY_ENV) {
            self.oracle.api_key = Some(api_key);
        }
        if let Some(model) = set(MODEL_ENV) {
            self.oracle.model = model;
        }
        if let Some(base_url) = set(BASE_URL_ENV) {
            self.oracle.base_url = base_url;
        }
    }

    /// Client configuration for the oracle crate
    pub fn oracle_config(&self) -> OracleConfig {
        let section = &self.oracle;
        let retry = RetryPolicy::new(section.max_attempts)
            .with_initial_delay(Duration::from_secs(section.initial_delay_secs))
            .with_max_delay(Duration::from_secs(section.max_delay_secs));

        OracleConfig::new(section.api_key.clone())
            .with_base_url(section.base_url.clone())
            .with_model(section.model.clone())
            .with_timeout(Duration::from_secs(section.timeout_secs))
            .with_retry(retry)
    }
}

/// Expand a whole-value `${VAR_NAME}` reference
///
/// Values without the syntax are returned unchanged; unresolved references
/// yield `None`.
fn expand_env_var<F>(value: &str, lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    match value
        .strip_prefix("${")
        .and_then(|rest| rest.strip_suffix('}'))
    {
        Some(var_name) => lookup(var_name),
        None => Some(value.to_string()),
    }
}

//! Error types for Platonic
//!
//! Provides a unified error type for configuration, catalog lookups and
//! oracle calls.

use oracle::OracleError;
use thiserror::Error;

/// Result type alias for Platonic operations
pub type Result<T> = std::result::Result<T, PlatonicError>;

/// Main error type for Platonic operations
#[derive(Debug, Error)]
pub enum PlatonicError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Oracle call failed
    #[error("{}", .0.user_message())]
    Oracle(#[from] OracleError),

    /// Unknown catalog id
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad command-line input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl PlatonicError {
    /// The oracle failure behind this error, if any
    pub fn as_oracle(&self) -> Option<&OracleError> {
        match self {
            Self::Oracle(err) => Some(err),
            _ => None,
        }
    }
}

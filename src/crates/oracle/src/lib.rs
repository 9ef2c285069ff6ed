//! Oracle client for the Platonic registry.
//!
//! The oracle is a Google Gemini model consulted through its
//! `generateContent` endpoint. This crate builds the requests, sends them with
//! bounded retries, and turns replies into verdicts or a classified
//! [`OracleError`].
//!
//! # Flows
//!
//! - **Judge** ([`OracleClient::submit`]) - a free-text product description is
//!   judged against the rulebook; the reply must be a JSON object and is
//!   parsed into an [`OracleVerdict`].
//! - **Challenge** ([`OracleClient::challenge`]) - a challenger is compared
//!   with a declared item; the reply is returned as text.
//!
//! Both flows share the same request builder ([`OraclePrompt`]), retry policy
//! ([`RetryPolicy`]) and error taxonomy.
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use oracle::{OracleClient, OracleConfig, OracleError};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = OracleClient::new(OracleConfig::from_env()).unwrap();
//!
//!     match client.submit("Herman Miller Aeron").await {
//!         Ok(Some(verdict)) => println!("{:?}", verdict),
//!         Ok(None) => {}
//!         Err(e) => eprintln!("{}", e.user_message()),
//!     }
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod prompt;
pub mod remote;
pub mod retry;
pub mod verdict;

// Re-export commonly used types
pub use client::OracleClient;
pub use config::{OracleConfig, API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use error::{classify, ErrorClass, OracleError, Result};
pub use prompt::{ChallengeTarget, OraclePrompt, RULEBOOK};
pub use remote::{HttpReply, HttpTransport, Transport};
pub use retry::{with_retry, Classify, RetryPolicy};
pub use verdict::{parse_verdict, OracleVerdict, VerdictStatus};

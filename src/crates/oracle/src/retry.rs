//! Retry logic with exponential backoff
//!
//! Failed attempts are classified before another one is made: permanent
//! errors return immediately, transient ones are retried after
//! `initial_delay * multiplier^attempt`, where `attempt` is the 1-based
//! number of the attempt that just failed. With the defaults that is 2s after
//! the first failure and 4s after the second.

use crate::error::{classify, ErrorClass, OracleError};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Retry strategy configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first one
    pub max_attempts: u32,

    /// Base delay multiplied by `multiplier^attempt`
    pub initial_delay: Duration,

    /// Upper bound for a single delay
    pub max_delay: Duration,

    /// Multiplier for exponential backoff
    pub multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(60),
            multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// Create a policy with a custom attempt budget
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            ..Default::default()
        }
    }

    /// A policy that never retries
    pub fn single_attempt() -> Self {
        Self::new(1)
    }

    /// Set the base delay
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Set the delay cap
    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Set the backoff multiplier
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Delay to wait after the given (1-based) attempt failed
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let factor = self.multiplier.powi(attempt.min(i32::MAX as u32) as i32);
        let delay_secs = self.initial_delay.as_secs_f64() * factor;
        let capped = delay_secs.min(self.max_delay.as_secs_f64());
        Duration::from_secs_f64(capped.max(0.0))
    }

    fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

/// Errors that can tell whether another attempt might succeed
pub trait Classify {
    fn error_class(&self) -> ErrorClass;
}

impl Classify for OracleError {
    fn error_class(&self) -> ErrorClass {
        classify(self)
    }
}

/// Execute an operation with retry logic
///
/// Returns the first success, the first permanent error, or the last
/// transient error once the attempt budget is spent.
pub async fn with_retry<F, Fut, T, E>(
    policy: &RetryPolicy,
    operation_name: &str,
    mut operation: F,
) -> std::result::Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = std::result::Result<T, E>>,
    E: Classify + Display,
{
    let max_attempts = policy.attempts();
    let mut attempt = 1;

    loop {
        match operation(attempt).await {
            Ok(value) => {
                if attempt > 1 {
                    debug!(operation = operation_name, attempt, "Retry succeeded");
                }
                return Ok(value);
            }
            Err(e) => {
                if e.error_class() == ErrorClass::Permanent {
                    warn!(
                        operation = operation_name,
                        attempt,
                        error = %e,
                        "Permanent error, not retrying"
                    );
                    return Err(e);
                }

                if attempt >= max_attempts {
                    warn!(
                        operation = operation_name,
                        attempt,
                        error = %e,
                        "Operation failed, attempts exhausted"
                    );
                    return Err(e);
                }

                let delay = policy.delay_after(attempt);
                warn!(
                    operation = operation_name,
                    attempt,
                    max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = %e,
                    "Transient error, will retry after delay"
                );
                sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

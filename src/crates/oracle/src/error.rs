//! Error types for oracle requests.
//!
//! Every failure a submission can end in is one variant of [`OracleError`].
//! HTTP failures are mapped from the status code with
//! [`OracleError::from_status`]; anything that never produced a status is a
//! [`OracleError::ConnectivityFailure`].

use thiserror::Error;

/// Result type for oracle operations.
pub type Result<T> = std::result::Result<T, OracleError>;

/// Errors that can occur while consulting the oracle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    /// No credential configured. No request was sent.
    #[error("API key not configured: {0}")]
    ConfigurationMissing(String),

    /// HTTP 401 or 403.
    #[error("Unauthorized ({status}): {message}")]
    Unauthorized { status: u16, message: String },

    /// HTTP 429.
    #[error("Rate limit exceeded: {message}")]
    RateLimited { message: String },

    /// HTTP 400.
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// HTTP 404.
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// HTTP 5xx.
    #[error("Service unavailable ({status}): {message}")]
    ServiceUnavailable { status: u16, message: String },

    /// Any other non-2xx status.
    #[error("Unexpected status ({status}): {message}")]
    UnexpectedStatus { status: u16, message: String },

    /// No HTTP response at all (DNS, refused connection, timeout).
    #[error("Connection failed: {0}")]
    ConnectivityFailure(String),

    /// 2xx response whose body is not a generateContent envelope.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// 2xx response without any generated text.
    #[error("No verdict returned")]
    EmptyVerdict,

    /// Generated text that is not a JSON object.
    #[error("Malformed verdict: {reason}")]
    MalformedVerdict { raw: String, reason: String },
}

/// Classification of errors for retry decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// May succeed on another attempt (429, 5xx, no response).
    Transient,

    /// Will fail the same way again.
    Permanent,
}

/// Classify an error to decide whether it is worth another attempt.
pub fn classify(error: &OracleError) -> ErrorClass {
    match error {
        OracleError::RateLimited { .. }
        | OracleError::ServiceUnavailable { .. }
        | OracleError::ConnectivityFailure(_) => ErrorClass::Transient,
        OracleError::ConfigurationMissing(_)
        | OracleError::Unauthorized { .. }
        | OracleError::BadRequest { .. }
        | OracleError::NotFound { .. }
        | OracleError::UnexpectedStatus { .. }
        | OracleError::InvalidResponse(_)
        | OracleError::EmptyVerdict
        | OracleError::MalformedVerdict { .. } => ErrorClass::Permanent,
    }
}

impl OracleError {
    /// Map a non-2xx HTTP status to an error.
    ///
    /// `api_message` is the message extracted from the response body, if any.
    pub fn from_status(status: u16, api_message: Option<String>) -> Self {
        let message = api_message.unwrap_or_default();
        match status {
            400 => OracleError::BadRequest { message },
            401 | 403 => OracleError::Unauthorized { status, message },
            404 => OracleError::NotFound { message },
            429 => OracleError::RateLimited { message },
            500..=599 => OracleError::ServiceUnavailable { status, message },
            _ => OracleError::UnexpectedStatus { status, message },
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        classify(self) == ErrorClass::Transient
    }

    /// HTTP status behind this error, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            OracleError::Unauthorized { status, .. }
            | OracleError::ServiceUnavailable { status, .. }
            | OracleError::UnexpectedStatus { status, .. } => Some(*status),
            OracleError::RateLimited { .. } => Some(429),
            OracleError::BadRequest { .. } => Some(400),
            OracleError::NotFound { .. } => Some(404),
            _ => None,
        }
    }

    /// Single line shown to the user in place of a verdict.
    pub fn user_message(&self) -> String {
        match self {
            OracleError::ConfigurationMissing(_) => {
                "API key not configured. Set PLATONIC_API_KEY or oracle.api_key in platonic.toml"
                    .to_string()
            }
            OracleError::Unauthorized { status: 401, message } => format!(
                "API Key Error (401): Invalid or missing API key. {}",
                or_hint(message, "Please check your API key configuration.")
            ),
            OracleError::Unauthorized { status, message } => format!(
                "Access Forbidden ({}): {}",
                status,
                or_hint(
                    message,
                    "API key may be restricted or service is disabled. Check API key permissions."
                )
            ),
            OracleError::RateLimited { message } => format!(
                "Rate Limit Exceeded (429): {}",
                or_hint(message, "Too many requests. Please try again later.")
            ),
            OracleError::BadRequest { message } => format!(
                "Bad Request (400): {}",
                or_hint(message, "Invalid request format. Please try a different query.")
            ),
            OracleError::NotFound { message } => format!(
                "Service Not Found (404): {}",
                or_hint(message, "API endpoint not found. The model may not be available.")
            ),
            OracleError::ServiceUnavailable { status, message } => format!(
                "Service Error ({}): {}",
                status,
                or_hint(
                    message,
                    "The API service is temporarily unavailable. Please try again later."
                )
            ),
            OracleError::UnexpectedStatus { status, message } => format!(
                "API Error ({}): {}",
                status,
                or_hint(message, "An unexpected error occurred")
            ),
            OracleError::ConnectivityFailure(detail) => format!(
                "The Oracle is currently silent: {}",
                or_hint(
                    detail,
                    "Connection failed. Check your internet connection or try again."
                )
            ),
            OracleError::InvalidResponse(detail) => {
                format!("The Oracle is currently silent: {}", detail)
            }
            OracleError::EmptyVerdict => "The Oracle remains silent.".to_string(),
            OracleError::MalformedVerdict { reason, .. } => {
                format!("The Oracle spoke in riddles: {}", reason)
            }
        }
    }
}

fn or_hint<'a>(message: &'a str, hint: &'a str) -> &'a str {
    if message.trim().is_empty() {
        hint
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_mapping() {
        assert!(matches!(
            OracleError::from_status(400, None),
            OracleError::BadRequest { .. }
        ));
        assert!(matches!(
            OracleError::from_status(401, None),
            OracleError::Unauthorized { status: 401, .. }
        ));
        assert!(matches!(
            OracleError::from_status(403, None),
            OracleError::Unauthorized { status: 403, .. }
        ));
        assert!(matches!(
            OracleError::from_status(404, None),
            OracleError::NotFound { .. }
        ));
        assert!(matches!(
            OracleError::from_status(429, None),
            OracleError::RateLimited { .. }
        ));
        assert!(matches!(
            OracleError::from_status(502, None),
            OracleError::ServiceUnavailable { status: 502, .. }
        ));
        assert!(matches!(
            OracleError::from_status(418, None),
            OracleError::UnexpectedStatus { status: 418, .. }
        ));
    }

    #[test]
    fn test_classify_transient() {
        assert_eq!(
            classify(&OracleError::from_status(429, None)),
            ErrorClass::Transient
        );
        assert_eq!(
            classify(&OracleError::from_status(503, None)),
            ErrorClass::Transient
        );
        assert_eq!(
            classify(&OracleError::ConnectivityFailure("dns".into())),
            ErrorClass::Transient
        );
    }

    #[test]
    fn test_classify_permanent() {
        for status in [400, 401, 403, 404, 409] {
            assert!(!OracleError::from_status(status, None).is_retryable());
        }
        assert!(!OracleError::ConfigurationMissing("x".into()).is_retryable());
        assert!(!OracleError::EmptyVerdict.is_retryable());
        assert!(!OracleError::MalformedVerdict {
            raw: "x".into(),
            reason: "y".into()
        }
        .is_retryable());
    }

    #[test]
    fn test_status_accessor() {
        assert_eq!(OracleError::from_status(429, None).status(), Some(429));
        assert_eq!(OracleError::from_status(500, None).status(), Some(500));
        assert_eq!(OracleError::EmptyVerdict.status(), None);
    }

    #[test]
    fn test_user_message_prefers_api_message() {
        let err = OracleError::from_status(429, Some("Quota exhausted".into()));
        assert_eq!(err.user_message(), "Rate Limit Exceeded (429): Quota exhausted");

        let err = OracleError::from_status(429, None);
        assert_eq!(
            err.user_message(),
            "Rate Limit Exceeded (429): Too many requests. Please try again later."
        );
    }

    #[test]
    fn test_user_message_forbidden() {
        let err = OracleError::from_status(403, None);
        assert!(err.user_message().starts_with("Access Forbidden (403)"));
    }
}

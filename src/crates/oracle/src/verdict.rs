//! Structured verdicts returned by the judge flow.
//!
//! The model is asked for a fixed JSON shape but nothing guarantees it. Every
//! field is optional, and values are coerced on receipt: numbers and booleans
//! become text, arrays of scalars are joined with `"; "`, and `null`, objects
//! or blank strings count as absent.

use crate::error::{OracleError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A judgment as returned by the oracle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleVerdict {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_text")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_text")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_text")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_text")]
    pub core_reasoning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_text")]
    pub maintenance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_text")]
    pub lifespan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_text")]
    pub failure_modes: Option<String>,
}

impl OracleVerdict {
    /// The status, if it is one of the four the oracle may hand out.
    pub fn status_kind(&self) -> Option<VerdictStatus> {
        self.status.as_deref().and_then(|s| s.parse().ok())
    }

    /// True when the oracle answered with an object carrying none of the
    /// expected fields.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Verdict statuses the oracle is instructed to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerdictStatus {
    Declared,
    Rejected,
    Empty,
    Candidate,
}

impl VerdictStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictStatus::Declared => "DECLARED",
            VerdictStatus::Rejected => "REJECTED",
            VerdictStatus::Empty => "EMPTY",
            VerdictStatus::Candidate => "CANDIDATE",
        }
    }
}

impl fmt::Display for VerdictStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerdictStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DECLARED" => Ok(VerdictStatus::Declared),
            "REJECTED" => Ok(VerdictStatus::Rejected),
            "EMPTY" => Ok(VerdictStatus::Empty),
            "CANDIDATE" => Ok(VerdictStatus::Candidate),
            other => Err(format!("unknown verdict status: {}", other)),
        }
    }
}

/// Parse generated text into a verdict.
///
/// Fails with [`OracleError::MalformedVerdict`] carrying the raw text when it
/// is not a JSON object.
pub fn parse_verdict(text: &str) -> Result<OracleVerdict> {
    let malformed = |reason: String| OracleError::MalformedVerdict {
        raw: text.to_string(),
        reason,
    };

    match serde_json::from_str::<Value>(text) {
        Ok(value @ Value::Object(_)) => {
            serde_json::from_value(value).map_err(|e| malformed(e.to_string()))
        }
        Ok(other) => Err(malformed(format!(
            "expected a JSON object, found {}",
            json_kind(&other)
        ))),
        Err(e) => Err(malformed(e.to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_text(&value))
}

fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => {
            let joined = items
                .iter()
                .filter(|item| !item.is_array())
                .filter_map(coerce_text)
                .collect::<Vec<_>>()
                .join("; ");
            if joined.is_empty() {
                None
            } else {
                Some(joined)
            }
        }
        _ => None,
    }
}

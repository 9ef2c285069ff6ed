//! Google Gemini `generateContent` wire types.
//!
//! Request types serialize to the shape the endpoint expects:
//!
//! ```json
//! {
//!   "contents": [{ "parts": [{ "text": "..." }] }],
//!   "systemInstruction": { "parts": [{ "text": "..." }] },
//!   "generationConfig": { "responseMimeType": "application/json" }
//! }
//! ```
//!
//! Response types are lenient: every level may be missing, and the caller
//! decides what a missing payload means.

use serde::{Deserialize, Serialize};

/// Longest slice of a raw error body carried into an error message.
const ERROR_BODY_PREVIEW: usize = 200;

/// Body of a `generateContent` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Text of the first user part.
    pub fn user_text(&self) -> Option<&str> {
        self.contents
            .first()
            .and_then(|c| c.parts.first())
            .map(|p| p.text.as_str())
    }

    /// Text of the system instruction.
    pub fn system_text(&self) -> Option<&str> {
        self.system_instruction
            .as_ref()
            .and_then(|c| c.parts.first())
            .map(|p| p.text.as_str())
    }

    /// Whether the request asks for a JSON reply.
    pub fn expects_json(&self) -> bool {
        self.generation_config
            .as_ref()
            .and_then(|g| g.response_mime_type.as_deref())
            == Some("application/json")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

impl Content {
    /// A single-part content block without a role.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part { text: text.into() }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl GenerationConfig {
    pub fn json() -> Self {
        Self {
            response_mime_type: Some("application/json".to_string()),
            temperature: None,
        }
    }
}

/// Successful `generateContent` reply.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

impl GenerateContentResponse {
    /// `candidates[0].content.parts[0].text`, when present and non-empty.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref())
            .filter(|text| !text.trim().is_empty())
    }

    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u64,
    #[serde(default)]
    pub candidates_token_count: u64,
    #[serde(default)]
    pub total_token_count: u64,
}

// Google API error envelope: { "error": { "code", "message", "status" } }
#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

/// Best-effort message from a non-2xx body.
///
/// Uses `error.message` of a Google error envelope, otherwise the first 200
/// characters of the raw body. Blank bodies yield `None`.
pub fn api_error_message(body: &str) -> Option<String> {
    if let Ok(envelope) = serde_json::from_str::<ApiErrorEnvelope>(body) {
        if let Some(error) = envelope.error {
            return error.message.filter(|m| !m.trim().is_empty());
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(ERROR_BODY_PREVIEW).collect())
    }
}

//! Anthropic Messages API types
//!
//! Structs that mirror the Messages API JSON request and response format.
//! Only the fields this service reads are modelled.

use serde::{Deserialize, Serialize};

/// Request body for `POST /v1/messages`
#[derive(Serialize, Debug)]
pub struct MessagesRequest {
    /// Model identifier
    pub model: String,
    /// Maximum output tokens
    pub max_tokens: u32,
    /// Conversation turns (a single user turn here)
    pub messages: Vec<RequestMessage>,
}

/// A single conversation turn
#[derive(Serialize, Debug)]
pub struct RequestMessage {
    /// "user" or "assistant"
    pub role: String,
    /// Text content of the turn
    pub content: String,
}

impl RequestMessage {
    /// A user turn with plain text content
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Successful response body
#[derive(Deserialize, Debug)]
pub struct MessagesResponse {
    /// Content blocks produced by the model
    pub content: Vec<ContentBlock>,
    /// Why the model stopped generating (e.g. "end_turn", "max_tokens")
    #[serde(default)]
    pub stop_reason: Option<String>,
}

/// A single content block of a response
#[derive(Deserialize, Debug)]
pub struct ContentBlock {
    /// Block type, "text" for text output
    #[serde(rename = "type")]
    pub block_type: String,
    /// Text of a "text" block
    #[serde(default)]
    pub text: Option<String>,
}

/// Error response body, e.g. `{"type": "error", "error": {...}}`
#[derive(Deserialize, Debug)]
pub struct ErrorResponse {
    /// Error detail
    pub error: ErrorDetail,
}

/// Error detail of an error response
#[derive(Deserialize, Debug)]
pub struct ErrorDetail {
    /// Error type, e.g. "overloaded_error"
    #[serde(rename = "type")]
    pub error_type: String,
    /// Human-readable error message
    pub message: String,
}

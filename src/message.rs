// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Optional so that a body without the field still deserializes and gets
    /// rejected by the validator instead of the extractor.
    #[serde(default)]
    pub message: Option<String>,
}

/// The envelope every caller sees, success or not. `reply` is always present
/// except when the request itself was rejected before any conversation
/// context existed.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatResponse {
    pub fn success(reply: String) -> Self {
        Self {
            reply: Some(reply),
            success: true,
            error: None,
        }
    }

    pub fn failure(reply: Option<&str>, error: String) -> Self {
        Self {
            reply: reply.map(str::to_string),
            success: false,
            error: Some(error),
        }
    }
}

// src/error.rs
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::message::ChatResponse;

/// Fallback sentences shown to the user when no real model reply exists.
/// They are fixed text, never derived from upstream payloads.
const FALLBACK_CONFIGURING: &str =
    "The AI service is still being set up. Please try again later or reach us directly.";
const FALLBACK_UNAVAILABLE: &str =
    "The AI service is temporarily unavailable. Please use the contact details at the \
     bottom of the page to reach us directly.";
const FALLBACK_INTERNAL: &str = "Something went wrong on our side. Please try again shortly.";

/// Every way a chat request can fail. Each variant carries enough to build a
/// diagnostic string, never a raw upstream payload.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("message required")]
    InvalidInput,

    #[error("credential not configured")]
    MissingCredential,

    #[error("upstream transport failure: {0}")]
    Transport(String),

    #[error("upstream rejected request: status {0}")]
    UpstreamRejected(StatusCode),

    #[error("upstream returned an unexpected body: {0}")]
    UpstreamMalformed(String),

    #[error("internal fault: {0}")]
    Internal(#[from] anyhow::Error),
}

/// The response normalizer. Every error becomes a well-formed JSON envelope
/// with a status code; this conversion itself has no failure path, so no
/// fault can reach the caller as a raw error page.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let diagnostic = self.to_string();
        let (status, reply) = match &self {
            ApiError::InvalidInput => (StatusCode::BAD_REQUEST, None),
            ApiError::MissingCredential => {
                (StatusCode::INTERNAL_SERVER_ERROR, Some(FALLBACK_CONFIGURING))
            }
            ApiError::Transport(_)
            | ApiError::UpstreamRejected(_)
            | ApiError::UpstreamMalformed(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Some(FALLBACK_UNAVAILABLE))
            }
            ApiError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Some(FALLBACK_INTERNAL))
            }
        };

        (status, Json(ChatResponse::failure(reply, diagnostic))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_status_shows_up_in_the_diagnostic() {
        let err = ApiError::UpstreamRejected(StatusCode::TOO_MANY_REQUESTS);
        assert!(err.to_string().contains("429"));
    }

    #[test]
    fn invalid_input_carries_the_documented_error_string() {
        assert_eq!(ApiError::InvalidInput.to_string(), "message required");
    }

    #[test]
    fn internal_faults_normalize_to_a_500_envelope() {
        let response = ApiError::Internal(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

use axum::{
    Json,
    extract::State,
    extract::rejection::JsonRejection,
};

use crate::{
    error::ApiError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

/// The whole pipeline: validate, call upstream, wrap the reply. Every error
/// variant is normalized by `ApiError`'s response conversion.
pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    // A non-JSON body or a non-string `message` never reaches the upstream.
    let Json(payload) = payload.map_err(|_| ApiError::InvalidInput)?;

    let message = payload
        .message
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .ok_or(ApiError::InvalidInput)?;

    let reply = state.upstream.complete(message).await?;

    Ok(Json(ChatResponse::success(reply)))
}

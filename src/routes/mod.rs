// src/routes/mod.rs
pub mod chat;

use crate::state::SharedState;
use axum::{
    Json, Router,
    routing::{get, post},
};
use chat::chat_handler;
use serde_json::json;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/api/chat", post(chat_handler))
        .route("/health", get(|| async { "OK" }))
        .route("/", get(home_handler))
        .layer(TraceLayer::new_for_http())
}

async fn home_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "online",
        "service": "NeuraServe AI API",
        "version": env!("CARGO_PKG_VERSION"),
        "message": "POST /api/chat to talk to the assistant",
    }))
}

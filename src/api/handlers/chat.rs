//! Chat endpoint handler.

use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{ChatRequest, ChatResponse};
use crate::app_state::AppState;
use crate::service::chat;

/// `POST /api/chat` — Answer a tracking query.
#[utoipa::path(
    post,
    path = "/api/chat",
    tag = "Chat",
    summary = "Classify a tracking query",
    description = "Matches the query against the supported intents (location, ETA, speed) and returns a canned response.",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Query classified", body = ChatResponse),
    )
)]
pub async fn chat_handler(Json(req): Json<ChatRequest>) -> Json<ChatResponse> {
    Json(ChatResponse {
        response: chat::classify(&req.query),
    })
}

/// Chat routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/chat", post(chat_handler))
}

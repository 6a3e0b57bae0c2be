//! Axum WebSocket upgrade handler.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::ws::WebSocketUpgrade;
use axum::response::IntoResponse;

use super::connection::run_connection;
use crate::app_state::AppState;

/// `GET /` — Upgrade HTTP connection to WebSocket.
///
/// A subscriber is only ever registered after the handshake completes, so a
/// failed upgrade never reaches the registry.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    let registry = Arc::clone(&state.registry);

    ws.on_upgrade(move |socket| run_connection(socket, registry))
}

//! DTOs for the chat endpoint.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatRequest {
    /// Free-text query about the tracked vehicle.
    pub query: String,
}

/// Response body for `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    /// Canned response for the matched intent, or the fallback.
    pub response: String,
}

//! DTOs for the position update endpoint.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /api/update-position`.
///
/// Field names match the GPS feed wire format (`lat`/`lng` rather than the
/// domain's `latitude`/`longitude`).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdatePositionRequest {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
    /// Instantaneous speed as reported by the vehicle.
    pub speed: f64,
}

/// Response body for `POST /api/update-position`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdatePositionResponse {
    /// Always `true` once the update was accepted for broadcast; delivery
    /// is best-effort and never reflected here.
    pub success: bool,
}

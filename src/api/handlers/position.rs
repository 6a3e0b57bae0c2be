//! Position update endpoint handler.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{UpdatePositionRequest, UpdatePositionResponse};
use crate::app_state::AppState;
use crate::domain::PositionUpdate;
use crate::error::{ErrorResponse, GatewayError};

/// `POST /api/update-position` — Accept a position report and broadcast it.
///
/// The response reports acceptance only: broadcast is fire-and-forget and
/// succeeds regardless of how many subscribers actually received the frame.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] if the coordinates are
/// non-finite or out of range.
#[utoipa::path(
    post,
    path = "/api/update-position",
    tag = "Tracking",
    summary = "Broadcast a position update",
    description = "Accepts a vehicle position report and fans it out to all connected WebSocket subscribers.",
    request_body = UpdatePositionRequest,
    responses(
        (status = 200, description = "Update accepted for broadcast", body = UpdatePositionResponse),
        (status = 400, description = "Invalid position payload", body = ErrorResponse),
    )
)]
pub async fn update_position(
    State(state): State<AppState>,
    Json(req): Json<UpdatePositionRequest>,
) -> Result<Json<UpdatePositionResponse>, GatewayError> {
    let update = parse_position_request(&req)?;

    let queued = state.dispatcher.broadcast_position(&update).await;
    tracing::debug!(
        latitude = update.latitude,
        longitude = update.longitude,
        speed = update.speed,
        queued,
        "position update broadcast"
    );

    Ok(Json(UpdatePositionResponse { success: true }))
}

/// Position routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/update-position", post(update_position))
}

/// Validates an [`UpdatePositionRequest`] into a domain [`PositionUpdate`].
fn parse_position_request(req: &UpdatePositionRequest) -> Result<PositionUpdate, GatewayError> {
    if !req.lat.is_finite() || !(-90.0..=90.0).contains(&req.lat) {
        return Err(GatewayError::InvalidRequest(format!(
            "latitude out of range: {}",
            req.lat
        )));
    }
    if !req.lng.is_finite() || !(-180.0..=180.0).contains(&req.lng) {
        return Err(GatewayError::InvalidRequest(format!(
            "longitude out of range: {}",
            req.lng
        )));
    }
    if !req.speed.is_finite() {
        return Err(GatewayError::InvalidRequest(format!(
            "speed must be finite: {}",
            req.speed
        )));
    }
    Ok(PositionUpdate::new(req.lat, req.lng, req.speed))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn request(lat: f64, lng: f64, speed: f64) -> UpdatePositionRequest {
        UpdatePositionRequest { lat, lng, speed }
    }

    #[test]
    fn valid_request_parses() {
        let result = parse_position_request(&request(40.4168, -3.7038, 12.5));
        assert_eq!(result.ok(), Some(PositionUpdate::new(40.4168, -3.7038, 12.5)));
    }

    #[test]
    fn latitude_out_of_range_is_rejected() {
        assert!(parse_position_request(&request(91.0, 0.0, 0.0)).is_err());
        assert!(parse_position_request(&request(-90.5, 0.0, 0.0)).is_err());
    }

    #[test]
    fn longitude_out_of_range_is_rejected() {
        assert!(parse_position_request(&request(0.0, 180.5, 0.0)).is_err());
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(parse_position_request(&request(f64::NAN, 0.0, 0.0)).is_err());
        assert!(parse_position_request(&request(0.0, f64::INFINITY, 0.0)).is_err());
        assert!(parse_position_request(&request(0.0, 0.0, f64::NAN)).is_err());
    }

    #[test]
    fn negative_speed_is_accepted() {
        // Vehicles reverse; the feed imposes no sign convention.
        assert!(parse_position_request(&request(0.0, 0.0, -1.0)).is_ok());
    }
}

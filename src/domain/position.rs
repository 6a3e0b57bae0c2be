//! Position update value type.

use serde::{Deserialize, Serialize};

/// A single vehicle position report.
///
/// Transient: built from an inbound HTTP update, broadcast once, and
/// discarded. Nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionUpdate {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Instantaneous speed as reported by the vehicle.
    pub speed: f64,
}

impl PositionUpdate {
    /// Creates a new position update.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64, speed: f64) -> Self {
        Self {
            latitude,
            longitude,
            speed,
        }
    }
}

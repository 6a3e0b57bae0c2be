//! WebSocket wire messages: the tagged broadcast envelope.
//!
//! Every outbound frame is JSON text of the shape
//! `{"type": <tag>, "data": <payload>}`. The tag namespace is open for
//! future message kinds; position updates are the only kind today.

use serde::{Deserialize, Serialize};

use crate::domain::PositionUpdate;

/// Tagged envelope for all server → client broadcast frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum BroadcastMessage {
    /// A vehicle position changed.
    #[serde(rename = "POSITION_UPDATE")]
    PositionUpdate(PositionPayload),
}

/// Payload of a `POSITION_UPDATE` frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionPayload {
    /// `[latitude, longitude]` pair.
    pub position: [f64; 2],
    /// Instantaneous speed.
    pub speed: f64,
}

impl BroadcastMessage {
    /// Wraps a position update in the `POSITION_UPDATE` envelope.
    #[must_use]
    pub const fn position_update(update: &PositionUpdate) -> Self {
        Self::PositionUpdate(PositionPayload {
            position: [update.latitude, update.longitude],
            speed: update.speed,
        })
    }

    /// Returns the wire tag for this message kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::PositionUpdate(_) => "POSITION_UPDATE",
        }
    }

    /// Serializes the message to its JSON-text wire frame.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if serialization fails.
    pub fn to_frame(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

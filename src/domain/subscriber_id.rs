//! Type-safe subscriber identifier.
//!
//! [`SubscriberId`] is a newtype wrapper around [`uuid::Uuid`] (v4) providing
//! type safety so that subscriber identifiers cannot be confused with other
//! UUIDs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a connected subscriber.
///
/// Wraps a UUID v4. Generated once when the WebSocket handshake completes
/// and immutable thereafter. Used as the dictionary key in
/// [`super::SubscriberRegistry`] and as the correlation token in log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriberId(uuid::Uuid);

impl SubscriberId {
    /// Creates a new random `SubscriberId` (UUID v4).
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Creates a `SubscriberId` from an existing [`uuid::Uuid`].
    #[must_use]
    pub const fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner [`uuid::Uuid`].
    #[must_use]
    pub const fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl Default for SubscriberId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<uuid::Uuid> for SubscriberId {
    fn from(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }
}

impl From<SubscriberId> for uuid::Uuid {
    fn from(id: SubscriberId) -> Self {
        id.0
    }
}

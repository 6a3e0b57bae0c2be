//! Broadcast dispatch over the subscriber registry.
//!
//! [`BroadcastDispatcher`] serializes a message once, snapshots the current
//! subscriber set, and pushes the frame onto each open subscriber's outbound
//! queue. Delivery is best-effort and fire-and-forget: a dead subscriber is
//! reaped, the rest still receive the frame, and no failure is surfaced to
//! the caller.

use std::sync::Arc;

use crate::domain::{PositionUpdate, SubscriberRegistry};
use crate::ws::messages::BroadcastMessage;

/// Fans broadcast messages out to every open subscriber.
///
/// Stateless coordinator: owns a reference to the [`SubscriberRegistry`]
/// and nothing else. Sends never block on a peer — each subscriber drains
/// its own queue from its connection task.
#[derive(Debug, Clone)]
pub struct BroadcastDispatcher {
    registry: Arc<SubscriberRegistry>,
}

impl BroadcastDispatcher {
    /// Creates a new `BroadcastDispatcher`.
    #[must_use]
    pub fn new(registry: Arc<SubscriberRegistry>) -> Self {
        Self { registry }
    }

    /// Returns a reference to the inner [`SubscriberRegistry`].
    #[must_use]
    pub fn registry(&self) -> &Arc<SubscriberRegistry> {
        &self.registry
    }

    /// Broadcasts a message to every open subscriber in the current
    /// snapshot.
    ///
    /// Subscribers not in the `Open` state are skipped without an error.
    /// A subscriber whose queue is gone is unregistered; delivery to the
    /// remaining subscribers is unaffected. Returns the number of
    /// subscribers the frame was queued to.
    pub async fn broadcast(&self, message: &BroadcastMessage) -> usize {
        let frame = match message.to_frame() {
            Ok(frame) => frame,
            Err(error) => {
                tracing::error!(kind = message.kind(), %error, "failed to serialize broadcast");
                return 0;
            }
        };

        let snapshot = self.registry.snapshot().await;
        let mut queued = 0;
        let mut stale = Vec::new();

        for subscriber in &snapshot {
            if !subscriber.is_open() {
                continue;
            }
            if subscriber.send(frame.clone()) {
                queued += 1;
            } else {
                stale.push(subscriber.id());
            }
        }

        for id in stale {
            tracing::debug!(subscriber_id = %id, "reaping subscriber with closed channel");
            self.registry.unregister(id).await;
        }

        tracing::debug!(kind = message.kind(), queued, "broadcast dispatched");
        queued
    }

    /// Wraps a position update in its envelope and broadcasts it.
    pub async fn broadcast_position(&self, update: &PositionUpdate) -> usize {
        self.broadcast(&BroadcastMessage::position_update(update)).await
    }
}

//! Concurrent subscriber storage.
//!
//! [`SubscriberRegistry`] stores every currently connected subscriber in a
//! `HashMap` protected by a [`tokio::sync::RwLock`]. Registration and
//! removal take the write lock; broadcast snapshots take the read lock, so
//! a snapshot never observes a partially applied membership change.

use std::collections::HashMap;

use tokio::sync::RwLock;

use super::SubscriberId;
use super::subscriber::{ConnectionState, Subscriber};

/// Central store for all connected subscribers.
///
/// # Concurrency
///
/// - Registration, removal, and snapshots may be called from any task.
/// - Membership changes are atomic: a snapshot sees a subscriber entirely
///   or not at all, never twice.
/// - A handle stays in the map only until its channel's closure has been
///   processed; the connection task and the dispatcher both unregister.
#[derive(Debug)]
pub struct SubscriberRegistry {
    subscribers: RwLock<HashMap<SubscriberId, Subscriber>>,
}

impl SubscriberRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subscribers: RwLock::new(HashMap::new()),
        }
    }

    /// Adds a subscriber to the registry.
    ///
    /// The connection task transitions the handle to `Open` before
    /// registering it; liveness is re-checked at send time regardless.
    /// IDs are UUID v4, so an insert never displaces another subscriber.
    pub async fn register(&self, subscriber: Subscriber) {
        let id = subscriber.id();
        let mut map = self.subscribers.write().await;
        map.insert(id, subscriber);
        tracing::debug!(subscriber_id = %id, total = map.len(), "subscriber registered");
    }

    /// Removes a subscriber, transitioning it to `Closed`.
    ///
    /// Idempotent: removing an id that is not present is a no-op. Returns
    /// `true` if the subscriber was present.
    pub async fn unregister(&self, id: SubscriberId) -> bool {
        let mut map = self.subscribers.write().await;
        match map.remove(&id) {
            Some(subscriber) => {
                subscriber.transition(ConnectionState::Closed);
                tracing::debug!(subscriber_id = %id, total = map.len(), "subscriber unregistered");
                true
            }
            None => false,
        }
    }

    /// Returns a point-in-time copy of the current subscriber set.
    ///
    /// Safe to iterate without holding the lock: handles are cheap clones
    /// sharing the underlying channel and state. Subscribers registered
    /// after the snapshot began may be absent; none appears twice.
    pub async fn snapshot(&self) -> Vec<Subscriber> {
        let map = self.subscribers.read().await;
        map.values().cloned().collect()
    }

    /// Returns the number of registered subscribers.
    pub async fn len(&self) -> usize {
        self.subscribers.read().await.len()
    }

    /// Returns `true` if no subscribers are registered.
    pub async fn is_empty(&self) -> bool {
        self.subscribers.read().await.is_empty()
    }

    /// Drains the registry, transitioning every subscriber to `Closed`.
    ///
    /// Called once at server shutdown. Connection tasks observe the state
    /// change and stop forwarding; their sockets are torn down with the
    /// runtime.
    pub async fn shutdown(&self) {
        let mut map = self.subscribers.write().await;
        let drained = map.len();
        for (_, subscriber) in map.drain() {
            subscriber.transition(ConnectionState::Closed);
        }
        tracing::info!(drained, "subscriber registry shut down");
    }
}

impl Default for SubscriberRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use tokio::sync::mpsc;

    use super::*;

    fn make_subscriber() -> (Subscriber, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let sub = Subscriber::new(tx);
        sub.transition(ConnectionState::Open);
        (sub, rx)
    }

    #[tokio::test]
    async fn register_and_snapshot() {
        let registry = SubscriberRegistry::new();
        let (sub, _rx) = make_subscriber();
        let id = sub.id();

        registry.register(sub).await;
        assert_eq!(registry.len().await, 1);

        let snapshot = registry.snapshot().await;
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.iter().any(|s| s.id() == id));
    }

    #[tokio::test]
    async fn unregister_is_idempotent() {
        let registry = SubscriberRegistry::new();
        let (sub, _rx) = make_subscriber();
        let id = sub.id();

        registry.register(sub).await;
        assert!(registry.unregister(id).await);
        assert!(!registry.unregister(id).await);
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn unregister_marks_closed() {
        let registry = SubscriberRegistry::new();
        let (sub, _rx) = make_subscriber();
        let id = sub.id();
        let handle = sub.clone();

        registry.register(sub).await;
        registry.unregister(id).await;
        assert_eq!(handle.state(), ConnectionState::Closed);
    }

    #[tokio::test]
    async fn snapshot_excludes_unregistered() {
        let registry = SubscriberRegistry::new();
        let (a, _rx_a) = make_subscriber();
        let (b, _rx_b) = make_subscriber();
        let id_a = a.id();

        registry.register(a).await;
        registry.register(b).await;
        registry.unregister(id_a).await;

        let snapshot = registry.snapshot().await;
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.iter().all(|s| s.id() != id_a));
    }

    #[tokio::test]
    async fn snapshot_has_no_duplicates() {
        let registry = SubscriberRegistry::new();
        let mut receivers = Vec::new();
        for _ in 0..16 {
            let (sub, rx) = make_subscriber();
            receivers.push(rx);
            registry.register(sub).await;
        }

        let snapshot = registry.snapshot().await;
        let mut ids: Vec<_> = snapshot.iter().map(Subscriber::id).collect();
        ids.sort_by_key(|id| *id.as_uuid());
        ids.dedup();
        assert_eq!(ids.len(), 16);
    }

    #[tokio::test]
    async fn concurrent_register_unregister_converges() {
        let registry = Arc::new(SubscriberRegistry::new());
        let mut handles = Vec::new();
        let mut kept = Vec::new();

        // Half the subscribers are registered and then unregistered from
        // their own task; the other half stay.
        for i in 0..50 {
            let (sub, rx) = make_subscriber();
            let id = sub.id();
            let remove = i % 2 != 0;
            if !remove {
                kept.push((id, rx));
            }
            let registry = Arc::clone(&registry);
            handles.push(tokio::spawn(async move {
                registry.register(sub).await;
                if remove {
                    registry.unregister(id).await;
                }
            }));
        }
        for handle in handles {
            assert!(handle.await.is_ok());
        }

        assert_eq!(registry.len().await, 25);
        let snapshot = registry.snapshot().await;
        for (id, _rx) in &kept {
            assert!(snapshot.iter().any(|s| s.id() == *id));
        }
    }

    #[tokio::test]
    async fn shutdown_drains_and_closes() {
        let registry = SubscriberRegistry::new();
        let (sub, _rx) = make_subscriber();
        let handle = sub.clone();

        registry.register(sub).await;
        registry.shutdown().await;

        assert!(registry.is_empty().await);
        assert_eq!(handle.state(), ConnectionState::Closed);
    }
}

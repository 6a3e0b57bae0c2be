//! Subscriber handle and connection liveness state machine.
//!
//! A [`Subscriber`] is the registry's view of one open WebSocket connection:
//! the sending half of that connection's outbound frame queue plus a shared
//! liveness state. The connection task owns the socket itself; the handle is
//! never a second copy of the channel.

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use tokio::sync::mpsc;

use super::SubscriberId;

/// Liveness of a subscriber's underlying channel.
///
/// States are ordered and transitions are monotonic: a subscriber only ever
/// moves forward through `Connecting → Open → Closing → Closed`, never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ConnectionState {
    /// Handshake accepted, not yet registered.
    Connecting = 0,
    /// Registered and eligible to receive broadcasts.
    Open = 1,
    /// Close observed, teardown in progress.
    Closing = 2,
    /// Channel permanently closed.
    Closed = 3,
}

impl ConnectionState {
    const fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Connecting,
            1 => Self::Open,
            2 => Self::Closing,
            _ => Self::Closed,
        }
    }
}

/// Handle to one connected subscriber.
///
/// Cheap to clone: clones share the same outbound queue sender and liveness
/// state, so a snapshot taken by the dispatcher observes state changes made
/// by the connection task.
#[derive(Debug, Clone)]
pub struct Subscriber {
    id: SubscriberId,
    outbound: mpsc::UnboundedSender<String>,
    state: Arc<AtomicU8>,
}

impl Subscriber {
    /// Creates a new subscriber handle in the `Connecting` state, wrapping
    /// the sending half of the connection's outbound frame queue.
    #[must_use]
    pub fn new(outbound: mpsc::UnboundedSender<String>) -> Self {
        Self {
            id: SubscriberId::new(),
            outbound,
            state: Arc::new(AtomicU8::new(ConnectionState::Connecting as u8)),
        }
    }

    /// Returns this subscriber's identifier.
    #[must_use]
    pub const fn id(&self) -> SubscriberId {
        self.id
    }

    /// Returns the current liveness state.
    #[must_use]
    pub fn state(&self) -> ConnectionState {
        ConnectionState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Returns `true` if the subscriber is eligible to receive broadcasts.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state() == ConnectionState::Open
    }

    /// Advances the liveness state.
    ///
    /// Monotonic: attempting to move to an earlier state is a no-op, so a
    /// concurrent `Closed` transition can never be overwritten by `Open`.
    pub fn transition(&self, next: ConnectionState) {
        self.state.fetch_max(next as u8, Ordering::AcqRel);
    }

    /// Queues a serialized frame for delivery on this subscriber's channel.
    ///
    /// Non-blocking. Returns `false` if the connection task is gone and the
    /// queue is closed; the caller is expected to unregister the subscriber.
    pub fn send(&self, frame: String) -> bool {
        self.outbound.send(frame).is_ok()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn make_subscriber() -> (Subscriber, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Subscriber::new(tx), rx)
    }

    #[test]
    fn starts_connecting() {
        let (sub, _rx) = make_subscriber();
        assert_eq!(sub.state(), ConnectionState::Connecting);
        assert!(!sub.is_open());
    }

    #[test]
    fn transitions_forward() {
        let (sub, _rx) = make_subscriber();
        sub.transition(ConnectionState::Open);
        assert!(sub.is_open());
        sub.transition(ConnectionState::Closing);
        assert_eq!(sub.state(), ConnectionState::Closing);
        sub.transition(ConnectionState::Closed);
        assert_eq!(sub.state(), ConnectionState::Closed);
    }

    #[test]
    fn never_regresses() {
        let (sub, _rx) = make_subscriber();
        sub.transition(ConnectionState::Closed);
        sub.transition(ConnectionState::Open);
        assert_eq!(sub.state(), ConnectionState::Closed);
    }

    #[test]
    fn clones_share_state() {
        let (sub, _rx) = make_subscriber();
        let other = sub.clone();
        sub.transition(ConnectionState::Open);
        assert!(other.is_open());
        assert_eq!(sub.id(), other.id());
    }

    #[test]
    fn send_delivers_to_queue() {
        let (sub, mut rx) = make_subscriber();
        assert!(sub.send("hello".to_string()));
        assert_eq!(rx.try_recv().ok(), Some("hello".to_string()));
    }

    #[test]
    fn send_fails_when_receiver_dropped() {
        let (sub, rx) = make_subscriber();
        drop(rx);
        assert!(!sub.send("hello".to_string()));
    }
}

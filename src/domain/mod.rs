//! Domain layer: subscriber identity, liveness, registry, and positions.
//!
//! This module contains the server-side domain model: subscriber identity,
//! the per-connection liveness state machine, the concurrent subscriber
//! registry, and the transient position value broadcast to clients.

pub mod position;
pub mod registry;
pub mod subscriber;
pub mod subscriber_id;

pub use position::PositionUpdate;
pub use registry::SubscriberRegistry;
pub use subscriber::{ConnectionState, Subscriber};
pub use subscriber_id::SubscriberId;

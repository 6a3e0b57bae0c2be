//! WebSocket layer: connection handling and wire messages.
//!
//! The upgrade endpoint at the server root provides the persistent channel
//! over which position updates are pushed to connected clients.

pub mod connection;
pub mod handler;
pub mod messages;

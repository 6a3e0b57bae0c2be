//! # transit-gateway
//!
//! REST API and WebSocket gateway for real-time transit position
//! broadcasting.
//!
//! Position updates arrive over HTTP and are fanned out to every connected
//! WebSocket subscriber as tagged JSON frames. Delivery is best-effort —
//! nothing is persisted or replayed, and a slow or dead peer never stalls
//! anyone else.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP, WebSocket)
//!     │
//!     ├── REST Handlers (api/)
//!     ├── WS Handler (ws/)
//!     │
//!     ├── BroadcastDispatcher (service/)
//!     │
//!     └── SubscriberRegistry (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod ws;

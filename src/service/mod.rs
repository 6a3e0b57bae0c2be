//! Service layer: broadcast dispatch and the query responder.

pub mod chat;
pub mod dispatcher;

pub use dispatcher::BroadcastDispatcher;

//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::domain::SubscriberRegistry;
use crate::service::BroadcastDispatcher;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Registry of currently connected subscribers.
    pub registry: Arc<SubscriberRegistry>,
    /// Dispatcher fanning updates out to subscribers.
    pub dispatcher: Arc<BroadcastDispatcher>,
}

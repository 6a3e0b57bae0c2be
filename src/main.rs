//! transit-gateway server entry point.
//!
//! Starts the Axum HTTP server with REST, WebSocket, and static file
//! endpoints.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use transit_gateway::api;
use transit_gateway::app_state::AppState;
use transit_gateway::config::GatewayConfig;
use transit_gateway::domain::SubscriberRegistry;
use transit_gateway::service::BroadcastDispatcher;
use transit_gateway::ws::handler::ws_handler;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = GatewayConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting transit-gateway");

    // Build domain layer
    let registry = Arc::new(SubscriberRegistry::new());

    // Build service layer
    let dispatcher = Arc::new(BroadcastDispatcher::new(Arc::clone(&registry)));

    // Build application state
    let app_state = AppState {
        registry: Arc::clone(&registry),
        dispatcher,
    };

    // Build router: REST endpoints, the upgrade endpoint at the root, and
    // static assets for every unmatched path.
    let app = Router::new()
        .merge(api::build_router())
        .route("/", get(ws_handler))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Tear down remaining connections before exit.
    registry.shutdown().await;

    Ok(())
}

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    tracing::info!("shutdown signal received");
}

//! Gateway configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use std::net::SocketAddr;

/// Default listening port when `PORT` is unset.
const DEFAULT_PORT: u16 = 3000;

/// Default static asset directory when `STATIC_DIR` is unset.
const DEFAULT_STATIC_DIR: &str = "public";

/// Top-level gateway configuration.
///
/// Loaded once at startup via [`GatewayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Directory of static assets served for unmatched paths.
    pub static_dir: String,
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// `PORT` defaults to 3000 when unset; `STATIC_DIR` defaults to
    /// `public`. Calls `dotenvy::dotenv().ok()` to optionally load a
    /// `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but cannot be parsed as a `u16`.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let port: u16 = match std::env::var("PORT") {
            Ok(raw) => raw.parse()?,
            Err(_) => DEFAULT_PORT,
        };

        let static_dir =
            std::env::var("STATIC_DIR").unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string());

        Ok(Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], port)),
            static_dir,
        })
    }
}

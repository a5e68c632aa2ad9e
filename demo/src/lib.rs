//! Allscreenshots demo server.
//!
//! A small web service showing the SDK in a real consumer: capture a
//! page on demand and hand the image back as an embeddable data URI,
//! plus a quota passthrough endpoint.
//!
//! # Endpoints
//!
//! - `GET /` — Service description
//! - `POST /api/screenshot` — Capture a page, respond with a data URI
//! - `GET /api/quota` — Current account quota

pub mod error;
pub mod handlers;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use allscreenshots_sdk::AllscreenshotsClient;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to.
    pub host: String,

    /// Port to bind to.
    pub port: u16,
}

impl ServerConfig {
    /// Creates a new server configuration.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// SDK client used by all handlers.
    pub client: AllscreenshotsClient,
}

impl AppState {
    /// Creates application state around an SDK client.
    #[must_use]
    pub fn new(client: AllscreenshotsClient) -> Self {
        Self { client }
    }
}

/// Builds the application router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/screenshot", post(handlers::screenshot))
        .route("/api/quota", get(handlers::quota))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// HTTP server.
pub struct Server {
    config: ServerConfig,
    state: AppState,
}

impl Server {
    /// Creates a new server.
    #[must_use]
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Binds the listener and serves requests until the process exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or the server
    /// fails while running.
    pub async fn run(self) -> std::io::Result<()> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!("listening on {}", addr);
        axum::serve(listener, router(self.state)).await
    }
}

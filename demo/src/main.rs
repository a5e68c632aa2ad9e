//! Allscreenshots demo server binary.
//!
//! Entry point for the capture-and-embed web service. All environment
//! reading happens here; the SDK only sees explicit configuration.

use std::env;

use allscreenshots_demo::{AppState, Server, ServerConfig};
use allscreenshots_sdk::{AllscreenshotsClient, ClientConfig};
use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,allscreenshots_demo=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let host = env::var("DEMO_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("DEMO_PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .context("DEMO_PORT must be a valid port number")?;
    let api_key =
        env::var("ALLSCREENSHOTS_API_KEY").context("ALLSCREENSHOTS_API_KEY must be set")?;

    let mut sdk_config = ClientConfig::default().with_api_key(api_key);
    if let Ok(base_url) = env::var("ALLSCREENSHOTS_BASE_URL") {
        sdk_config.base_url = base_url;
    }

    let client = AllscreenshotsClient::new(sdk_config)?;
    let config = ServerConfig::new(host, port);
    let state = AppState::new(client);

    tracing::info!(
        "Starting Allscreenshots demo server on {}:{}",
        config.host,
        config.port
    );

    let server = Server::new(config, state);
    server.run().await?;

    Ok(())
}

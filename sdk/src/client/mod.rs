//! HTTP client for the Allscreenshots REST API.
//!
//! This module provides a type-safe client split into API groups, all
//! sharing one connection pool and retry policy.
//!
//! # Example
//!
//! ```rust,ignore
//! use allscreenshots_sdk::client::AllscreenshotsClient;
//! use allscreenshots_sdk::types::ScreenshotRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AllscreenshotsClient::with_api_key("sk_live_...")?;
//!
//!     // Capture a page synchronously
//!     let request = ScreenshotRequest::new("https://example.com").with_full_page(true);
//!     let image = client.screenshots().capture(&request).await?;
//!     println!("Captured {} bytes", image.len());
//!
//!     // Check remaining quota
//!     let quota = client.usage().quota().await?;
//!     println!("Quota: {:?}", quota.screenshots);
//!
//!     Ok(())
//! }
//! ```

pub mod bulk;
pub mod compose;
pub mod config;
mod http;
pub mod schedules;
pub mod screenshots;
pub mod usage;

pub use bulk::BulkApi;
pub use compose::ComposeApi;
pub use config::{ClientConfig, RetryConfig};
pub use schedules::SchedulesApi;
pub use screenshots::ScreenshotsApi;
pub use usage::UsageApi;

use self::http::HttpTransport;
use crate::error::Error;

/// Client for the Allscreenshots REST API.
///
/// Cloning is cheap; all clones and API groups share the same
/// connection pool. The client is `Send + Sync` and safe to call from
/// many tasks concurrently.
#[derive(Debug, Clone)]
pub struct AllscreenshotsClient {
    transport: HttpTransport,
    screenshots: ScreenshotsApi,
    bulk: BulkApi,
    compose: ComposeApi,
    schedules: SchedulesApi,
    usage: UsageApi,
}

impl AllscreenshotsClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP
    /// client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let transport = HttpTransport::new(config)?;

        Ok(Self {
            screenshots: ScreenshotsApi::new(transport.clone()),
            bulk: BulkApi::new(transport.clone()),
            compose: ComposeApi::new(transport.clone()),
            schedules: SchedulesApi::new(transport.clone()),
            usage: UsageApi::new(transport.clone()),
            transport,
        })
    }

    /// Creates a new client for the production API with the given key.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::new(ClientConfig::default().with_api_key(api_key))
    }

    /// Creates a new client with the given base URL and no API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, Error> {
        Self::new(ClientConfig::new(base_url))
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        self.transport.config()
    }

    /// Returns the screenshots API group.
    #[must_use]
    pub fn screenshots(&self) -> &ScreenshotsApi {
        &self.screenshots
    }

    /// Returns the bulk API group.
    #[must_use]
    pub fn bulk(&self) -> &BulkApi {
        &self.bulk
    }

    /// Returns the compose API group.
    #[must_use]
    pub fn compose(&self) -> &ComposeApi {
        &self.compose
    }

    /// Returns the schedules API group.
    #[must_use]
    pub fn schedules(&self) -> &SchedulesApi {
        &self.schedules
    }

    /// Returns the usage API group.
    #[must_use]
    pub fn usage(&self) -> &UsageApi {
        &self.usage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_new() {
        let config = ClientConfig::new("https://api.example.com");
        let client = AllscreenshotsClient::new(config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_with_api_key() {
        let client = AllscreenshotsClient::with_api_key("test-key");
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_with_base_url() {
        let client = AllscreenshotsClient::with_base_url("https://api.example.com");
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_invalid_config() {
        let config = ClientConfig::new("");
        let client = AllscreenshotsClient::new(config);
        assert!(client.is_err());
    }

    #[test]
    fn test_client_config_access() {
        let config = ClientConfig::new("https://api.example.com").with_api_key("test-key");
        let client = AllscreenshotsClient::new(config).expect("client creation");
        assert_eq!(client.config().base_url, "https://api.example.com");
        assert_eq!(client.config().api_key, Some("test-key".to_string()));
    }
}

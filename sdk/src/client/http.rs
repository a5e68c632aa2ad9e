//! HTTP transport.
//!
//! Provides the shared request pipeline used by every API group:
//! header injection, retry with exponential backoff, and mapping of
//! failure responses onto [`Error`] variants.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use super::config::ClientConfig;
use crate::codec;
use crate::error::{Error, ErrorBody};

/// Shared HTTP transport for the Allscreenshots REST API.
///
/// Cloning is cheap; all clones share the same connection pool.
#[derive(Debug, Clone)]
pub(crate) struct HttpTransport {
    config: Arc<ClientConfig>,
    http: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport from the given configuration.
    pub(crate) fn new(config: ClientConfig) -> Result<Self, Error> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(ref api_key) = config.api_key {
            let mut value = HeaderValue::from_str(api_key).map_err(|_| {
                Error::InvalidConfig("api_key contains invalid header characters".to_string())
            })?;
            value.set_sensitive(true);
            headers.insert("X-API-Key", value);
        }

        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.read_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .default_headers(headers)
            .user_agent(&config.user_agent)
            .build()
            .map_err(Error::Transport)?;

        Ok(Self {
            config: Arc::new(config),
            http,
        })
    }

    /// Returns the transport configuration.
    pub(crate) fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Makes a GET request and decodes the JSON response.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path);
        let resp = self.send(|| self.http.get(&url)).await?;
        Self::read_json(resp).await
    }

    /// Makes a GET request and returns the raw response body.
    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, Error> {
        let url = self.url(path);
        let resp = self.send(|| self.http.get(&url)).await?;
        Self::read_bytes(resp).await
    }

    /// Makes a POST request with a JSON body and decodes the JSON response.
    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let payload = codec::encode(body)?;
        let resp = self
            .send(|| self.http.post(&url).body(payload.clone()))
            .await?;
        Self::read_json(resp).await
    }

    /// Makes a POST request with a JSON body and returns the raw response
    /// body.
    pub(crate) async fn post_bytes<B>(&self, path: &str, body: &B) -> Result<Vec<u8>, Error>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        let payload = codec::encode(body)?;
        let resp = self
            .send(|| self.http.post(&url).body(payload.clone()))
            .await?;
        Self::read_bytes(resp).await
    }

    /// Makes a bodyless POST request and decodes the JSON response.
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path);
        let resp = self.send(|| self.http.post(&url)).await?;
        Self::read_json(resp).await
    }

    /// Makes a PUT request with a JSON body and decodes the JSON response.
    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let payload = codec::encode(body)?;
        let resp = self
            .send(|| self.http.put(&url).body(payload.clone()))
            .await?;
        Self::read_json(resp).await
    }

    /// Makes a DELETE request, discarding any response body.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), Error> {
        let url = self.url(path);
        self.send(|| self.http.delete(&url)).await?;
        Ok(())
    }

    /// Sends a request with retry logic, returning the first successful
    /// response.
    ///
    /// Retries cover 5xx responses, 429 responses, and connect or timeout
    /// transport failures. Other failures surface immediately. A 429 with
    /// a parseable `Retry-After` header replaces the scheduled backoff
    /// delay for the following attempt.
    async fn send<F>(&self, request_fn: F) -> Result<reqwest::Response, Error>
    where
        F: Fn() -> reqwest::RequestBuilder,
    {
        let max_retries = self.config.retry.max_retries;
        let mut last_error: Option<Error> = None;

        for attempt in 0..=max_retries {
            if attempt > 0 {
                let delay = match last_error {
                    Some(Error::RateLimited {
                        retry_after: Some(secs),
                        ..
                    }) => Duration::from_secs(secs),
                    _ => self.config.retry.delay_for_attempt(attempt - 1),
                };
                debug!(attempt, delay_ms = delay.as_millis() as u64, "retrying request");
                tokio::time::sleep(delay).await;
            }

            match request_fn().send().await {
                Ok(resp) => {
                    let status = resp.status();

                    if status.is_success() {
                        return Ok(resp);
                    }

                    let err = Self::response_error(resp).await;
                    if !Self::is_retryable(&err) {
                        return Err(err);
                    }

                    warn!(status = status.as_u16(), attempt, "retryable API failure");
                    last_error = Some(err);
                }
                Err(e) => {
                    if !(e.is_timeout() || e.is_connect()) {
                        return Err(Error::Transport(e));
                    }

                    warn!(error = %e, attempt, "transient transport failure");
                    last_error = Some(Error::Transport(e));
                }
            }
        }

        Err(Self::exhausted(last_error, max_retries + 1))
    }

    fn is_retryable(err: &Error) -> bool {
        match err {
            Error::RateLimited { .. } => true,
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Maps the error kept from the final attempt onto the surfaced error.
    fn exhausted(last_error: Option<Error>, attempts: u32) -> Error {
        match last_error {
            Some(Error::Api {
                status,
                code,
                message,
            }) => Error::Service {
                status: Some(status),
                code: Some(code),
                message,
                attempts,
            },
            Some(Error::Transport(e)) => Error::Service {
                status: None,
                code: None,
                message: format!("network error: {e}"),
                attempts,
            },
            Some(err) => err,
            None => Error::Service {
                status: None,
                code: None,
                message: "request failed after retries".to_string(),
                attempts,
            },
        }
    }

    /// Maps a non-2xx response onto an [`Error`], consuming the body.
    async fn response_error(resp: reqwest::Response) -> Error {
        let status = resp.status().as_u16();
        let retry_after: Option<u64> = resp
            .headers()
            .get("Retry-After")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok());

        let body = resp.text().await.unwrap_or_default();
        let mut parsed: ErrorBody = serde_json::from_str(&body).unwrap_or_default();
        if let Some(details) = parsed.details.take() {
            debug!(?details, "API error details");
        }
        let code = parsed.code.take();
        let message = parsed
            .into_message()
            .unwrap_or_else(|| format!("API request failed with status {status}"));

        match status {
            400 => Error::Validation {
                code: code.unwrap_or_else(|| "VALIDATION_ERROR".to_string()),
                message,
            },
            401 => Error::Authentication {
                status,
                code: code.unwrap_or_else(|| "AUTHENTICATION_ERROR".to_string()),
                message,
            },
            403 => Error::Authentication {
                status,
                code: code.unwrap_or_else(|| "FORBIDDEN".to_string()),
                message,
            },
            429 => Error::RateLimited {
                message,
                retry_after,
            },
            _ => Error::Api {
                status,
                code: code.unwrap_or_else(|| "API_ERROR".to_string()),
                message,
            },
        }
    }

    async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let body = resp.bytes().await.map_err(Error::Transport)?;
        codec::decode(&body)
    }

    async fn read_bytes(resp: reqwest::Response) -> Result<Vec<u8>, Error> {
        Ok(resp.bytes().await.map_err(Error::Transport)?.to_vec())
    }
}

//! Usage reporting operations.

use super::http::HttpTransport;
use crate::error::Error;
use crate::types::{QuotaStatus, Usage};

/// Usage API group.
#[derive(Debug, Clone)]
pub struct UsageApi {
    transport: HttpTransport,
}

impl UsageApi {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Gets the full usage report for the account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn usage(&self) -> Result<Usage, Error> {
        self.transport.get_json("/v1/usage").await
    }

    /// Gets the current quota snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn quota(&self) -> Result<QuotaStatus, Error> {
        self.transport.get_json("/v1/usage/quota").await
    }
}

//! Bulk capture operations.
//!
//! Provides batched captures of many URLs under a single job.

use super::http::HttpTransport;
use crate::error::Error;
use crate::types::{BulkJob, BulkJobStatus, BulkJobSummary, BulkRequest};

/// Bulk API group.
#[derive(Debug, Clone)]
pub struct BulkApi {
    transport: HttpTransport,
}

impl BulkApi {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Creates a bulk capture job.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create(&self, request: &BulkRequest) -> Result<BulkJob, Error> {
        self.transport
            .post_json("/v1/screenshots/bulk", request)
            .await
    }

    /// Lists recent bulk jobs.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self) -> Result<Vec<BulkJobSummary>, Error> {
        self.transport.get_json("/v1/screenshots/bulk").await
    }

    /// Gets the status of a bulk job, including its per-URL jobs.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the job does not exist.
    pub async fn status(&self, bulk_id: &str) -> Result<BulkJobStatus, Error> {
        self.transport
            .get_json(&format!("/v1/screenshots/bulk/{bulk_id}"))
            .await
    }

    /// Cancels a bulk job and its remaining captures.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the job is already terminal.
    pub async fn cancel(&self, bulk_id: &str) -> Result<BulkJobSummary, Error> {
        self.transport
            .post_empty(&format!("/v1/screenshots/bulk/{bulk_id}/cancel"))
            .await
    }
}

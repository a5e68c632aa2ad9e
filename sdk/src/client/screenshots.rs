//! Screenshot operations.
//!
//! Provides single-page captures, both synchronous and job-based.

use super::http::HttpTransport;
use crate::error::Error;
use crate::types::{AsyncJobCreated, Job, ScreenshotRequest};

/// Screenshot API group.
#[derive(Debug, Clone)]
pub struct ScreenshotsApi {
    transport: HttpTransport,
}

impl ScreenshotsApi {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Captures a screenshot synchronously and returns the image bytes.
    ///
    /// The request blocks until the page has been rendered, so pair this
    /// with a generous read timeout for slow pages.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn capture(&self, request: &ScreenshotRequest) -> Result<Vec<u8>, Error> {
        self.transport.post_bytes("/v1/screenshots", request).await
    }

    /// Queues a screenshot job and returns immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn capture_async(
        &self,
        request: &ScreenshotRequest,
    ) -> Result<AsyncJobCreated, Error> {
        self.transport
            .post_json("/v1/screenshots/async", request)
            .await
    }

    /// Lists recent screenshot jobs.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_jobs(&self) -> Result<Vec<Job>, Error> {
        self.transport.get_json("/v1/screenshots/jobs").await
    }

    /// Gets a screenshot job by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the job does not exist.
    pub async fn get_job(&self, job_id: &str) -> Result<Job, Error> {
        self.transport
            .get_json(&format!("/v1/screenshots/jobs/{job_id}"))
            .await
    }

    /// Downloads the image produced by a completed job.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the job has no result yet.
    pub async fn get_job_result(&self, job_id: &str) -> Result<Vec<u8>, Error> {
        self.transport
            .get_bytes(&format!("/v1/screenshots/jobs/{job_id}/result"))
            .await
    }

    /// Cancels a queued or running job.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the job is already terminal.
    pub async fn cancel_job(&self, job_id: &str) -> Result<Job, Error> {
        self.transport
            .post_empty(&format!("/v1/screenshots/jobs/{job_id}/cancel"))
            .await
    }
}

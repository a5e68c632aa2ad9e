//! Bulk screenshot types.
//!
//! Provides the request and status models for capturing many URLs in a
//! single job.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::screenshot::{BlockLevel, ImageFormat, Viewport, WaitUntil};

/// Capture options applied to bulk URLs.
///
/// Used both as job-wide defaults and as per-URL overrides; per-URL values
/// win where both are set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkCaptureOptions {
    /// Browser viewport dimensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,

    /// Named device preset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,

    /// Output format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ImageFormat>,

    /// Capture the full scrollable page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_page: Option<bool>,

    /// Compression quality (1-100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<u32>,

    /// Extra delay before capture, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,

    /// CSS selector to wait for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_for: Option<String>,

    /// Page readiness event to wait for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_until: Option<WaitUntil>,

    /// Navigation timeout in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,

    /// Render with a dark color scheme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,

    /// Custom CSS injected before capture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,

    /// Block advertisements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_ads: Option<bool>,

    /// Dismiss cookie consent banners.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_cookie_banners: Option<bool>,

    /// Content blocking aggressiveness.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_level: Option<BlockLevel>,
}

impl BulkCaptureOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the viewport.
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = Some(viewport);
        self
    }

    /// Sets the device preset.
    #[must_use]
    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device = Some(device.into());
        self
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Enables or disables full-page capture.
    #[must_use]
    pub fn with_full_page(mut self, full_page: bool) -> Self {
        self.full_page = Some(full_page);
        self
    }

    /// Enables or disables dark mode rendering.
    #[must_use]
    pub fn with_dark_mode(mut self, dark_mode: bool) -> Self {
        self.dark_mode = Some(dark_mode);
        self
    }

    /// Sets the content blocking level.
    #[must_use]
    pub fn with_block_level(mut self, level: BlockLevel) -> Self {
        self.block_level = Some(level);
        self
    }
}

/// A single URL in a bulk request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkUrlEntry {
    /// Page URL to capture.
    pub url: String,

    /// Per-URL option overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<BulkCaptureOptions>,
}

/// Request to capture many URLs as one bulk job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkRequest {
    /// URLs to capture.
    pub urls: Vec<BulkUrlEntry>,

    /// Defaults applied to every URL without an override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<BulkCaptureOptions>,

    /// Webhook URL notified when the bulk job finishes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    /// Secret used to sign webhook deliveries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_secret: Option<String>,
}

impl BulkRequest {
    /// Creates an empty bulk request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a URL with the job-wide defaults.
    #[must_use]
    pub fn add_url(mut self, url: impl Into<String>) -> Self {
        self.urls.push(BulkUrlEntry {
            url: url.into(),
            options: None,
        });
        self
    }

    /// Adds a URL with per-URL option overrides.
    #[must_use]
    pub fn add_url_with_options(
        mut self,
        url: impl Into<String>,
        options: BulkCaptureOptions,
    ) -> Self {
        self.urls.push(BulkUrlEntry {
            url: url.into(),
            options: Some(options),
        });
        self
    }

    /// Sets the job-wide capture defaults.
    #[must_use]
    pub fn with_defaults(mut self, defaults: BulkCaptureOptions) -> Self {
        self.defaults = Some(defaults);
        self
    }

    /// Sets the webhook URL.
    #[must_use]
    pub fn with_webhook_url(mut self, url: impl Into<String>) -> Self {
        self.webhook_url = Some(url.into());
        self
    }

    /// Sets the webhook signing secret.
    #[must_use]
    pub fn with_webhook_secret(mut self, secret: impl Into<String>) -> Self {
        self.webhook_secret = Some(secret.into());
        self
    }
}

/// Per-URL state inside a bulk job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkItem {
    /// Item job identifier.
    pub id: String,

    /// URL being captured.
    pub url: String,

    /// Current status string.
    pub status: String,
}

/// Per-URL state with result details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkItemDetail {
    /// Item job identifier.
    pub id: String,

    /// URL being captured.
    pub url: String,

    /// Current status string.
    pub status: String,

    /// Download URL for the result image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_url: Option<String>,

    /// Storage URL, when persisted to a bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_url: Option<String>,

    /// Output format of the result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Result width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Result height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Result size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,

    /// Render duration in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render_time_ms: Option<u64>,

    /// Machine-readable error code, when failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,

    /// Human-readable error message, when failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// When the item was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the item finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Bulk job state returned on creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkJob {
    /// Bulk job identifier.
    pub id: String,

    /// Aggregate status string.
    pub status: String,

    /// Total number of URLs in the job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_jobs: Option<u32>,

    /// Number of completed items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_jobs: Option<u32>,

    /// Number of failed items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_jobs: Option<u32>,

    /// Completion percentage (0-100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u32>,

    /// Per-URL items.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub jobs: Vec<BulkItem>,

    /// When the bulk job was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the bulk job finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Detailed bulk job status with per-URL results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkJobStatus {
    /// Bulk job identifier.
    pub id: String,

    /// Aggregate status string.
    pub status: String,

    /// Total number of URLs in the job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_jobs: Option<u32>,

    /// Number of completed items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_jobs: Option<u32>,

    /// Number of failed items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_jobs: Option<u32>,

    /// Completion percentage (0-100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u32>,

    /// Per-URL items with result details.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub jobs: Vec<BulkItemDetail>,

    /// When the bulk job was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the bulk job finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Bulk job summary without per-URL items.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkJobSummary {
    /// Bulk job identifier.
    pub id: String,

    /// Aggregate status string.
    pub status: String,

    /// Total number of URLs in the job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_jobs: Option<u32>,

    /// Number of completed items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_jobs: Option<u32>,

    /// Number of failed items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_jobs: Option<u32>,

    /// Completion percentage (0-100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u32>,

    /// When the bulk job was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the bulk job finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulk_request_builder() {
        let request = BulkRequest::new()
            .add_url("https://example.com")
            .add_url_with_options(
                "https://github.com",
                BulkCaptureOptions::new().with_device("iPhone 14"),
            )
            .with_defaults(BulkCaptureOptions::new().with_device("Desktop HD"))
            .with_webhook_url("https://hooks.example.com/bulk");

        assert_eq!(request.urls.len(), 2);
        assert!(request.urls[0].options.is_none());
        assert_eq!(
            request.urls[1]
                .options
                .as_ref()
                .and_then(|o| o.device.as_deref()),
            Some("iPhone 14")
        );
        assert!(request.defaults.is_some());
    }

    #[test]
    fn test_bulk_request_serializes_camel_case() {
        let request = BulkRequest::new()
            .add_url("https://example.com")
            .with_defaults(
                BulkCaptureOptions::new()
                    .with_full_page(true)
                    .with_block_level(BlockLevel::Normal),
            );

        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["urls"][0]["url"], "https://example.com");
        assert_eq!(json["defaults"]["fullPage"], true);
        assert_eq!(json["defaults"]["blockLevel"], "normal");
        assert!(json.get("webhookUrl").is_none());
    }

    #[test]
    fn test_bulk_status_deserializes_api_payload() {
        let json = r#"{
            "id": "bulk-42",
            "status": "PROCESSING",
            "totalJobs": 3,
            "completedJobs": 1,
            "failedJobs": 0,
            "progress": 33,
            "jobs": [
                {"id": "job-1", "url": "https://example.com", "status": "COMPLETED",
                 "resultUrl": "/v1/screenshots/jobs/job-1/result",
                 "fileSize": 204800, "renderTimeMs": 5400},
                {"id": "job-2", "url": "https://github.com", "status": "PROCESSING"}
            ],
            "createdAt": "2024-01-15T10:30:00Z"
        }"#;

        let status: BulkJobStatus = serde_json::from_str(json).expect("deserialize");
        assert_eq!(status.id, "bulk-42");
        assert_eq!(status.total_jobs, Some(3));
        assert_eq!(status.progress, Some(33));
        assert_eq!(status.jobs.len(), 2);
        assert_eq!(status.jobs[0].file_size, Some(204_800));
        assert!(status.jobs[1].result_url.is_none());
    }

    #[test]
    fn test_bulk_request_round_trip() {
        let request = BulkRequest::new()
            .add_url("https://example.com")
            .add_url("https://github.com")
            .with_webhook_secret("s3cret");

        let json = serde_json::to_string(&request).expect("serialize");
        let parsed: BulkRequest = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, request);
    }
}

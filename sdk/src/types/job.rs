//! Async screenshot job types.
//!
//! Provides job status tracking for captures submitted through the async
//! endpoints.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle states of an async job.
///
/// Response payloads carry the status as a raw string so unrecognized
/// states never fail decoding; use [`Job::status_enum`] to classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JobStatus {
    /// Waiting for a worker.
    Queued,
    /// Capture in progress.
    Processing,
    /// Finished successfully; the result is available.
    Completed,
    /// Finished with an error.
    Failed,
    /// Cancelled before completion.
    Cancelled,
}

impl JobStatus {
    /// Parses a status string as reported by the API.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        match value.to_ascii_uppercase().as_str() {
            "QUEUED" => Some(Self::Queued),
            "PROCESSING" => Some(Self::Processing),
            "COMPLETED" => Some(Self::Completed),
            "FAILED" => Some(Self::Failed),
            "CANCELLED" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Returns true if the job can no longer change state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Cancelled)
    }

    /// Returns true if the job is still queued or running.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Queued | Self::Processing)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Queued => write!(f, "QUEUED"),
            Self::Processing => write!(f, "PROCESSING"),
            Self::Completed => write!(f, "COMPLETED"),
            Self::Failed => write!(f, "FAILED"),
            Self::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

/// Status snapshot of an async screenshot job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Job identifier.
    pub id: String,

    /// Current status string (see [`JobStatus`]).
    pub status: String,

    /// URL that was captured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Download URL for the result image, once completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_url: Option<String>,

    /// Machine-readable error code, when failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,

    /// Human-readable error message, when failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// When the job was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When processing started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    /// When the job reached a terminal state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,

    /// When the stored result expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    /// Additional server-provided metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, serde_json::Value>>,
}

impl Job {
    /// Classifies the raw status string, if recognized.
    #[must_use]
    pub fn status_enum(&self) -> Option<JobStatus> {
        JobStatus::from_value(&self.status)
    }

    /// Returns true if the job completed successfully.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status.eq_ignore_ascii_case("COMPLETED")
    }

    /// Returns true if the job failed.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.status.eq_ignore_ascii_case("FAILED")
    }

    /// Returns true if the job was cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.status.eq_ignore_ascii_case("CANCELLED")
    }

    /// Returns true if the job is being processed.
    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.status.eq_ignore_ascii_case("PROCESSING")
    }

    /// Returns true if the job is waiting for a worker.
    #[must_use]
    pub fn is_queued(&self) -> bool {
        self.status.eq_ignore_ascii_case("QUEUED")
    }

    /// Returns true if the job can no longer change state.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.is_completed() || self.is_failed() || self.is_cancelled()
    }
}

/// Acknowledgement returned when an async capture is accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsyncJobCreated {
    /// Job identifier.
    pub id: String,

    /// Initial status string (normally "QUEUED").
    pub status: String,

    /// Relative URL for polling the job status.
    pub status_url: String,

    /// When the job was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

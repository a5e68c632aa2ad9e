//! Schedule types.
//!
//! Provides models for recurring captures driven by cron expressions.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::screenshot::{BlockLevel, ImageFormat, Viewport, WaitUntil};

/// Lifecycle state of a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScheduleStatus {
    /// Executing on its cron expression.
    Active,
    /// Suspended until resumed.
    Paused,
    /// Past its end date and no longer executing.
    Expired,
}

impl ScheduleStatus {
    /// Parses a status string case-insensitively.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        match value.to_ascii_uppercase().as_str() {
            "ACTIVE" => Some(Self::Active),
            "PAUSED" => Some(Self::Paused),
            "EXPIRED" => Some(Self::Expired),
            _ => None,
        }
    }
}

impl fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "ACTIVE"),
            Self::Paused => write!(f, "PAUSED"),
            Self::Expired => write!(f, "EXPIRED"),
        }
    }
}

/// Capture options applied to every execution of a schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleOptions {
    /// Browser viewport dimensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,

    /// Named device preset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,

    /// Output image format.
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

    /// CSS selectors to hide before capture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_selectors: Option<Vec<String>>,

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

impl ScheduleOptions {
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
}

/// Request to create a recurring capture schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleRequest {
    /// Human-readable schedule name.
    pub name: String,

    /// Page URL captured on each execution.
    pub url: String,

    /// Cron expression controlling execution times.
    pub schedule: String,

    /// IANA timezone the cron expression is evaluated in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// Capture options for each execution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ScheduleOptions>,

    /// Webhook URL notified after each execution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    /// Secret used to sign webhook deliveries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_secret: Option<String>,

    /// Days to retain captured images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_days: Option<u32>,

    /// Do not execute before this instant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,

    /// Do not execute after this instant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
}

impl CreateScheduleRequest {
    /// Creates a schedule request for the given name, URL and cron expression.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        schedule: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            schedule: schedule.into(),
            timezone: None,
            options: None,
            webhook_url: None,
            webhook_secret: None,
            retention_days: None,
            starts_at: None,
            ends_at: None,
        }
    }

    /// Sets the timezone.
    #[must_use]
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    /// Sets the capture options.
    #[must_use]
    pub fn with_options(mut self, options: ScheduleOptions) -> Self {
        self.options = Some(options);
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

    /// Sets the retention period in days.
    #[must_use]
    pub fn with_retention_days(mut self, days: u32) -> Self {
        self.retention_days = Some(days);
        self
    }

    /// Sets the earliest execution instant.
    #[must_use]
    pub fn with_starts_at(mut self, starts_at: DateTime<Utc>) -> Self {
        self.starts_at = Some(starts_at);
        self
    }

    /// Sets the latest execution instant.
    #[must_use]
    pub fn with_ends_at(mut self, ends_at: DateTime<Utc>) -> Self {
        self.ends_at = Some(ends_at);
        self
    }
}

/// Partial update to an existing schedule. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScheduleRequest {
    /// New schedule name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New page URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// New cron expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,

    /// New timezone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// New capture options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ScheduleOptions>,

    /// New webhook URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    /// New webhook signing secret.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_secret: Option<String>,

    /// New retention period in days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_days: Option<u32>,

    /// New earliest execution instant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,

    /// New latest execution instant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
}

impl UpdateScheduleRequest {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the new name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the new URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the new cron expression.
    #[must_use]
    pub fn with_schedule(mut self, schedule: impl Into<String>) -> Self {
        self.schedule = Some(schedule.into());
        self
    }

    /// Sets the new timezone.
    #[must_use]
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    /// Sets the new capture options.
    #[must_use]
    pub fn with_options(mut self, options: ScheduleOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Sets the new webhook URL.
    #[must_use]
    pub fn with_webhook_url(mut self, url: impl Into<String>) -> Self {
        self.webhook_url = Some(url.into());
        self
    }

    /// Sets the new retention period in days.
    #[must_use]
    pub fn with_retention_days(mut self, days: u32) -> Self {
        self.retention_days = Some(days);
        self
    }
}

/// A recurring capture schedule as reported by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Schedule identifier.
    pub id: String,

    /// Current status string.
    pub status: String,

    /// Human-readable schedule name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Page URL captured on each execution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Cron expression controlling execution times.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,

    /// Human-readable rendering of the cron expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_description: Option<String>,

    /// IANA timezone the cron expression is evaluated in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// Capture options for each execution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<HashMap<String, serde_json::Value>>,

    /// Webhook URL notified after each execution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    /// Days captured images are retained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_days: Option<u32>,

    /// Earliest execution instant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,

    /// Latest execution instant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,

    /// When the schedule last executed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_executed_at: Option<DateTime<Utc>>,

    /// When the schedule executes next.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_execution_at: Option<DateTime<Utc>>,

    /// Total executions so far.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_count: Option<u32>,

    /// Successful executions so far.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_count: Option<u32>,

    /// Failed executions so far.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_count: Option<u32>,

    /// When the schedule was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the schedule was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Schedule {
    /// Parses the status string into a [`ScheduleStatus`], if recognized.
    #[must_use]
    pub fn status_enum(&self) -> Option<ScheduleStatus> {
        ScheduleStatus::from_value(&self.status)
    }

    /// Returns true if the schedule is executing on its cron expression.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case("ACTIVE")
    }

    /// Returns true if the schedule is suspended.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.status.eq_ignore_ascii_case("PAUSED")
    }
}

/// Page of schedules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleList {
    /// Schedules on this page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schedules: Vec<Schedule>,

    /// Total number of schedules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,
}

/// One past execution of a schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleExecution {
    /// Execution identifier.
    pub id: String,

    /// Execution status string.
    pub status: String,

    /// When the execution ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executed_at: Option<DateTime<Utc>>,

    /// Download URL for the captured image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_url: Option<String>,

    /// Storage URL, when persisted to a bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_url: Option<String>,

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

    /// When the stored result expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Execution history of a schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleHistory {
    /// Schedule identifier.
    pub schedule_id: String,

    /// Total executions across all pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_executions: Option<u64>,

    /// Executions on this page, newest first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub executions: Vec<ScheduleExecution>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_request() -> CreateScheduleRequest {
        CreateScheduleRequest::new("Daily homepage", "https://example.com", "0 9 * * *")
            .with_timezone("Europe/Madrid")
            .with_options(ScheduleOptions::new().with_full_page(true))
            .with_retention_days(30)
    }

    #[test]
    fn test_create_schedule_request_builder() {
        let request = create_test_request();
        assert_eq!(request.name, "Daily homepage");
        assert_eq!(request.schedule, "0 9 * * *");
        assert_eq!(request.retention_days, Some(30));
        assert_eq!(
            request.options.as_ref().and_then(|o| o.full_page),
            Some(true)
        );
    }

    #[test]
    fn test_create_schedule_request_serializes_camel_case() {
        let request = create_test_request().with_webhook_url("https://hooks.example.com/shot");
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["name"], "Daily homepage");
        assert_eq!(json["retentionDays"], 30);
        assert_eq!(json["webhookUrl"], "https://hooks.example.com/shot");
        assert_eq!(json["options"]["fullPage"], true);
        assert!(json.get("webhookSecret").is_none());
    }

    #[test]
    fn test_update_schedule_request_only_serializes_set_fields() {
        let update = UpdateScheduleRequest::new().with_schedule("0 */6 * * *");
        let json = serde_json::to_value(&update).expect("serialize");
        assert_eq!(json["schedule"], "0 */6 * * *");
        assert!(json.get("name").is_none());
        assert!(json.get("url").is_none());
    }

    #[test]
    fn test_schedule_deserializes_from_api_payload() {
        let json = r#"{
            "id": "sched_42",
            "name": "Daily homepage",
            "url": "https://example.com",
            "schedule": "0 9 * * *",
            "scheduleDescription": "At 09:00 every day",
            "timezone": "Europe/Madrid",
            "status": "active",
            "retentionDays": 30,
            "lastExecutedAt": "2024-01-15T09:00:02Z",
            "nextExecutionAt": "2024-01-16T09:00:00Z",
            "executionCount": 14,
            "successCount": 13,
            "failureCount": 1,
            "createdAt": "2024-01-01T12:00:00Z"
        }"#;

        let schedule: Schedule = serde_json::from_str(json).expect("deserialize");
        assert!(schedule.is_active());
        assert!(!schedule.is_paused());
        assert_eq!(schedule.status_enum(), Some(ScheduleStatus::Active));
        assert_eq!(schedule.execution_count, Some(14));
        assert!(schedule.next_execution_at.is_some());
    }

    #[test]
    fn test_schedule_status_from_value_is_case_insensitive() {
        assert_eq!(
            ScheduleStatus::from_value("paused"),
            Some(ScheduleStatus::Paused)
        );
        assert_eq!(
            ScheduleStatus::from_value("ACTIVE"),
            Some(ScheduleStatus::Active)
        );
        assert_eq!(ScheduleStatus::from_value("unknown"), None);
    }

    #[test]
    fn test_schedule_history_deserializes() {
        let json = r#"{
            "scheduleId": "sched_42",
            "totalExecutions": 2,
            "executions": [
                {
                    "id": "exec_2",
                    "status": "COMPLETED",
                    "executedAt": "2024-01-15T09:00:02Z",
                    "resultUrl": "https://cdn.example.com/exec_2.png",
                    "fileSize": 240133,
                    "renderTimeMs": 3100
                },
                {
                    "id": "exec_1",
                    "status": "FAILED",
                    "executedAt": "2024-01-14T09:00:01Z",
                    "errorCode": "NAVIGATION_TIMEOUT",
                    "errorMessage": "Page did not load within 30000ms"
                }
            ]
        }"#;

        let history: ScheduleHistory = serde_json::from_str(json).expect("deserialize");
        assert_eq!(history.schedule_id, "sched_42");
        assert_eq!(history.executions.len(), 2);
        assert_eq!(
            history.executions[1].error_code.as_deref(),
            Some("NAVIGATION_TIMEOUT")
        );
    }

    #[test]
    fn test_schedule_request_round_trip() {
        let request = create_test_request();
        let json = serde_json::to_string(&request).expect("serialize");
        let parsed: CreateScheduleRequest = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, request);
    }
}

//! Allscreenshots SDK - Rust client library for the Allscreenshots API.
//!
//! This crate provides a typed async client for capturing screenshots,
//! running bulk and compose jobs, managing recurring schedules, and
//! reading account usage.
//!
//! # Client
//!
//! - [`AllscreenshotsClient`] — Entry point, split into API groups
//! - [`ClientConfig`] / [`RetryConfig`] — Endpoint, timeouts and retry policy
//! - [`Error`] — Everything that can go wrong, as one enum
//!
//! # Request Types
//!
//! - [`ScreenshotRequest`] — Single-page capture options
//! - [`BulkRequest`] — Many URLs under one job
//! - [`ComposeRequest`] — Several captures stitched into one image
//! - [`CreateScheduleRequest`] — Recurring captures on a cron expression
//!
//! # Example
//!
//! ```rust,ignore
//! use allscreenshots_sdk::{AllscreenshotsClient, ScreenshotRequest};
//!
//! # async fn run() -> Result<(), allscreenshots_sdk::Error> {
//! let client = AllscreenshotsClient::with_api_key("sk_live_...")?;
//! let request = ScreenshotRequest::new("https://example.com").with_full_page(true);
//! let png = client.screenshots().capture(&request).await?;
//! # Ok(())
//! # }
//! ```
//!
//! The API key is only ever taken from [`ClientConfig`]; the SDK never
//! reads environment variables on its own.

pub mod client;
pub mod codec;
pub mod error;
pub mod types;

pub use client::{
    AllscreenshotsClient, BulkApi, ClientConfig, ComposeApi, RetryConfig, SchedulesApi,
    ScreenshotsApi, UsageApi,
};
pub use error::Error;
pub use types::{
    AsyncJobCreated, BulkJob, BulkJobStatus, BulkJobSummary, BulkRequest, ComposeJobStatus,
    ComposeRequest, ComposeResult, CreateScheduleRequest, Job, JobStatus, LayoutPreviewParams,
    QuotaStatus, Schedule, ScheduleHistory, ScheduleList, ScreenshotRequest,
    UpdateScheduleRequest, Usage,
};

//! Core types for the Allscreenshots SDK.
//!
//! This module provides all the request and response models used when
//! talking to the Allscreenshots API.

pub mod bulk;
pub mod compose;
pub mod job;
pub mod schedule;
pub mod screenshot;
pub mod usage;

pub use bulk::{
    BulkCaptureOptions, BulkItem, BulkItemDetail, BulkJob, BulkJobStatus, BulkJobSummary,
    BulkRequest, BulkUrlEntry,
};
pub use compose::{
    Alignment, BorderStyle, CaptureDefaults, CaptureItem, ComposeJobStatus, ComposeJobSummary,
    ComposeOutput, ComposeRequest, ComposeResult, LabelStyle, LayoutPreview, LayoutPreviewParams,
    LayoutType, Placement, ShadowStyle, Variant,
};
pub use job::{AsyncJobCreated, Job, JobStatus};
pub use schedule::{
    CreateScheduleRequest, Schedule, ScheduleExecution, ScheduleHistory, ScheduleList,
    ScheduleOptions, ScheduleStatus, UpdateScheduleRequest,
};
pub use screenshot::{
    BlockLevel, ImageFormat, ResponseType, ScreenshotRequest, Viewport, WaitUntil,
};
pub use usage::{BandwidthQuota, PeriodUsage, Quota, QuotaDetail, QuotaStatus, Totals, Usage};

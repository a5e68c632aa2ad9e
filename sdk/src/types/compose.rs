//! Compose types.
//!
//! Provides models for stitching multiple captures into a single image,
//! either from a list of URLs or from viewport variants of one URL.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::screenshot::{BlockLevel, ImageFormat, Viewport, WaitUntil};

/// Arrangement of captures on the output canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LayoutType {
    /// Uniform grid.
    Grid,
    /// Single row.
    Horizontal,
    /// Single column.
    Vertical,
    /// Column-packed masonry.
    Masonry,
    /// Mondrian-style asymmetric tiling.
    Mondrian,
    /// Balanced area partitioning.
    Partitioning,
    /// Server picks the best fit.
    Auto,
}

impl fmt::Display for LayoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid => write!(f, "GRID"),
            Self::Horizontal => write!(f, "HORIZONTAL"),
            Self::Vertical => write!(f, "VERTICAL"),
            Self::Masonry => write!(f, "MASONRY"),
            Self::Mondrian => write!(f, "MONDRIAN"),
            Self::Partitioning => write!(f, "PARTITIONING"),
            Self::Auto => write!(f, "AUTO"),
        }
    }
}

/// Vertical alignment of images within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Align to the top edge.
    Top,
    /// Center vertically.
    Center,
    /// Align to the bottom edge.
    Bottom,
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => write!(f, "top"),
            Self::Center => write!(f, "center"),
            Self::Bottom => write!(f, "bottom"),
        }
    }
}

/// A single capture inside a compose request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureItem {
    /// Page URL to capture.
    pub url: String,

    /// Caller-assigned identifier echoed in results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Label rendered onto the composition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Browser viewport dimensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,

    /// Named device preset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,

    /// Capture the full scrollable page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_page: Option<bool>,

    /// Render with a dark color scheme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,

    /// Extra delay before capture, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
}

impl CaptureItem {
    /// Creates a capture item for the given URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            id: None,
            label: None,
            viewport: None,
            device: None,
            full_page: None,
            dark_mode: None,
            delay: None,
        }
    }

    /// Sets the caller-assigned identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the rendered label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
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

    /// Sets the pre-capture delay in milliseconds.
    #[must_use]
    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay = Some(delay_ms);
        self
    }
}

/// One viewport variant of the shared URL in variants mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Caller-assigned identifier echoed in results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Label rendered onto the composition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Browser viewport dimensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,

    /// Named device preset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,

    /// Capture the full scrollable page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_page: Option<bool>,

    /// Render with a dark color scheme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,

    /// Extra delay before capture, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,

    /// Custom CSS injected before capture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,
}

impl Variant {
    /// Creates an empty variant.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the device preset.
    #[must_use]
    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device = Some(device.into());
        self
    }

    /// Sets the rendered label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the viewport.
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = Some(viewport);
        self
    }

    /// Enables or disables dark mode rendering.
    #[must_use]
    pub fn with_dark_mode(mut self, dark_mode: bool) -> Self {
        self.dark_mode = Some(dark_mode);
        self
    }
}

/// Default options applied to every capture in a compose request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureDefaults {
    /// Browser viewport dimensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,

    /// Named device preset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,

    /// Output format of individual captures.
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

impl CaptureDefaults {
    /// Creates empty defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the device preset.
    #[must_use]
    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device = Some(device.into());
        self
    }

    /// Sets the viewport.
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = Some(viewport);
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

/// Label rendering style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelStyle {
    /// Render labels at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Position relative to each image (e.g. "top", "bottom").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    /// Font size in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,

    /// Font color (CSS color string).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,

    /// Background color behind the label text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    /// Padding around the label text, in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,
}

/// Border drawn around each image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderStyle {
    /// Border width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Border color (CSS color string).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Corner radius in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<u32>,
}

/// Drop shadow drawn behind each image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowStyle {
    /// Render shadows at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Blur radius in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<u32>,

    /// Horizontal offset in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_x: Option<i32>,

    /// Vertical offset in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_y: Option<i32>,

    /// Shadow color (CSS color string).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Output canvas configuration for a composition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeOutput {
    /// Arrangement of captures on the canvas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutType>,

    /// Output format of the composition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ImageFormat>,

    /// Compression quality (1-100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<u32>,

    /// Column count for grid layouts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,

    /// Gap between images, in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<u32>,

    /// Padding around the canvas edge, in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,

    /// Canvas background (CSS color string).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,

    /// Vertical alignment within rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,

    /// Maximum canvas width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<u32>,

    /// Maximum canvas height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<u32>,

    /// Width each capture is scaled to before placement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_width: Option<u32>,

    /// Label rendering style.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<LabelStyle>,

    /// Border style.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<BorderStyle>,

    /// Shadow style.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<ShadowStyle>,
}

impl ComposeOutput {
    /// Creates an empty output configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the layout.
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutType) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Sets the column count.
    #[must_use]
    pub fn with_columns(mut self, columns: u32) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Sets the gap between images.
    #[must_use]
    pub fn with_spacing(mut self, spacing: u32) -> Self {
        self.spacing = Some(spacing);
        self
    }

    /// Sets the canvas background color.
    #[must_use]
    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }

    /// Sets the vertical alignment.
    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }
}

/// Request to compose multiple captures into one image.
///
/// Two modes: captures mode (explicit URL list) and variants mode (one
/// `url` rendered under several [`Variant`] configurations).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeRequest {
    /// Captures to compose (captures mode).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub captures: Vec<CaptureItem>,

    /// Shared URL (variants mode).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Viewport variants of the shared URL (variants mode).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<Variant>,

    /// Defaults applied to every capture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<CaptureDefaults>,

    /// Output canvas configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<ComposeOutput>,

    /// Process asynchronously and return a job instead of the image.
    #[serde(rename = "async", skip_serializing_if = "Option::is_none")]
    pub async_mode: Option<bool>,

    /// Webhook URL notified when an async composition finishes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    /// Secret used to sign webhook deliveries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_secret: Option<String>,

    /// Force captures mode even when `url` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captures_mode: Option<bool>,

    /// Force variants mode even when `captures` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants_mode: Option<bool>,
}

impl ComposeRequest {
    /// Creates an empty compose request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a capture (captures mode).
    #[must_use]
    pub fn add_capture(mut self, capture: CaptureItem) -> Self {
        self.captures.push(capture);
        self
    }

    /// Sets the shared URL (variants mode).
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Adds a variant (variants mode).
    #[must_use]
    pub fn add_variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }

    /// Sets the capture defaults.
    #[must_use]
    pub fn with_defaults(mut self, defaults: CaptureDefaults) -> Self {
        self.defaults = Some(defaults);
        self
    }

    /// Sets the output configuration.
    #[must_use]
    pub fn with_output(mut self, output: ComposeOutput) -> Self {
        self.output = Some(output);
        self
    }

    /// Sets async processing.
    #[must_use]
    pub fn with_async(mut self, async_mode: bool) -> Self {
        self.async_mode = Some(async_mode);
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

/// Result of a finished composition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeResult {
    /// Download URL for the composed image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Storage URL, when persisted to a bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_url: Option<String>,

    /// When the stored result expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    /// Canvas width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Canvas height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Output format of the composition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Result size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,

    /// Render duration in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render_time_ms: Option<u64>,

    /// Layout that was actually used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,

    /// Additional server-provided metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, serde_json::Value>>,
}

/// Status snapshot of an async compose job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeJobStatus {
    /// Job identifier.
    pub job_id: String,

    /// Current status string.
    pub status: String,

    /// Completion percentage (0-100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u32>,

    /// Total number of captures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_captures: Option<u32>,

    /// Number of finished captures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_captures: Option<u32>,

    /// Composition result, once completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ComposeResult>,

    /// Machine-readable error code, when failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,

    /// Human-readable error message, when failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// When the job was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the job reached a terminal state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl ComposeJobStatus {
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

    /// Returns true if the job can no longer change state.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.is_completed() || self.is_failed() || self.status.eq_ignore_ascii_case("CANCELLED")
    }
}

/// Compose job summary as returned by the job listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeJobSummary {
    /// Job identifier.
    pub job_id: String,

    /// Current status string.
    pub status: String,

    /// Total number of captures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_captures: Option<u32>,

    /// Number of finished captures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_captures: Option<u32>,

    /// Number of failed captures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_captures: Option<u32>,

    /// Completion percentage (0-100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u32>,

    /// Layout used for the composition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_type: Option<String>,

    /// When the job was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the job reached a terminal state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Parameters for a layout preview request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPreviewParams {
    /// Layout to preview.
    pub layout: LayoutType,

    /// Number of images to place.
    pub image_count: u32,

    /// Canvas width in pixels.
    pub canvas_width: Option<u32>,

    /// Canvas height in pixels.
    pub canvas_height: Option<u32>,

    /// Comma-separated aspect ratios, one per image (e.g. "16:9,4:3").
    pub aspect_ratios: Option<String>,
}

impl LayoutPreviewParams {
    /// Creates preview parameters for the given layout and image count.
    #[must_use]
    pub fn new(layout: LayoutType, image_count: u32) -> Self {
        Self {
            layout,
            image_count,
            canvas_width: None,
            canvas_height: None,
            aspect_ratios: None,
        }
    }

    /// Sets the canvas width.
    #[must_use]
    pub fn with_canvas_width(mut self, width: u32) -> Self {
        self.canvas_width = Some(width);
        self
    }

    /// Sets the canvas height.
    #[must_use]
    pub fn with_canvas_height(mut self, height: u32) -> Self {
        self.canvas_height = Some(height);
        self
    }

    /// Sets the per-image aspect ratios.
    #[must_use]
    pub fn with_aspect_ratios(mut self, ratios: impl Into<String>) -> Self {
        self.aspect_ratios = Some(ratios.into());
        self
    }
}

/// Computed placement of one image in a layout preview.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    /// Zero-based image index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,

    /// Left edge on the canvas, in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,

    /// Top edge on the canvas, in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,

    /// Placed width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Placed height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Label associated with the slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Dry-run layout computation without capturing anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPreview {
    /// Layout that was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,

    /// Layout actually chosen (differs for AUTO).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_layout: Option<String>,

    /// Canvas width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canvas_width: Option<u32>,

    /// Canvas height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canvas_height: Option<u32>,

    /// Computed image placements.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub placements: Vec<Placement>,

    /// Additional server-provided metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, serde_json::Value>>,
}

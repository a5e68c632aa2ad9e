//! Screenshot request types.
//!
//! Provides the capture request model and its option enums.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Output image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Portable Network Graphics.
    Png,
    /// JPEG.
    Jpeg,
    /// JPEG (short alias accepted by the API).
    Jpg,
    /// WebP.
    Webp,
    /// PDF document.
    Pdf,
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Png => write!(f, "png"),
            Self::Jpeg => write!(f, "jpeg"),
            Self::Jpg => write!(f, "jpg"),
            Self::Webp => write!(f, "webp"),
            Self::Pdf => write!(f, "pdf"),
        }
    }
}

/// Page readiness event to wait for before capturing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaitUntil {
    /// The load event fired.
    Load,
    /// The DOMContentLoaded event fired.
    DomContentLoaded,
    /// No network activity for a quiet period.
    NetworkIdle,
    /// Navigation committed.
    Commit,
}

impl fmt::Display for WaitUntil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load => write!(f, "load"),
            Self::DomContentLoaded => write!(f, "domcontentloaded"),
            Self::NetworkIdle => write!(f, "networkidle"),
            Self::Commit => write!(f, "commit"),
        }
    }
}

/// Content blocking aggressiveness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockLevel {
    /// No blocking.
    None,
    /// Light blocking (obvious ad frames only).
    Light,
    /// Normal blocking.
    Normal,
    /// Aggressive blocking.
    Pro,
    /// Aggressive blocking plus tracker removal.
    ProPlus,
    /// Maximum blocking.
    Ultimate,
}

impl fmt::Display for BlockLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Light => write!(f, "light"),
            Self::Normal => write!(f, "normal"),
            Self::Pro => write!(f, "pro"),
            Self::ProPlus => write!(f, "pro_plus"),
            Self::Ultimate => write!(f, "ultimate"),
        }
    }
}

/// How the API should deliver a synchronous capture result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResponseType {
    /// Raw image bytes in the response body.
    Binary,
    /// JSON envelope with a result URL.
    Json,
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary => write!(f, "BINARY"),
            Self::Json => write!(f, "JSON"),
        }
    }
}

/// Browser viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    /// Width in CSS pixels.
    pub width: u32,

    /// Height in CSS pixels.
    pub height: u32,

    /// Device scale factor (1 for standard displays, 2 for retina).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_scale_factor: Option<u32>,
}

impl Viewport {
    /// Creates a viewport with the given dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            device_scale_factor: None,
        }
    }

    /// Sets the device scale factor.
    #[must_use]
    pub const fn with_device_scale_factor(mut self, factor: u32) -> Self {
        self.device_scale_factor = Some(factor);
        self
    }
}

/// Request parameters for capturing a screenshot.
///
/// Only `url` is required; every other field falls back to a server-side
/// default when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenshotRequest {
    /// Page URL to capture.
    pub url: String,

    /// Browser viewport dimensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,

    /// Named device preset (e.g. "Desktop HD", "iPhone 14").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,

    /// Output format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ImageFormat>,

    /// Capture the full scrollable page instead of the viewport.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_page: Option<bool>,

    /// Compression quality (1-100, lossy formats only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<u32>,

    /// Extra delay before capture, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,

    /// CSS selector to wait for before capturing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_for: Option<String>,

    /// Page readiness event to wait for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_until: Option<WaitUntil>,

    /// Navigation timeout in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,

    /// Render the page with a dark color scheme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,

    /// Custom CSS injected before capture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,

    /// CSS selectors to hide before capture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_selectors: Option<Vec<String>>,

    /// Capture only the element matching this selector.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,

    /// Block advertisements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_ads: Option<bool>,

    /// Dismiss cookie consent banners.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_cookie_banners: Option<bool>,

    /// Content blocking aggressiveness.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_level: Option<BlockLevel>,

    /// Webhook URL notified when an async capture finishes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    /// Secret used to sign webhook deliveries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_secret: Option<String>,

    /// Delivery mode for synchronous captures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_type: Option<ResponseType>,
}

impl ScreenshotRequest {
    /// Creates a request for the given URL with all options unset.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            viewport: None,
            device: None,
            format: None,
            full_page: None,
            quality: None,
            delay: None,
            wait_for: None,
            wait_until: None,
            timeout: None,
            dark_mode: None,
            custom_css: None,
            hide_selectors: None,
            selector: None,
            block_ads: None,
            block_cookie_banners: None,
            block_level: None,
            webhook_url: None,
            webhook_secret: None,
            response_type: None,
        }
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

    /// Sets the compression quality.
    #[must_use]
    pub fn with_quality(mut self, quality: u32) -> Self {
        self.quality = Some(quality);
        self
    }

    /// Sets the pre-capture delay in milliseconds.
    #[must_use]
    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay = Some(delay_ms);
        self
    }

    /// Sets a CSS selector to wait for.
    #[must_use]
    pub fn with_wait_for(mut self, selector: impl Into<String>) -> Self {
        self.wait_for = Some(selector.into());
        self
    }

    /// Sets the readiness event to wait for.
    #[must_use]
    pub fn with_wait_until(mut self, wait_until: WaitUntil) -> Self {
        self.wait_until = Some(wait_until);
        self
    }

    /// Sets the navigation timeout in milliseconds.
    #[must_use]
    pub fn with_timeout(mut self, timeout_ms: u32) -> Self {
        self.timeout = Some(timeout_ms);
        self
    }

    /// Enables or disables dark mode rendering.
    #[must_use]
    pub fn with_dark_mode(mut self, dark_mode: bool) -> Self {
        self.dark_mode = Some(dark_mode);
        self
    }

    /// Sets custom CSS to inject.
    #[must_use]
    pub fn with_custom_css(mut self, css: impl Into<String>) -> Self {
        self.custom_css = Some(css.into());
        self
    }

    /// Sets selectors to hide before capture.
    #[must_use]
    pub fn with_hide_selectors(mut self, selectors: Vec<String>) -> Self {
        self.hide_selectors = Some(selectors);
        self
    }

    /// Restricts the capture to a single element.
    #[must_use]
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    /// Enables or disables ad blocking.
    #[must_use]
    pub fn with_block_ads(mut self, block_ads: bool) -> Self {
        self.block_ads = Some(block_ads);
        self
    }

    /// Enables or disables cookie banner dismissal.
    #[must_use]
    pub fn with_block_cookie_banners(mut self, block: bool) -> Self {
        self.block_cookie_banners = Some(block);
        self
    }

    /// Sets the content blocking level.
    #[must_use]
    pub fn with_block_level(mut self, level: BlockLevel) -> Self {
        self.block_level = Some(level);
        self
    }

    /// Sets the webhook URL for async completion notifications.
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

    /// Sets the delivery mode for synchronous captures.
    #[must_use]
    pub fn with_response_type(mut self, response_type: ResponseType) -> Self {
        self.response_type = Some(response_type);
        self
    }
}

//! Request handlers.

use axum::extract::State;
use axum::Json;
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, info};

use allscreenshots_sdk::types::{QuotaStatus, ScreenshotRequest};

use crate::error::AppError;
use crate::AppState;

/// Body of a capture request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureParams {
    /// Page URL to capture.
    pub url: String,

    /// Named device preset.
    pub device: Option<String>,

    /// Capture the full scrollable page.
    pub full_page: Option<bool>,
}

/// Body of a successful capture response.
#[derive(Debug, Serialize)]
pub struct CaptureResponse {
    /// Always true; failures use the error shape instead.
    pub success: bool,

    /// Captured image as a `data:` URI, ready for an `<img>` tag.
    pub image: String,
}

/// Describes the service and its endpoints.
pub async fn index() -> Json<Value> {
    Json(json!({
        "service": "allscreenshots-demo",
        "endpoints": ["POST /api/screenshot", "GET /api/quota"],
    }))
}

/// Captures a page and returns the image as an embeddable data URI.
pub async fn screenshot(
    State(state): State<AppState>,
    Json(params): Json<CaptureParams>,
) -> Result<Json<CaptureResponse>, AppError> {
    let mut request = ScreenshotRequest::new(params.url);
    if let Some(device) = params.device {
        request = request.with_device(device);
    }
    if let Some(full_page) = params.full_page {
        request = request.with_full_page(full_page);
    }

    debug!(url = %request.url, "capturing screenshot");
    let image = state.client.screenshots().capture(&request).await?;
    info!(bytes = image.len(), "screenshot captured");

    Ok(Json(CaptureResponse {
        success: true,
        image: format!("data:image/png;base64,{}", STANDARD.encode(&image)),
    }))
}

/// Returns the account quota snapshot.
pub async fn quota(State(state): State<AppState>) -> Result<Json<QuotaStatus>, AppError> {
    let quota = state.client.usage().quota().await?;
    Ok(Json(quota))
}

//! Compose operations.
//!
//! Provides multi-capture compositions and layout previews.

use super::http::HttpTransport;
use crate::error::Error;
use crate::types::{
    ComposeJobStatus, ComposeJobSummary, ComposeRequest, ComposeResult, LayoutPreview,
    LayoutPreviewParams,
};

/// Compose API group.
#[derive(Debug, Clone)]
pub struct ComposeApi {
    transport: HttpTransport,
}

impl ComposeApi {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Composes captures synchronously and returns the finished result.
    ///
    /// Any `async` flag on the request is overridden; use
    /// [`create_async`](Self::create_async) for job-based processing.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create(&self, request: &ComposeRequest) -> Result<ComposeResult, Error> {
        let mut request = request.clone();
        request.async_mode = Some(false);
        self.transport
            .post_json("/v1/screenshots/compose", &request)
            .await
    }

    /// Queues a compose job and returns its initial status.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_async(&self, request: &ComposeRequest) -> Result<ComposeJobStatus, Error> {
        let mut request = request.clone();
        request.async_mode = Some(true);
        self.transport
            .post_json("/v1/screenshots/compose", &request)
            .await
    }

    /// Computes layout placements without capturing anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn preview(&self, params: &LayoutPreviewParams) -> Result<LayoutPreview, Error> {
        self.transport.get_json(&preview_path(params)).await
    }

    /// Lists recent compose jobs.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_jobs(&self) -> Result<Vec<ComposeJobSummary>, Error> {
        self.transport
            .get_json("/v1/screenshots/compose/jobs")
            .await
    }

    /// Gets a compose job by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the job does not exist.
    pub async fn get_job(&self, job_id: &str) -> Result<ComposeJobStatus, Error> {
        self.transport
            .get_json(&format!("/v1/screenshots/compose/jobs/{job_id}"))
            .await
    }
}

fn preview_path(params: &LayoutPreviewParams) -> String {
    let mut query = vec![
        format!("layout={}", params.layout),
        format!("image_count={}", params.image_count),
    ];

    if let Some(width) = params.canvas_width {
        query.push(format!("canvas_width={width}"));
    }
    if let Some(height) = params.canvas_height {
        query.push(format!("canvas_height={height}"));
    }
    if let Some(ref ratios) = params.aspect_ratios {
        query.push(format!("aspect_ratios={ratios}"));
    }

    format!("/v1/screenshots/compose/preview?{}", query.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LayoutType;

    #[test]
    fn test_preview_path_required_params_only() {
        let params = LayoutPreviewParams::new(LayoutType::Grid, 4);
        assert_eq!(
            preview_path(&params),
            "/v1/screenshots/compose/preview?layout=GRID&image_count=4"
        );
    }

    #[test]
    fn test_preview_path_all_params() {
        let params = LayoutPreviewParams::new(LayoutType::Masonry, 3)
            .with_canvas_width(1920)
            .with_canvas_height(1080)
            .with_aspect_ratios("16:9,4:3,1:1");

        assert_eq!(
            preview_path(&params),
            "/v1/screenshots/compose/preview?layout=MASONRY&image_count=3\
             &canvas_width=1920&canvas_height=1080&aspect_ratios=16:9,4:3,1:1"
        );
    }
}

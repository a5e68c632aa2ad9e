use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use allscreenshots_sdk::types::{
    BulkRequest, CaptureItem, ComposeRequest, CreateScheduleRequest, LayoutPreviewParams,
    LayoutType, ScreenshotRequest, UpdateScheduleRequest,
};
use allscreenshots_sdk::{AllscreenshotsClient, ClientConfig, Error, RetryConfig};

const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

fn test_client(server: &MockServer) -> AllscreenshotsClient {
    let config = ClientConfig::new(server.uri()).with_api_key("test-key").with_retry(
        RetryConfig::new()
            .with_initial_delay_ms(10)
            .with_max_delay_ms(50),
    );
    AllscreenshotsClient::new(config).expect("client creation")
}

fn no_retry_client(server: &MockServer) -> AllscreenshotsClient {
    let config = ClientConfig::new(server.uri())
        .with_api_key("test-key")
        .with_retry(RetryConfig::none());
    AllscreenshotsClient::new(config).expect("client creation")
}

// --- request construction ---

#[tokio::test]
async fn test_capture_sends_key_and_body_and_returns_binary() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/screenshots"))
        .and(header("X-API-Key", "test-key"))
        .and(body_json(json!({"url": "https://example.com", "fullPage": true})))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PNG.to_vec(), "image/png"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let request = ScreenshotRequest::new("https://example.com").with_full_page(true);
    let image = client
        .screenshots()
        .capture(&request)
        .await
        .expect("capture");

    assert_eq!(image, PNG);
}

#[tokio::test]
async fn test_async_job_queue_poll_and_download() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/screenshots/async"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "job_1",
            "status": "QUEUED",
            "statusUrl": "/v1/screenshots/jobs/job_1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/screenshots/jobs/job_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "job_1",
            "status": "COMPLETED",
            "url": "https://example.com",
            "resultUrl": "/v1/screenshots/jobs/job_1/result",
            "createdAt": "2024-01-15T10:30:00Z",
            "completedAt": "2024-01-15T10:30:07Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/screenshots/jobs/job_1/result"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PNG.to_vec(), "image/png"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let request = ScreenshotRequest::new("https://example.com");

    let queued = client
        .screenshots()
        .capture_async(&request)
        .await
        .expect("queue job");
    assert_eq!(queued.id, "job_1");
    assert_eq!(queued.status_url, "/v1/screenshots/jobs/job_1");

    let job = client
        .screenshots()
        .get_job(&queued.id)
        .await
        .expect("poll job");
    assert!(job.is_completed());
    assert!(job.is_terminal());

    let image = client
        .screenshots()
        .get_job_result(&queued.id)
        .await
        .expect("download result");
    assert_eq!(image, PNG);
}

#[tokio::test]
async fn test_cancel_job_posts_empty_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/screenshots/jobs/job_9/cancel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "job_9",
            "status": "CANCELLED"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let job = client
        .screenshots()
        .cancel_job("job_9")
        .await
        .expect("cancel job");

    assert!(job.is_cancelled());
}

// --- retry behavior ---

#[tokio::test]
async fn test_capture_retries_server_errors_until_success() {
    let server = MockServer::start().await;

    // First three requests fail, the fourth falls through to the 200 mock.
    Mock::given(method("POST"))
        .and(path("/v1/screenshots"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "Renderer crashed"
        })))
        .up_to_n_times(3)
        .expect(3)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/screenshots"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PNG.to_vec(), "image/png"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let request = ScreenshotRequest::new("https://example.com");
    let image = client
        .screenshots()
        .capture(&request)
        .await
        .expect("capture after retries");

    assert_eq!(image, PNG);
}

#[tokio::test]
async fn test_persistent_server_errors_surface_service_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/screenshots"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "Renderer crashed",
            "code": "RENDERER_CRASH"
        })))
        .expect(4)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let request = ScreenshotRequest::new("https://example.com");
    let err = client
        .screenshots()
        .capture(&request)
        .await
        .expect_err("capture should fail");

    match err {
        Error::Service {
            status,
            code,
            attempts,
            ..
        } => {
            assert_eq!(status, Some(500));
            assert_eq!(code.as_deref(), Some("RENDERER_CRASH"));
            assert_eq!(attempts, 4);
        }
        other => panic!("expected Service, got {other:?}"),
    }
}

#[tokio::test]
async fn test_not_found_fails_after_single_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/screenshots/jobs/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Job not found",
            "code": "JOB_NOT_FOUND"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .screenshots()
        .get_job("missing")
        .await
        .expect_err("get_job should fail");

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.error_code(), Some("JOB_NOT_FOUND"));
    assert!(matches!(err, Error::Api { .. }));
}

#[tokio::test]
async fn test_validation_error_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/screenshots"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "url is required",
            "code": "VALIDATION_ERROR"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let request = ScreenshotRequest::new("");
    let err = client
        .screenshots()
        .capture(&request)
        .await
        .expect_err("capture should fail");

    match err {
        Error::Validation { code, message } => {
            assert_eq!(code, "VALIDATION_ERROR");
            assert_eq!(message, "url is required");
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn test_authentication_errors_map_by_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/usage"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Invalid API key"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/usage/quota"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "message": "Plan does not include quota reporting"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);

    let err = client.usage().usage().await.expect_err("usage should fail");
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.error_code(), Some("AUTHENTICATION_ERROR"));

    let err = client.usage().quota().await.expect_err("quota should fail");
    assert_eq!(err.status(), Some(403));
    assert_eq!(err.error_code(), Some("FORBIDDEN"));
}

#[tokio::test]
async fn test_rate_limit_retries_then_surfaces_retry_after() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/screenshots"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "0")
                .set_body_json(json!({"message": "Too many requests"})),
        )
        .expect(4)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let request = ScreenshotRequest::new("https://example.com");
    let err = client
        .screenshots()
        .capture(&request)
        .await
        .expect_err("capture should fail");

    assert_eq!(err.retry_after(), Some(0));
    assert!(matches!(err, Error::RateLimited { .. }));
}

#[tokio::test]
async fn test_rate_limit_without_retries_surfaces_immediately() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/screenshots"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "message": "Too many requests"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = no_retry_client(&server);
    let request = ScreenshotRequest::new("https://example.com");
    let err = client
        .screenshots()
        .capture(&request)
        .await
        .expect_err("capture should fail");

    assert!(matches!(
        err,
        Error::RateLimited {
            retry_after: None,
            ..
        }
    ));
}

#[tokio::test]
async fn test_malformed_json_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/usage"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            b"<html>not json</html>".to_vec(),
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.usage().usage().await.expect_err("usage should fail");

    assert!(matches!(err, Error::Deserialization(_)));
}

// --- concurrency and cancellation ---

#[tokio::test]
async fn test_concurrent_captures_all_succeed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/screenshots"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PNG.to_vec(), "image/png"))
        .expect(8)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut handles = Vec::new();

    for i in 0..8 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            let request = ScreenshotRequest::new(format!("https://example.com/page/{i}"));
            client.screenshots().capture(&request).await
        }));
    }

    for handle in handles {
        let image = handle.await.expect("task join").expect("capture");
        assert_eq!(image, PNG);
    }
}

#[tokio::test]
async fn test_aborted_request_leaves_client_usable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/usage"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(30))
                .set_body_json(json!({"tier": "pro"})),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/usage/quota"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tier": "pro"})))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::new(server.uri())
        .with_api_key("test-key")
        .with_pool_max_idle_per_host(1)
        .with_retry(RetryConfig::none());
    let client = AllscreenshotsClient::new(config).expect("client creation");

    let slow = client.clone();
    let handle = tokio::spawn(async move { slow.usage().usage().await });
    tokio::time::sleep(Duration::from_millis(50)).await;
    handle.abort();

    let join_err = handle.await.expect_err("task should be aborted");
    assert!(join_err.is_cancelled());

    // The shared pool is still healthy after the drop.
    let quota = client.usage().quota().await.expect("quota after abort");
    assert_eq!(quota.tier.as_deref(), Some("pro"));
}

// --- bulk ---

#[tokio::test]
async fn test_bulk_create_and_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/screenshots/bulk"))
        .and(body_partial_json(json!({
            "urls": [{"url": "https://example.com"}, {"url": "https://example.org"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "bulk_1",
            "status": "QUEUED",
            "totalJobs": 2,
            "createdAt": "2024-01-15T10:30:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/screenshots/bulk/bulk_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "bulk_1",
            "status": "PROCESSING",
            "totalJobs": 2,
            "completedJobs": 1,
            "progress": 50,
            "jobs": [
                {
                    "id": "job_a",
                    "url": "https://example.com",
                    "status": "COMPLETED",
                    "resultUrl": "https://cdn.example.com/job_a.png",
                    "fileSize": 204800
                },
                {"id": "job_b", "url": "https://example.org", "status": "PROCESSING"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let request = BulkRequest::new()
        .add_url("https://example.com")
        .add_url("https://example.org");

    let bulk = client.bulk().create(&request).await.expect("create bulk");
    assert_eq!(bulk.id, "bulk_1");
    assert_eq!(bulk.total_jobs, Some(2));

    let status = client.bulk().status(&bulk.id).await.expect("bulk status");
    assert_eq!(status.progress, Some(50));
    assert_eq!(status.jobs.len(), 2);
    assert_eq!(status.jobs[0].file_size, Some(204800));
}

// --- compose ---

#[tokio::test]
async fn test_compose_create_forces_synchronous_flag() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/screenshots/compose"))
        .and(body_partial_json(json!({"async": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "url": "https://cdn.example.com/compose_1.png",
            "width": 2400,
            "height": 1350,
            "layout": "GRID"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let request = ComposeRequest::new()
        .add_capture(CaptureItem::new("https://example.com"))
        .add_capture(CaptureItem::new("https://example.org"));

    let result = client.compose().create(&request).await.expect("compose");
    assert_eq!(result.width, Some(2400));
    assert_eq!(result.layout.as_deref(), Some("GRID"));
}

#[tokio::test]
async fn test_compose_create_async_forces_async_flag() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/screenshots/compose"))
        .and(body_partial_json(json!({"async": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jobId": "cmp_1",
            "status": "QUEUED",
            "totalCaptures": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let request = ComposeRequest::new()
        .add_capture(CaptureItem::new("https://example.com"))
        .add_capture(CaptureItem::new("https://example.org"));

    let job = client
        .compose()
        .create_async(&request)
        .await
        .expect("compose async");
    assert_eq!(job.job_id, "cmp_1");
    assert!(!job.is_terminal());
}

#[tokio::test]
async fn test_compose_preview_builds_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/screenshots/compose/preview"))
        .and(query_param("layout", "GRID"))
        .and(query_param("image_count", "4"))
        .and(query_param("canvas_width", "1920"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "layout": "GRID",
            "resolvedLayout": "GRID",
            "canvasWidth": 1920,
            "canvasHeight": 1080,
            "placements": [
                {"index": 0, "x": 0, "y": 0, "width": 960, "height": 540},
                {"index": 1, "x": 960, "y": 0, "width": 960, "height": 540},
                {"index": 2, "x": 0, "y": 540, "width": 960, "height": 540},
                {"index": 3, "x": 960, "y": 540, "width": 960, "height": 540}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let params = LayoutPreviewParams::new(LayoutType::Grid, 4).with_canvas_width(1920);
    let preview = client.compose().preview(&params).await.expect("preview");

    assert_eq!(preview.placements.len(), 4);
    assert_eq!(preview.canvas_width, Some(1920));
}

// --- schedules ---

#[tokio::test]
async fn test_schedule_lifecycle() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/schedules"))
        .and(body_partial_json(json!({
            "name": "Daily homepage",
            "schedule": "0 9 * * *"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "sched_1",
            "status": "active",
            "name": "Daily homepage"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/v1/schedules/sched_1"))
        .and(body_json(json!({"schedule": "0 */6 * * *"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "sched_1",
            "status": "active",
            "schedule": "0 */6 * * *"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/schedules/sched_1/pause"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "sched_1",
            "status": "paused"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v1/schedules/sched_1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);

    let created = client
        .schedules()
        .create(&CreateScheduleRequest::new(
            "Daily homepage",
            "https://example.com",
            "0 9 * * *",
        ))
        .await
        .expect("create schedule");
    assert!(created.is_active());

    let updated = client
        .schedules()
        .update(
            &created.id,
            &UpdateScheduleRequest::new().with_schedule("0 */6 * * *"),
        )
        .await
        .expect("update schedule");
    assert_eq!(updated.schedule.as_deref(), Some("0 */6 * * *"));

    let paused = client
        .schedules()
        .pause(&created.id)
        .await
        .expect("pause schedule");
    assert!(paused.is_paused());

    client
        .schedules()
        .delete(&created.id)
        .await
        .expect("delete schedule");
}

#[tokio::test]
async fn test_schedule_history_passes_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/schedules/sched_1/history"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "scheduleId": "sched_1",
            "totalExecutions": 14,
            "executions": [
                {"id": "exec_14", "status": "COMPLETED", "executedAt": "2024-01-15T09:00:02Z"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let history = client
        .schedules()
        .history("sched_1", Some(5))
        .await
        .expect("history");

    assert_eq!(history.total_executions, Some(14));
    assert_eq!(history.executions.len(), 1);
}

// --- usage ---

#[tokio::test]
async fn test_usage_and_quota() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/usage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tier": "pro",
            "currentPeriod": {"screenshotsCount": 1250},
            "quota": {"screenshots": {"limit": 5000, "used": 1250, "remaining": 3750}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/usage/quota"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tier": "pro",
            "screenshots": {"limit": 5000, "used": 1250, "remaining": 3750, "percentUsed": 25},
            "periodEnds": "2024-02-01"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);

    let usage = client.usage().usage().await.expect("usage");
    assert_eq!(usage.tier.as_deref(), Some("pro"));
    assert_eq!(
        usage
            .current_period
            .as_ref()
            .and_then(|p| p.screenshots_count),
        Some(1250)
    );

    let quota = client.usage().quota().await.expect("quota");
    assert_eq!(quota.period_ends.as_deref(), Some("2024-02-01"));
    assert_eq!(
        quota.screenshots.as_ref().and_then(|s| s.percent_used),
        Some(25)
    );
}

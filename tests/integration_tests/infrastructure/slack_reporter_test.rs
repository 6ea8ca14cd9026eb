use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use serde_json::{Value, json};

use pdfqa::application::ports::{Reporter, ReporterError};
use pdfqa::infrastructure::messaging::SlackReporter;

use crate::support::start_mock_server;

fn reporter(base_url: &str, timeout: Duration) -> SlackReporter {
    SlackReporter::new(
        "xoxb-test".to_string(),
        "#qa".to_string(),
        base_url,
        timeout,
    )
}

fn replying(body: Value) -> Router {
    Router::new().route(
        "/chat.postMessage",
        post(move || {
            let body = body.clone();
            async move { Json(body) }
        }),
    )
}

#[tokio::test]
async fn given_ok_response_when_posting_then_sends_channel_text_and_token() {
    let seen: Arc<Mutex<Vec<(String, Value)>>> = Arc::default();
    let recorder = Arc::clone(&seen);
    let app = Router::new().route(
        "/chat.postMessage",
        post(move |headers: HeaderMap, Json(body): Json<Value>| {
            let recorder = Arc::clone(&recorder);
            async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                recorder.lock().unwrap().push((auth, body));
                Json(json!({ "ok": true, "ts": "1700000000.000100" }))
            }
        }),
    );
    let (base_url, shutdown_tx) = start_mock_server(app).await;

    reporter(&base_url, Duration::from_secs(5))
        .post("Questions and Answers:")
        .await
        .unwrap();

    let requests = seen.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0, "Bearer xoxb-test");
    assert_eq!(requests[0].1["channel"], "#qa");
    assert_eq!(requests[0].1["text"], "Questions and Answers:");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_not_ok_response_when_posting_then_returns_rejected_with_slack_error() {
    let (base_url, shutdown_tx) =
        start_mock_server(replying(json!({ "ok": false, "error": "channel_not_found" }))).await;

    let result = reporter(&base_url, Duration::from_secs(5)).post("hi").await;

    assert!(matches!(result, Err(ReporterError::Rejected(e)) if e == "channel_not_found"));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_not_ok_without_error_when_posting_then_reports_unknown_error() {
    let (base_url, shutdown_tx) = start_mock_server(replying(json!({ "ok": false }))).await;

    let result = reporter(&base_url, Duration::from_secs(5)).post("hi").await;

    assert!(matches!(result, Err(ReporterError::Rejected(e)) if e == "unknown_error"));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_http_error_when_posting_then_returns_request_failed() {
    let app = Router::new().route(
        "/chat.postMessage",
        post(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    );
    let (base_url, shutdown_tx) = start_mock_server(app).await;

    let result = reporter(&base_url, Duration::from_secs(5)).post("hi").await;

    assert!(matches!(result, Err(ReporterError::RequestFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_slow_server_when_posting_then_returns_timeout() {
    let app = Router::new().route(
        "/chat.postMessage",
        post(|| async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Json(json!({ "ok": true }))
        }),
    );
    let (base_url, shutdown_tx) = start_mock_server(app).await;

    let result = reporter(&base_url, Duration::from_millis(50)).post("hi").await;

    assert!(matches!(result, Err(ReporterError::Timeout(_))));
    shutdown_tx.send(()).ok();
}

use super::headers::browser_headers;
use super::utils::{describe_status, join_url};
use super::{Fetcher, ReqwestFetcher};
use crate::error::ApiError;
use crate::services::log::LogLevel;
use crate::testing::RecordingLog;
use axum::extract::RawQuery;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

/// Local stand-in for the upstream site. Returns its origin.
async fn spawn_upstream() -> String {
    let app = Router::new()
        .route("/home", get(|| async { "<html><body>home</body></html>" }))
        .route(
            "/echo-headers",
            get(|headers: HeaderMap| async move {
                let header = |k: &str| {
                    headers
                        .get(k)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("")
                        .to_string()
                };
                format!(
                    "{}|{}|{}|{}",
                    header("user-agent"),
                    header("accept"),
                    header("accept-language"),
                    header("referer")
                )
            }),
        )
        .route(
            "/search",
            get(|RawQuery(q): RawQuery| async move { q.unwrap_or_default() }),
        )
        .route(
            "/broken",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down for maintenance") }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[test]
fn browser_headers_impersonate_desktop() {
    let headers = browser_headers("https://upstream.example");
    assert!(headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ua| ua.starts_with("Mozilla/5.0 (Windows NT 10.0")));
    assert!(headers.contains_key("accept"));
    assert!(headers.contains_key("accept-language"));
    assert_eq!(
        headers.get("referer").and_then(|v| v.to_str().ok()),
        Some("https://upstream.example/")
    );
    assert_eq!(headers.len(), 4);
}

#[test]
fn referer_does_not_double_slash() {
    let headers = browser_headers("https://upstream.example/");
    assert_eq!(
        headers.get("referer").and_then(|v| v.to_str().ok()),
        Some("https://upstream.example/")
    );
}

#[test]
fn join_url_handles_slashes() {
    assert_eq!(join_url("https://a.to", "/home"), "https://a.to/home");
    assert_eq!(join_url("https://a.to/", "/home"), "https://a.to/home");
    assert_eq!(join_url("https://a.to", "one-piece-100"), "https://a.to/one-piece-100");
}

#[test]
fn describe_status_names_common_failures() {
    let msg = describe_status(reqwest::StatusCode::NOT_FOUND);
    assert!(msg.contains("404"));
    assert!(msg.contains("not found"));
    assert!(describe_status(reqwest::StatusCode::BAD_GATEWAY).contains("server error"));
    assert!(describe_status(reqwest::StatusCode::TOO_MANY_REQUESTS).contains("rate limited"));
}

#[tokio::test]
async fn fetch_returns_body_on_success() {
    let origin = spawn_upstream().await;
    let log = Arc::new(RecordingLog::default());
    let fetcher = ReqwestFetcher::new(&origin, log.clone()).unwrap();

    let html = fetcher.fetch("/home").await.unwrap();
    assert!(html.contains("home"));
    assert!(log.entries().is_empty());
}

#[tokio::test]
async fn fetch_sends_browser_headers() {
    let origin = spawn_upstream().await;
    let fetcher = ReqwestFetcher::new(&origin, Arc::new(RecordingLog::default())).unwrap();

    let echoed = fetcher.fetch("/echo-headers").await.unwrap();
    let parts: Vec<&str> = echoed.split('|').collect();
    assert_eq!(parts.len(), 4);
    assert!(parts[0].contains("Chrome"));
    assert!(parts[1].starts_with("text/html"));
    assert_eq!(parts[2], "en-US,en;q=0.9");
    assert_eq!(parts[3], format!("{origin}/"));
}

#[tokio::test]
async fn fetch_passes_encoded_query_through() {
    let origin = spawn_upstream().await;
    let fetcher = ReqwestFetcher::new(&origin, Arc::new(RecordingLog::default())).unwrap();

    let echoed = fetcher
        .fetch("/search?keyword=one%20piece&page=2")
        .await
        .unwrap();
    assert_eq!(echoed, "keyword=one%20piece&page=2");
}

#[tokio::test]
async fn non_success_status_is_transport_error_and_logged() {
    let origin = spawn_upstream().await;
    let log = Arc::new(RecordingLog::default());
    let fetcher = ReqwestFetcher::new(&origin, log.clone()).unwrap();

    let err = fetcher.fetch("/broken").await.unwrap_err();
    match &err {
        ApiError::Transport { status, message } => {
            assert_eq!(*status, Some(503));
            assert!(message.contains("503"));
        }
        other => panic!("expected transport error, got {other:?}"),
    }

    let entries = log.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].level, LogLevel::Error);
    assert_eq!(entries[0].event, "fetch");
}

#[tokio::test]
async fn unknown_path_is_transport_error() {
    let origin = spawn_upstream().await;
    let fetcher = ReqwestFetcher::new(&origin, Arc::new(RecordingLog::default())).unwrap();

    let err = fetcher.fetch("/no-such-title").await.unwrap_err();
    assert!(matches!(err, ApiError::Transport { status: Some(404), .. }));
}

#[tokio::test]
async fn unreachable_upstream_is_transport_error_without_status() {
    let log = Arc::new(RecordingLog::default());
    let fetcher = ReqwestFetcher::new("http://127.0.0.1:1", log.clone()).unwrap();

    let err = fetcher.fetch("/home").await.unwrap_err();
    match &err {
        ApiError::Transport { status, message } => {
            assert!(status.is_none());
            assert!(!message.is_empty());
        }
        other => panic!("expected transport error, got {other:?}"),
    }
    assert_eq!(log.entries().len(), 1);
}

#[tokio::test]
async fn origin_with_trailing_slash_joins_cleanly() {
    let origin = spawn_upstream().await;
    let fetcher =
        ReqwestFetcher::new(&format!("{origin}/"), Arc::new(RecordingLog::default())).unwrap();

    assert_eq!(fetcher.name(), "reqwest");
    let echoed = fetcher.fetch("/echo-headers").await.unwrap();
    assert!(echoed.ends_with(&format!("|{origin}/")));
}

mod common;

use std::sync::Arc;

use apod_proxy::config::environment::EnvironmentConfig;
use apod_proxy::routes::create_app;
use apod_proxy::state::AppState;
use apod_proxy::utils::clock::ManualClock;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use common::{date, MockSource, Scripted};
use tower::ServiceExt;

// Función helper para crear la app de test
fn create_test_app() -> (Router, Arc<MockSource>) {
    let source = Arc::new(MockSource::new());
    let clock = Arc::new(ManualClock::new(date("2024-03-10")));
    let state = AppState::with_parts(EnvironmentConfig::default(), source.clone(), clock);
    (create_app(state), source)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_health_check() {
    let (app, _) = create_test_app();
    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "apod-proxy");
}

#[tokio::test]
async fn test_today_endpoint() {
    let (app, source) = create_test_app();
    let (status, body) = get(&app, "/api/apod/today").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["date"], "2024-03-10");
    assert_eq!(body["media_type"], "image");
    assert_eq!(source.total_calls(), 1);
}

#[tokio::test]
async fn test_by_date_endpoint_uses_cache() {
    let (app, source) = create_test_app();

    let (status, body) = get(&app, "/api/apod?date=2024-01-15").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["date"], "2024-01-15");

    let (status, _) = get(&app, "/api/apod?date=2024-01-15").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(source.calls_for("2024-01-15"), 1);

    let (_, stats) = get(&app, "/api/apod/cache/stats").await;
    assert_eq!(stats["entries"], 1);
    assert_eq!(stats["hits"], 1);
    assert_eq!(stats["capacity"], 50);
    assert_eq!(stats["ttl_seconds"], 3600);
}

#[tokio::test]
async fn test_by_date_requires_valid_date() {
    let (app, source) = create_test_app();

    let (status, body) = get(&app, "/api/apod").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");

    let (status, _) = get(&app, "/api/apod?date=15-01-2024").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(source.total_calls(), 0);
}

#[tokio::test]
async fn test_empty_upstream_is_not_found() {
    let (app, source) = create_test_app();
    source.script("2024-01-15", Scripted::Empty);

    let (status, body) = get(&app, "/api/apod?date=2024-01-15").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_upstream_failure_is_bad_gateway() {
    let (app, source) = create_test_app();
    source.script("2024-03-10", Scripted::Fail(500));

    let (status, body) = get(&app, "/api/apod/today").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "EXTERNAL_API_ERROR");
    assert_eq!(body["details"]["upstream_status"], 500);
}

#[tokio::test]
async fn test_recent_defaults_to_ten_days() {
    let (app, _) = create_test_app();
    let (status, body) = get(&app, "/api/apod/recent").await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 10);
    assert_eq!(items[0]["date"], "2024-03-10");
    assert_eq!(items[9]["date"], "2024-03-01");
}

#[tokio::test]
async fn test_recent_days_are_clamped() {
    let (app, source) = create_test_app();

    let (_, body) = get(&app, "/api/apod/recent?days=0").await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (_, body) = get(&app, "/api/apod/recent?days=100").await;
    assert_eq!(body.as_array().unwrap().len(), 30);
    assert_eq!(source.total_calls(), 30);
}

#[tokio::test]
async fn test_recent_aborts_on_failure() {
    let (app, source) = create_test_app();
    source.script("2024-03-09", Scripted::Fail(502));

    let (status, _) = get(&app, "/api/apod/recent?days=3").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(source.call_order(), vec!["2024-03-10", "2024-03-09"]);
}

#[tokio::test]
async fn test_recent_non_numeric_days_is_json_bad_request() {
    let (app, source) = create_test_app();
    let (status, body) = get(&app, "/api/apod/recent?days=abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert_eq!(body["error"], "Bad Request");
    assert_eq!(source.total_calls(), 0);
}

#[tokio::test]
async fn test_by_date_accepts_trailing_slash() {
    let (app, source) = create_test_app();

    let (status, body) = get(&app, "/api/apod/?date=2024-01-15").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["date"], "2024-01-15");

    let (status, _) = get(&app, "/api/apod?date=2024-01-15").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(source.calls_for("2024-01-15"), 1);

    let (status, body) = get(&app, "/api/apod/?date=bad").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

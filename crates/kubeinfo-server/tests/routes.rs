#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use kubeinfo_server::{
    app_state::AppState,
    config::{self, AppConfig},
    router::{build_router, ROUTES},
};

fn app_with(cfg: AppConfig) -> (Router, AppState) {
    let state = AppState::new(cfg);
    (build_router(state.clone()), state)
}

async fn get(app: &Router, path: &str) -> (StatusCode, Option<String>, Value) {
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, content_type, body)
}

#[tokio::test]
async fn root_reports_configured_version_and_default_environment() {
    let cfg = config::load_with(|k| match k {
        "PORT" => Some("4000".to_string()),
        "APP_VERSION" => Some("2.3.1".to_string()),
        _ => None,
    })
    .unwrap();
    let (app, _) = app_with(cfg);

    let (status, _, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], "2.3.1");
    assert_eq!(body["environment"], "development");
    assert!(body["message"].as_str().unwrap().contains("kubeinfo"));
    assert!(!body["hostname"].as_str().unwrap().is_empty());
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn root_defaults_version() {
    let (app, _) = app_with(AppConfig::default());
    let (_, _, body) = get(&app, "/").await;
    assert_eq!(body["version"], "1.0.0");
}

#[tokio::test]
async fn every_listed_route_answers_json_200() {
    let (app, _) = app_with(AppConfig::default());
    for route in ROUTES {
        let (status, content_type, body) = get(&app, route.path).await;
        assert_eq!(status, StatusCode::OK, "{}", route.path);
        assert_eq!(content_type.as_deref(), Some("application/json"), "{}", route.path);
        assert!(body.is_object(), "{}", route.path);
    }
}

#[tokio::test]
async fn health_is_always_healthy_and_uptime_grows() {
    let (app, _) = app_with(AppConfig::default());

    let (_, _, first) = get(&app, "/health").await;
    assert_eq!(first["status"], "healthy");
    let first_uptime = first["uptime"].as_f64().unwrap();
    assert!((0.0..1.0).contains(&first_uptime));

    tokio::time::sleep(Duration::from_millis(1100)).await;

    let (status, _, second) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["status"], "healthy");
    let second_uptime = second["uptime"].as_f64().unwrap();
    assert!(second_uptime >= first_uptime + 1.0);
}

#[tokio::test]
async fn ready_flips_to_503_when_draining() {
    let (app, state) = app_with(AppConfig::default());

    let (status, _, body) = get(&app, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");

    assert!(state.lifecycle().begin_drain());

    let (status, _, body) = get(&app, "/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "draining");

    // liveness is unaffected by draining
    let (status, _, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn metrics_pid_is_stable_and_matches_os() {
    let (app, _) = app_with(AppConfig::default());

    let (_, _, a) = get(&app, "/metrics").await;
    let (_, _, b) = get(&app, "/metrics").await;

    assert_eq!(a["pid"].as_u64().unwrap(), u64::from(std::process::id()));
    assert_eq!(a["pid"], b["pid"]);
    assert!(a["uptime"].as_f64().unwrap() <= b["uptime"].as_f64().unwrap());
    assert!(a["memory"]["rss"].is_u64());
    assert!(a["cpu"]["user"].is_u64());
    assert!(a["version"].as_str().unwrap().starts_with("rustc "));
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (app, _) = app_with(AppConfig::default());
    let (status, _, _) = get(&app, "/nonexistent").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

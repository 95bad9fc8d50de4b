//! Operational HTTP endpoints.
//!
//! - `/`        : application info
//! - `/health`  : liveness (always healthy)
//! - `/ready`   : readiness (503 when draining)
//! - `/metrics` : raw process snapshot, JSON

use axum::{extract::State, http::StatusCode, Json};

use kubeinfo_core::payload::{
    now_iso, HealthResponse, InfoResponse, MetricsResponse, ReadyResponse, GREETING,
};

use crate::app_state::AppState;
use crate::obs::{self, ProcessSnapshot};

pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    let cfg = state.cfg();
    Json(InfoResponse {
        message: GREETING.to_string(),
        timestamp: now_iso(),
        version: cfg.version.clone(),
        environment: cfg.environment.clone(),
        hostname: obs::hostname(),
    })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.uptime_secs()))
}

// No dependency checks yet; gate them here when the service grows some.
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyResponse>) {
    if state.is_draining() {
        (StatusCode::SERVICE_UNAVAILABLE, Json(ReadyResponse::draining()))
    } else {
        (StatusCode::OK, Json(ReadyResponse::ready()))
    }
}

pub async fn metrics(State(state): State<AppState>) -> Json<MetricsResponse> {
    let snap = ProcessSnapshot::capture();
    Json(MetricsResponse {
        uptime: state.uptime_secs(),
        memory: snap.memory,
        cpu: snap.cpu,
        pid: snap.pid,
        version: obs::RUNTIME_VERSION.to_string(),
    })
}

//! Axum router wiring.
//!
//! Every route sits behind the request logger, including the 404 fallback.

use axum::{middleware, routing::get, Router};

use crate::{app_state::AppState, middleware::log_request, ops};

/// A served route, as listed in the startup banner.
#[derive(Debug, Clone, Copy)]
pub struct RouteInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

pub const ROUTES: &[RouteInfo] = &[
    RouteInfo {
        method: "GET",
        path: "/",
        description: "Main application endpoint",
    },
    RouteInfo {
        method: "GET",
        path: "/health",
        description: "Health check (liveness probe)",
    },
    RouteInfo {
        method: "GET",
        path: "/ready",
        description: "Readiness probe",
    },
    RouteInfo {
        method: "GET",
        path: "/metrics",
        description: "Process metrics snapshot",
    },
];

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ops::info))
        .route("/health", get(ops::health))
        .route("/ready", get(ops::ready))
        .route("/metrics", get(ops::metrics))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

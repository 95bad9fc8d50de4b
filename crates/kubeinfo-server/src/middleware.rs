//! Request logging middleware.
//!
//! Emits one event per request before dispatch: method, path, client address.
//! The subscriber stamps the time. The request passes through untouched.

use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::Request,
    middleware::Next,
    response::Response,
};

pub async fn log_request(request: Request<Body>, next: Next) -> Response {
    let client = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "-".to_string());

    tracing::info!(
        method = %request.method(),
        path = %request.uri().path(),
        %client,
        "request"
    );

    next.run(request).await
}

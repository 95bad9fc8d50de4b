//! Listener ownership and the serve loop.
//!
//! `run` serves until the token is cancelled, then drains: no new
//! connections, in-flight requests finish. The drain is bounded by the
//! configured timeout.

use std::future::IntoFuture;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use kubeinfo_core::error::{KubeInfoError, Result};
use kubeinfo_core::payload::iso_timestamp;

use crate::app_state::AppState;
use crate::config::AppConfig;
use crate::obs;
use crate::router::{build_router, ROUTES};

pub struct Server {
    listener: TcpListener,
    state: AppState,
    router: Router,
}

impl Server {
    /// Bind `cfg.host:cfg.port`.
    pub async fn bind(cfg: AppConfig) -> Result<Self> {
        let addr = cfg.listen_addr()?;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| KubeInfoError::Bind(format!("{addr}: {e}")))?;
        Ok(Self::from_listener(listener, AppState::new(cfg)))
    }

    /// Serve the standard routes on an already bound listener.
    pub fn from_listener(listener: TcpListener, state: AppState) -> Self {
        let router = build_router(state.clone());
        Self::with_router(listener, state, router)
    }

    /// Serve a caller-supplied router with this server's lifecycle.
    pub fn with_router(listener: TcpListener, state: AppState, router: Router) -> Self {
        Self {
            listener,
            state,
            router,
        }
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener
            .local_addr()
            .map_err(|e| KubeInfoError::Internal(format!("local_addr: {e}")))
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub async fn run(self, cancel: CancellationToken) -> Result<()> {
        let local = self.local_addr()?;
        let Server {
            listener,
            state,
            router,
        } = self;

        log_banner(&state, local);

        let drain_state = state.clone();
        let drain_cancel = cancel.clone();
        let serve = axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(async move {
            drain_cancel.cancelled().await;
            if drain_state.lifecycle().begin_drain() {
                info!("draining: no longer accepting connections");
            }
        })
        .into_future();
        tokio::pin!(serve);

        let result = tokio::select! {
            res = &mut serve => res.map_err(|e| KubeInfoError::Serve(e.to_string())),
            _ = cancel.cancelled() => {
                let cfg = state.cfg();
                match tokio::time::timeout(cfg.drain_timeout(), &mut serve).await {
                    Ok(res) => res.map_err(|e| KubeInfoError::Serve(e.to_string())),
                    Err(_) => Err(KubeInfoError::DrainTimeout(cfg.drain_timeout_ms)),
                }
            }
        };

        state.lifecycle().mark_stopped();
        match &result {
            Ok(()) => info!("server closed, all connections drained"),
            Err(e) => warn!(error = %e, "server stopped without a clean drain"),
        }
        result
    }
}

fn log_banner(state: &AppState, local: SocketAddr) {
    let rule = "=".repeat(50);
    let cfg = state.cfg();

    info!("{rule}");
    info!("server is running on port {}", local.port());
    info!("environment: {}", cfg.environment);
    info!("hostname: {}", obs::hostname());
    info!("started at: {}", iso_timestamp(state.started_at()));
    info!("{rule}");
    info!("available endpoints:");
    for r in ROUTES {
        info!("  {:<4} {:<8} - {}", r.method, r.path, r.description);
    }
    info!("{rule}");
}

//! Shared application state.
//!
//! Holds the immutable config, the server start time, and the lifecycle
//! phase. Cloned into every handler; clones share one allocation.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};

use crate::config::AppConfig;
use crate::lifecycle::{Lifecycle, Phase};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: AppConfig,
    started: Instant,
    started_at: DateTime<Utc>,
    lifecycle: Lifecycle,
}

impl AppState {
    pub fn new(cfg: AppConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                started: Instant::now(),
                started_at: Utc::now(),
                lifecycle: Lifecycle::new(),
            }),
        }
    }

    pub fn cfg(&self) -> &AppConfig {
        &self.inner.cfg
    }

    /// Wall-clock start, for the banner.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.inner.started_at
    }

    /// Seconds since start. Monotonic: derived from `Instant`, not wall time.
    pub fn uptime_secs(&self) -> f64 {
        self.inner.started.elapsed().as_secs_f64()
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.inner.lifecycle
    }

    pub fn is_draining(&self) -> bool {
        self.inner.lifecycle.phase() != Phase::Running
    }
}

//! JSON payloads served by the info server.
//!
//! Field names are part of the probe contract: orchestration tooling and
//! dashboards match on them, so renames here are breaking changes.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Greeting returned by `GET /`.
pub const GREETING: &str = "Hello from kubeinfo running in Kubernetes!";
/// `status` value of every `/health` response.
pub const STATUS_HEALTHY: &str = "healthy";
/// `status` value of `/ready` while the server accepts traffic.
pub const STATUS_READY: &str = "ready";
/// `status` value of `/ready` once shutdown has begun.
pub const STATUS_DRAINING: &str = "draining";

/// ISO-8601 UTC with millisecond precision and a `Z` suffix,
/// e.g. `2024-05-01T12:00:00.123Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// [`iso_timestamp`] of the current instant.
pub fn now_iso() -> String {
    iso_timestamp(Utc::now())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoResponse {
    pub message: String,
    pub timestamp: String,
    pub version: String,
    pub environment: String,
    pub hostname: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Seconds since the server started.
    pub uptime: f64,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy(uptime: f64) -> Self {
        Self {
            status: STATUS_HEALTHY.to_string(),
            uptime,
            timestamp: now_iso(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadyResponse {
    pub status: String,
    pub timestamp: String,
}

impl ReadyResponse {
    pub fn ready() -> Self {
        Self {
            status: STATUS_READY.to_string(),
            timestamp: now_iso(),
        }
    }

    pub fn draining() -> Self {
        Self {
            status: STATUS_DRAINING.to_string(),
            timestamp: now_iso(),
        }
    }
}

/// Memory figures in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryUsage {
    pub rss: u64,
    #[serde(rename = "virtual")]
    pub virtual_bytes: u64,
    pub max_rss: u64,
}

/// CPU time consumed by the process, in microseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuUsage {
    pub user: u64,
    pub system: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsResponse {
    pub uptime: f64,
    pub memory: MemoryUsage,
    pub cpu: CpuUsage,
    pub pid: u32,
    pub version: String,
}

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use kubeinfo_core::error::{KubeInfoError, Result};
use serde::Deserialize;

/// Optional YAML layer. Every key may be omitted; unknown keys are rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default)]
    pub drain_timeout_ms: Option<u64>,
}

/// Resolved configuration. Built once at startup, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub version: String,
    pub environment: String,
    pub drain_timeout_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            version: default_version(),
            environment: default_environment(),
            drain_timeout_ms: default_drain_timeout_ms(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if !(100..=600000).contains(&self.drain_timeout_ms) {
            return Err(KubeInfoError::BadConfig(
                "drain_timeout_ms must be between 100 and 600000".into(),
            ));
        }
        if self.version.trim().is_empty() {
            return Err(KubeInfoError::BadConfig("version must not be empty".into()));
        }
        if self.environment.trim().is_empty() {
            return Err(KubeInfoError::BadConfig("environment must not be empty".into()));
        }
        self.listen_addr()?;
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.host.parse().map_err(|_| {
            KubeInfoError::BadConfig(format!("host must be an IP address, got {:?}", self.host))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn drain_timeout(&self) -> Duration {
        Duration::from_millis(self.drain_timeout_ms)
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    3000
}
fn default_version() -> String {
    "1.0.0".into()
}
fn default_environment() -> String {
    "development".into()
}
fn default_drain_timeout_ms() -> u64 {
    10000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let cfg = AppConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.listen_addr().unwrap().to_string(), "0.0.0.0:3000");
        assert_eq!(cfg.drain_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn rejects_hostname_as_host() {
        let cfg = AppConfig {
            host: "localhost".into(),
            ..AppConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(KubeInfoError::BadConfig(_))));
    }

    #[test]
    fn accepts_ipv6_host() {
        let cfg = AppConfig {
            host: "::1".into(),
            port: 8080,
            ..AppConfig::default()
        };
        assert_eq!(cfg.listen_addr().unwrap().to_string(), "[::1]:8080");
    }

    #[test]
    fn drain_timeout_out_of_range() {
        let cfg = AppConfig {
            drain_timeout_ms: 0,
            ..AppConfig::default()
        };
        assert!(cfg.validate().is_err());
        let cfg = AppConfig {
            drain_timeout_ms: 600001,
            ..AppConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}

//! Config loader: defaults, then an optional strict YAML file, then env vars.

pub mod schema;

use std::fs;

use kubeinfo_core::error::{KubeInfoError, Result};

pub use schema::{AppConfig, FileConfig};

/// Names a YAML file to layer under the environment.
pub const CONFIG_PATH_VAR: &str = "KUBEINFO_CONFIG";

pub const HOST_VAR: &str = "HOST";
pub const PORT_VAR: &str = "PORT";
pub const VERSION_VAR: &str = "APP_VERSION";
/// Checked before [`NODE_ENV_VAR`].
pub const APP_ENV_VAR: &str = "APP_ENV";
pub const NODE_ENV_VAR: &str = "NODE_ENV";
pub const DRAIN_TIMEOUT_VAR: &str = "SHUTDOWN_TIMEOUT_MS";

/// Load from the real process environment.
pub fn load() -> Result<AppConfig> {
    load_with(|key| std::env::var(key).ok())
}

/// Load with an injected environment lookup.
pub fn load_with<F>(lookup: F) -> Result<AppConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let env = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let file = match env(CONFIG_PATH_VAR) {
        Some(path) => load_file(&path)?,
        None => FileConfig::default(),
    };

    let mut cfg = AppConfig::default();
    apply_file(&mut cfg, file);

    if let Some(host) = env(HOST_VAR) {
        cfg.host = host;
    }
    if let Some(port) = env(PORT_VAR) {
        cfg.port = port.trim().parse().map_err(|_| {
            KubeInfoError::BadConfig(format!("{PORT_VAR} must be a port number, got {port:?}"))
        })?;
    }
    if let Some(version) = env(VERSION_VAR) {
        cfg.version = version;
    }
    if let Some(environment) = env(APP_ENV_VAR).or_else(|| env(NODE_ENV_VAR)) {
        cfg.environment = environment;
    }
    if let Some(ms) = env(DRAIN_TIMEOUT_VAR) {
        cfg.drain_timeout_ms = ms.trim().parse().map_err(|_| {
            KubeInfoError::BadConfig(format!(
                "{DRAIN_TIMEOUT_VAR} must be milliseconds, got {ms:?}"
            ))
        })?;
    }

    cfg.validate()?;
    Ok(cfg)
}

pub fn load_file(path: &str) -> Result<FileConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| KubeInfoError::BadConfig(format!("read config {path} failed: {e}")))?;
    parse_file_str(&s)
}

pub fn parse_file_str(s: &str) -> Result<FileConfig> {
    serde_yaml::from_str(s).map_err(|e| KubeInfoError::BadConfig(format!("invalid yaml: {e}")))
}

fn apply_file(cfg: &mut AppConfig, file: FileConfig) {
    if let Some(host) = file.host {
        cfg.host = host;
    }
    if let Some(port) = file.port {
        cfg.port = port;
    }
    if let Some(version) = file.version {
        cfg.version = version;
    }
    if let Some(environment) = file.environment {
        cfg.environment = environment;
    }
    if let Some(ms) = file.drain_timeout_ms {
        cfg.drain_timeout_ms = ms;
    }
}

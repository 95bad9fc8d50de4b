//! Shared error type across kubeinfo crates.

use thiserror::Error;

/// Exit status for a clean, signal-triggered shutdown.
pub const EXIT_OK: i32 = 0;
/// Exit status for faults and failures after startup.
pub const EXIT_FAULT: i32 = 1;
/// Exit status when the process never got to serve (config, bind, signals).
pub const EXIT_STARTUP: i32 = 2;

/// Shared result type.
pub type Result<T> = std::result::Result<T, KubeInfoError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum KubeInfoError {
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("bind failed: {0}")]
    Bind(String),
    #[error("signal handler install failed: {0}")]
    Signal(String),
    #[error("server failed: {0}")]
    Serve(String),
    #[error("drain did not finish within {0}ms")]
    DrainTimeout(u64),
    #[error("internal: {0}")]
    Internal(String),
}

impl KubeInfoError {
    /// Map the error to the process exit status `main` terminates with.
    pub fn exit_code(&self) -> i32 {
        match self {
            KubeInfoError::BadConfig(_) | KubeInfoError::Bind(_) | KubeInfoError::Signal(_) => {
                EXIT_STARTUP
            }
            KubeInfoError::Serve(_)
            | KubeInfoError::DrainTimeout(_)
            | KubeInfoError::Internal(_) => EXIT_FAULT,
        }
    }

    /// True when the error happened before the server started accepting.
    pub fn is_startup(&self) -> bool {
        self.exit_code() == EXIT_STARTUP
    }
}

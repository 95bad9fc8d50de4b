//! Termination signals -> cancellation token.
//!
//! SIGINT and SIGTERM both cancel the token the accept loop watches. Handlers
//! are installed up front so a failure surfaces as a startup error.

use tokio_util::sync::CancellationToken;

use kubeinfo_core::error::Result;

pub struct ShutdownSignals {
    #[cfg(unix)]
    interrupt: tokio::signal::unix::Signal,
    #[cfg(unix)]
    terminate: tokio::signal::unix::Signal,
}

impl ShutdownSignals {
    /// Must be called from within the tokio runtime.
    #[cfg(unix)]
    pub fn install() -> Result<Self> {
        use kubeinfo_core::error::KubeInfoError;
        use tokio::signal::unix::{signal, SignalKind};

        let interrupt = signal(SignalKind::interrupt())
            .map_err(|e| KubeInfoError::Signal(format!("SIGINT: {e}")))?;
        let terminate = signal(SignalKind::terminate())
            .map_err(|e| KubeInfoError::Signal(format!("SIGTERM: {e}")))?;
        Ok(Self {
            interrupt,
            terminate,
        })
    }

    #[cfg(not(unix))]
    pub fn install() -> Result<Self> {
        Ok(Self {})
    }

    /// Resolve with the name of the first signal delivered.
    #[cfg(unix)]
    pub async fn recv(&mut self) -> &'static str {
        tokio::select! {
            _ = self.interrupt.recv() => "SIGINT",
            _ = self.terminate.recv() => "SIGTERM",
        }
    }

    #[cfg(not(unix))]
    pub async fn recv(&mut self) -> &'static str {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "ctrl-c listener failed");
            std::future::pending::<()>().await;
        }
        "SIGINT"
    }
}

/// Cancel `cancel` on the first termination signal. Returns early if the
/// token is cancelled some other way.
pub async fn cancel_on_signal(mut signals: ShutdownSignals, cancel: CancellationToken) {
    tokio::select! {
        name = signals.recv() => {
            tracing::info!(signal = name, "signal received, shutting down gracefully");
            cancel.cancel();
        }
        _ = cancel.cancelled() => {}
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn returns_when_token_cancelled_elsewhere() {
        let signals = ShutdownSignals::install().unwrap();
        let cancel = CancellationToken::new();
        let task = tokio::spawn(cancel_on_signal(signals, cancel.clone()));

        cancel.cancel();
        tokio::time::timeout(Duration::from_secs(1), task)
            .await
            .expect("watcher should exit once the token is cancelled")
            .unwrap();
    }
}

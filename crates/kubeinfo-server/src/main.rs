//! kubeinfo server
//!
//! - Config from defaults, optional YAML (`KUBEINFO_CONFIG`), then env vars
//! - `/`, `/health`, `/ready`, `/metrics` as JSON
//! - SIGINT/SIGTERM drain in-flight requests, bounded by a timeout
//! - Panics terminate the process with status 1

use std::io::IsTerminal;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kubeinfo_core::error::{Result, EXIT_OK};
use kubeinfo_server::{config, fault, server::Server, shutdown};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_ansi(std::io::stdout().is_terminal()))
        .init();

    fault::install_panic_hook();

    let code = match run().await {
        Ok(()) => EXIT_OK,
        Err(e) => {
            tracing::error!(error = %e, exit_code = e.exit_code(), "kubeinfo-server exiting");
            e.exit_code()
        }
    };
    std::process::exit(code);
}

async fn run() -> Result<()> {
    let cfg = config::load()?;
    tracing::debug!(?cfg, "config loaded");

    let cancel = CancellationToken::new();
    let signals = shutdown::ShutdownSignals::install()?;
    tokio::spawn(shutdown::cancel_on_signal(signals, cancel.clone()));

    let server = Server::bind(cfg).await?;
    server.run(cancel).await
}

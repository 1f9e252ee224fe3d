//! Startup helpers for the keepsake journal server.

use std::future::Future;
use std::process::ExitCode;
use std::sync::Arc;

use crate::journal::core::config::JournalConfig;
use crate::server::{self, AppState};

/// Run the server from environment configuration.
///
/// # Returns
/// `ExitCode::SUCCESS` on graceful shutdown, `1` on failure.
#[must_use]
pub fn run() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting keepsake v{}", env!("CARGO_PKG_VERSION"));

    let config = JournalConfig::from_env();
    tracing::info!(
        "Store: {} (key {:?}), suggestions {}",
        config.storage.sqlite_path.display(),
        config.storage.store_key,
        if config.suggestion.api_key.is_some() {
            "enabled"
        } else {
            "disabled (no credential)"
        }
    );

    let state = match AppState::new(&config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to create state: {e}");
            return ExitCode::from(1);
        }
    };

    let port = config.server.port;

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create runtime: {e}");
            return ExitCode::from(1);
        }
    };

    if let Err(e) = rt.block_on(server::run_server(state, port)) {
        tracing::error!("Server error: {e}");
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

/// Initialize application state without starting the server.
///
/// # Errors
/// Returns an error if state creation fails.
pub fn initialize() -> Result<Arc<AppState>, Box<dyn std::error::Error + Send + Sync>> {
    let config = JournalConfig::from_env();
    AppState::new(&config).map_err(|e| format!("Failed to create state: {e}").into())
}

/// Run the server with a caller-supplied shutdown signal.
///
/// # Errors
/// Returns an error if the server fails.
pub async fn run_server_with_shutdown<F>(
    state: Arc<AppState>,
    port: u16,
    shutdown_signal: F,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
where
    F: Future<Output = ()> + Send + 'static,
{
    server::run_server_with_shutdown(state, port, shutdown_signal).await
}

//! # LankaPOS Server Binary
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Install tracing (RUST_LOG, default "info,lanka=debug")             │
//! │  2. Load ServerConfig (defaults → server.toml → LANKA_* env)           │
//! │  3. Build the restock suggester (falls back to "unavailable")          │
//! │  4. Build AppState + router, listen, shut down on Ctrl+C / SIGTERM     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use lanka_advisor::{HttpSuggester, RestockSuggester, UnavailableSuggester};
use lanka_pos_server::{build_router, AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info,lanka=debug";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_target(true)
        .init();

    info!("Starting LankaPOS server...");

    let config = ServerConfig::load()?;

    let suggester: Arc<dyn RestockSuggester> = match HttpSuggester::from_env(config.advisor.clone()) {
        Ok(suggester) => {
            info!(model = %config.advisor.model, "Restock advisor ready");
            Arc::new(suggester)
        }
        Err(e) => {
            warn!(error = %e, "Restock advisor disabled");
            Arc::new(UnavailableSuggester::new(e.to_string()))
        }
    };

    let addr = config.socket_addr()?;
    let app = build_router(AppState::new(config, suggester));

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}

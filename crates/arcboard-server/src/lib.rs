//! HTTP API for the Arcboard contract studio.
//!
//! Routes:
//!
//! - `GET  /health`
//! - `GET  /api/contracts/templates[?category=]`
//! - `GET  /api/contracts/templates/:id`
//! - `GET  /api/contracts/categories`
//! - `POST /api/contracts/validate`
//! - `POST /api/contracts/generate`

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use arc_contracts::ContractStudio;

pub use config::ServerConfig;
pub use error::ApiError;
pub use router::{build_router, AppState};

pub const DEFAULT_LOG_FILTER: &str = "info,arcboard_server=debug";

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(log_json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let registry = tracing_subscriber::registry().with(filter);
    let _ = if log_json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };
}

/// Binds `config.bind_addr` and serves until SIGINT or SIGTERM.
pub async fn serve(config: ServerConfig) -> std::io::Result<()> {
    let studio = ContractStudio::new(config.studio_config());
    let state = AppState::new(studio, config.expose_error_details);
    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr.as_str()).await?;
    info!(
        addr = %listener.local_addr()?,
        strict_identifiers = config.strict_identifiers,
        "arcboard-server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await?;

    info!("arcboard-server stopped");
    Ok(())
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = tokio::signal::ctrl_c() => {}
                }
            }
            Err(_) => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    info!("shutdown signal received");
}

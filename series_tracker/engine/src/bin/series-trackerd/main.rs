//! series-trackerd
//!
//! Serves the series tracker REST API on a fixed port, backed by either the
//! in-memory store or PostgreSQL depending on `ST_STORAGE_MODE`.

mod config;

use anyhow::Context;
use config::DaemonConfig;
use st_engine::adapters::rest::{build_router, serve_on_tcp};
use st_engine::application::Application;
use st_engine::domain::ports::SeriesRepository;
use st_engine::infrastructure::{InMemorySeriesRepository, PostgresSeriesRepository, StorageMode};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = DaemonConfig::from_env().context("Invalid daemon configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&config.log_level)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!(
        storage_mode = %config.storage_mode,
        listen_addr = %config.listen_addr,
        "Starting series-trackerd"
    );

    let mut postgres = None;
    let repository: Arc<dyn SeriesRepository> = match (config.storage_mode, &config.database) {
        (StorageMode::Postgres, Some(database)) => {
            let repository = PostgresSeriesRepository::connect(database)
                .await
                .context("Failed to connect to PostgreSQL")?;
            postgres = Some(repository.clone());
            Arc::new(repository)
        }
        (StorageMode::Postgres, None) => {
            anyhow::bail!("PostgreSQL storage selected without database settings")
        }
        (StorageMode::Memory, _) => {
            info!("Using in-memory storage; data is lost on exit");
            Arc::new(InMemorySeriesRepository::new())
        }
    };

    let app = build_router(Arc::new(Application::new(repository)));
    serve_on_tcp(config.listen_addr, app, shutdown_signal())
        .await
        .with_context(|| format!("Failed to serve on {}", config.listen_addr))?;

    if let Some(repository) = postgres {
        repository.close().await;
    }

    info!("series-trackerd shut down");
    Ok(())
}

/// Resolve on SIGINT, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT"),
        _ = terminate => info!("Received SIGTERM"),
    }
}

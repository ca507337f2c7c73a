use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::adapters::{MemoryCatalogStore, SqliteCatalogStore};
use crate::api;
use crate::core::catalog::CatalogService;
use crate::core::seed::{SeedData, SeedInitializer, SeedOutcome};
use crate::core::{CatalogStore, ConfigProvider};
use crate::utils::error::{PortfolioError, Result};

/// Builds the store selected by configuration.
pub fn open_store(config: &dyn ConfigProvider) -> Result<Arc<dyn CatalogStore>> {
    match config.store_backend() {
        "sqlite" => Ok(Arc::new(SqliteCatalogStore::open(config.database_path())?)),
        "memory" => {
            tracing::warn!("Using in-memory catalog store, data is lost on shutdown");
            Ok(Arc::new(MemoryCatalogStore::new()))
        }
        other => Err(PortfolioError::InvalidConfigValueError {
            field: "store.backend".to_string(),
            value: other.to_string(),
            reason: "Unsupported store backend".to_string(),
        }),
    }
}

pub fn load_seed_data(config: &dyn ConfigProvider) -> Result<SeedData> {
    match config.seed_file() {
        Some(path) => {
            tracing::info!("Loading seed data from {}", path);
            SeedData::from_file(path)
        }
        None => SeedData::builtin(),
    }
}

/// Opens the store and seeds it before any request can be served.
pub async fn prepare_catalog(config: &dyn ConfigProvider) -> Result<CatalogService> {
    let store = open_store(config)?;

    if config.seed_enabled() {
        let data = load_seed_data(config)?;
        match SeedInitializer::new(store.as_ref()).run(&data).await? {
            SeedOutcome::Seeded { inserted } => {
                tracing::debug!("Seed step inserted {} modules", inserted)
            }
            SeedOutcome::Skipped { existing } => {
                tracing::debug!("Seed step skipped, {} modules present", existing)
            }
        }
    } else {
        tracing::info!("Seeding disabled by configuration");
    }

    Ok(CatalogService::new(store))
}

pub async fn serve(config: &dyn ConfigProvider, service: CatalogService) -> anyhow::Result<()> {
    let public_dir = Path::new(config.public_dir());
    let app = api::router(service, Some(public_dir));

    let addr = format!("{}:{}", config.host(), config.port());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    let local_addr: SocketAddr = listener.local_addr()?;
    tracing::info!("🚀 Server running on http://{}", local_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated unexpectedly")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
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
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
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
    tracing::info!("Shutdown signal received");
}

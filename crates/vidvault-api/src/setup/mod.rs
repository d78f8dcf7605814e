//! Application setup and initialization

pub mod database;
pub mod routes;
pub mod server;
pub mod storage;

use crate::state::AppState;
use anyhow::{Context, Result};
use std::sync::Arc;
use vidvault_core::{Config, UuidGenerator};

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    vidvault_infra::init_telemetry(config.log_format())
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!(
        environment = %config.environment(),
        "Configuration loaded and validated successfully"
    );

    let blob_store = storage::setup_blob_store(&config)
        .await
        .context("Failed to initialize blob store")?;

    let metadata_store = database::setup_metadata_store(&config)
        .await
        .context("Failed to initialize metadata store")?;

    let state = Arc::new(AppState {
        config: config.clone(),
        blob_store,
        metadata_store,
        id_generator: Arc::new(UuidGenerator),
    });

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}

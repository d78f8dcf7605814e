//! Metadata store setup and initialization

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use vidvault_core::{Config, MetadataBackend};
use vidvault_db::{MemoryMetadataStore, MetadataStore, PostgresMetadataStore};

/// Create the metadata store selected by `METADATA_BACKEND`
///
/// For Postgres this connects the pool and creates the video table if missing.
pub async fn setup_metadata_store(config: &Config) -> Result<Arc<dyn MetadataStore>> {
    match config.metadata_backend() {
        MetadataBackend::Postgres => {
            let database_url = config
                .database_url()
                .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set"))?;

            tracing::info!("Connecting to database...");
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections())
                .acquire_timeout(Duration::from_secs(config.db_timeout_seconds()))
                .idle_timeout(Duration::from_secs(600))
                .max_lifetime(Duration::from_secs(1800))
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;

            tracing::info!(
                max_connections = config.db_max_connections(),
                "Database connected successfully"
            );

            let store =
                PostgresMetadataStore::new(pool, config.table_name(), config.scan_page_size())?;
            store.ensure_schema().await?;
            Ok(Arc::new(store))
        }
        MetadataBackend::Memory => {
            tracing::warn!("Using in-memory metadata store; records are lost on restart");
            Ok(Arc::new(MemoryMetadataStore::new(config.scan_page_size())))
        }
    }
}

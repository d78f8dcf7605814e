//! Storage setup and initialization

use anyhow::Result;
use std::sync::Arc;
use vidvault_core::Config;
use vidvault_storage::{create_blob_store, BlobStore};

/// Create the blob store selected by `STORAGE_BACKEND`
pub async fn setup_blob_store(config: &Config) -> Result<Arc<dyn BlobStore>> {
    tracing::info!("Initializing blob store...");
    let store = create_blob_store(config).await?;
    tracing::info!(
        backend = %store.backend_type(),
        sample_url = %store.public_url("{videoId}"),
        "Blob store initialized successfully"
    );
    Ok(store)
}

//! Listing workflow: every metadata record, unmodified.

use thiserror::Error;
use vidvault_core::{AppError, VideoRecord};
use vidvault_db::{MetadataError, MetadataStore};

/// Listing failed; displays the store's message unmodified.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ListError(#[from] pub MetadataError);

impl From<ListError> for AppError {
    fn from(err: ListError) -> Self {
        AppError::ListFailed(err.to_string())
    }
}

/// Enumerate all stored records in store order, without sorting or projection.
pub async fn list_videos(metadata_store: &dyn MetadataStore) -> Result<Vec<VideoRecord>, ListError> {
    let start = std::time::Instant::now();

    let records = metadata_store.scan_all().await.map_err(|e| {
        tracing::error!(error = %e, "Metadata scan failed");
        ListError(e)
    })?;

    tracing::debug!(
        count = records.len(),
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Videos listed"
    );

    Ok(records)
}

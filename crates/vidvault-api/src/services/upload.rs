//! Upload workflow: identifier generation, blob write, metadata write.
//!
//! The two writes are not transactional. A blob write failure aborts before the metadata
//! store is touched; a metadata write failure leaves the blob orphaned.

use bytes::Bytes;
use thiserror::Error;
use vidvault_core::ids::with_extension;
use vidvault_core::{AppError, IdGenerator, UploadReceipt, VideoRecord};
use vidvault_db::{MetadataError, MetadataStore};
use vidvault_storage::{BlobStore, StorageError};

/// Upload workflow errors; both variants display the store's message unmodified.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("{0}")]
    Blob(#[source] StorageError),

    #[error("{0}")]
    Metadata(#[source] MetadataError),
}

impl From<UploadError> for AppError {
    fn from(err: UploadError) -> Self {
        AppError::UploadFailed(err.to_string())
    }
}

/// Raw upload as received from the client
#[derive(Debug, Clone, Default)]
pub struct UploadRequest {
    pub content: Bytes,
    pub content_type: Option<String>,
    pub title: Option<String>,
}

/// Store clients and settings the upload workflow runs against
pub struct UploadWorkflow<'a> {
    pub blob_store: &'a dyn BlobStore,
    pub metadata_store: &'a dyn MetadataStore,
    pub id_generator: &'a dyn IdGenerator,
    pub video_extension: &'a str,
}

impl UploadWorkflow<'_> {
    /// Store the content, register its metadata and return the new id and URL.
    pub async fn run(&self, request: UploadRequest) -> Result<UploadReceipt, UploadError> {
        let video_id = with_extension(&self.id_generator.generate(), self.video_extension);
        let size = request.content.len();
        let start = std::time::Instant::now();

        self.blob_store
            .put(&video_id, request.content, request.content_type.as_deref())
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    video_id = %video_id,
                    size_bytes = size,
                    "Blob write failed; metadata not written"
                );
                UploadError::Blob(e)
            })?;

        let url = self.blob_store.public_url(&video_id);
        let record = VideoRecord::new(video_id.clone(), url.clone())
            .with_content_type(request.content_type)
            .with_title(request.title);

        if let Err(e) = self.metadata_store.put(&record).await {
            tracing::error!(
                error = %e,
                video_id = %video_id,
                orphaned_key = %video_id,
                "Metadata write failed after blob write; blob is orphaned"
            );
            return Err(UploadError::Metadata(e));
        }

        tracing::info!(
            video_id = %video_id,
            url = %url,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Video uploaded"
        );

        Ok(UploadReceipt::new(video_id, url))
    }
}

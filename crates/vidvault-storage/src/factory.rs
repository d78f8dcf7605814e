#[cfg(feature = "storage-local")]
use crate::LocalBlobStore;
#[cfg(feature = "storage-s3")]
use crate::ObjectBlobStore;
use crate::{BlobStore, StorageBackend, StorageError, StorageResult};
use std::sync::Arc;
use vidvault_core::Config;

/// URL base for the in-memory backend when `PUBLIC_BASE_URL` is not set.
#[cfg(feature = "storage-s3")]
const MEMORY_BASE_URL: &str = "memory://vidvault";

/// Create a blob store based on configuration
pub async fn create_blob_store(config: &Config) -> StorageResult<Arc<dyn BlobStore>> {
    match config.storage_backend() {
        #[cfg(feature = "storage-s3")]
        StorageBackend::S3 => {
            let bucket = config
                .s3_bucket()
                .map(String::from)
                .ok_or_else(|| StorageError::Config("S3_BUCKET not configured".to_string()))?;

            let store = ObjectBlobStore::new_s3(
                bucket,
                config.s3_region().to_string(),
                config.s3_endpoint().map(String::from),
                config.public_base_url().map(String::from),
            )?
            .with_default_content_type(config.default_content_type());
            Ok(Arc::new(store))
        }

        #[cfg(feature = "storage-s3")]
        StorageBackend::Memory => {
            let base_url = config.public_base_url().unwrap_or(MEMORY_BASE_URL);
            let store = ObjectBlobStore::with_store(
                Arc::new(object_store::memory::InMemory::new()),
                "memory",
                base_url,
            )
            .with_default_content_type(config.default_content_type());
            Ok(Arc::new(store))
        }

        #[cfg(not(feature = "storage-s3"))]
        StorageBackend::S3 | StorageBackend::Memory => Err(StorageError::Config(
            "Object storage backends not available (storage-s3 feature not enabled)".to_string(),
        )),

        #[cfg(feature = "storage-local")]
        StorageBackend::Local => {
            let base_path = config
                .local_storage_path()
                .map(String::from)
                .ok_or_else(|| {
                    StorageError::Config("LOCAL_STORAGE_PATH not configured".to_string())
                })?;
            let base_url = config
                .local_storage_base_url()
                .map(String::from)
                .ok_or_else(|| {
                    StorageError::Config("LOCAL_STORAGE_BASE_URL not configured".to_string())
                })?;

            let store = LocalBlobStore::new(base_path, base_url).await?;
            Ok(Arc::new(store))
        }

        #[cfg(not(feature = "storage-local"))]
        StorageBackend::Local => Err(StorageError::Config(
            "Local storage backend not available (storage-local feature not enabled)".to_string(),
        )),
    }
}

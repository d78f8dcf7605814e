use crate::keys::{join_url, validate_key};
use crate::traits::{BlobStore, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use object_store::aws::AmazonS3Builder;
use object_store::path::Path;
use object_store::Error as ObjectStoreError;
use object_store::{
    Attribute, Attributes, GetOptions, ObjectStore, PutOptions, PutPayload,
    Result as ObjectResult,
};
use std::sync::Arc;
use vidvault_core::constants::DEFAULT_CONTENT_TYPE;

/// Blob store backed by any `object_store` implementation
///
/// Production uses Amazon S3 (or an S3-compatible provider); tests inject
/// `object_store::memory::InMemory` through [`ObjectBlobStore::with_store`].
#[derive(Clone)]
pub struct ObjectBlobStore {
    store: Arc<dyn ObjectStore>,
    bucket: String,
    base_url: String,
    default_content_type: String,
    backend: StorageBackend,
}

impl ObjectBlobStore {
    /// Create a new S3-backed store
    ///
    /// # Arguments
    /// * `bucket` - S3 bucket name
    /// * `region` - AWS region (or region identifier for S3-compatible providers)
    /// * `endpoint_url` - Optional custom endpoint URL for S3-compatible providers
    ///   (e.g., "http://localhost:9000" for MinIO)
    /// * `public_base_url` - Optional override for the base of generated URLs
    pub fn new_s3(
        bucket: String,
        region: String,
        endpoint_url: Option<String>,
        public_base_url: Option<String>,
    ) -> StorageResult<Self> {
        // Credentials come from the standard AWS environment variables.
        let mut builder = AmazonS3Builder::from_env()
            .with_region(region)
            .with_bucket_name(bucket.clone());

        if let Some(ref endpoint) = endpoint_url {
            let allow_http = endpoint.starts_with("http://");
            builder = builder
                .with_endpoint(endpoint.clone())
                .with_allow_http(allow_http);
        }

        let store = builder
            .build()
            .map_err(|e| StorageError::Config(e.to_string()))?;

        let base_url = public_base_url
            .unwrap_or_else(|| s3_base_url(&bucket, endpoint_url.as_deref()));

        Ok(Self {
            store: Arc::new(store),
            bucket,
            base_url,
            default_content_type: DEFAULT_CONTENT_TYPE.to_string(),
            backend: StorageBackend::S3,
        })
    }

    /// Wrap an existing object store; URLs are generated under `base_url`.
    pub fn with_store(
        store: Arc<dyn ObjectStore>,
        bucket: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            store,
            bucket: bucket.into(),
            base_url: base_url.into(),
            default_content_type: DEFAULT_CONTENT_TYPE.to_string(),
            backend: StorageBackend::Memory,
        }
    }

    /// Content type written when a put carries no hint.
    pub fn with_default_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.default_content_type = content_type.into();
        self
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

/// Base location for objects in `bucket`.
///
/// AWS uses the virtual-hosted form `https://{bucket}.s3.amazonaws.com`; S3-compatible
/// providers use path style `{endpoint}/{bucket}`.
fn s3_base_url(bucket: &str, endpoint: Option<&str>) -> String {
    match endpoint {
        Some(endpoint) => format!("{}/{}", endpoint.trim_end_matches('/'), bucket),
        None => format!("https://{}.s3.amazonaws.com", bucket),
    }
}

#[async_trait]
impl BlobStore for ObjectBlobStore {
    async fn put(
        &self,
        key: &str,
        content: Bytes,
        content_type: Option<&str>,
    ) -> StorageResult<()> {
        validate_key(key)?;

        let size = content.len() as u64;
        let location = Path::from(key);
        let content_type = content_type.unwrap_or(&self.default_content_type);

        let mut attributes = Attributes::new();
        attributes.insert(Attribute::ContentType, content_type.to_string().into());

        let start = std::time::Instant::now();

        let result: ObjectResult<_> = self
            .store
            .put_opts(
                &location,
                PutPayload::from(content),
                PutOptions::from(attributes),
            )
            .await;

        result.map_err(|e| {
            tracing::error!(
                error = %e,
                bucket = %self.bucket,
                key = %key,
                size_bytes = size,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "Object store put failed"
            );
            StorageError::Write(e.to_string())
        })?;

        tracing::info!(
            bucket = %self.bucket,
            key = %key,
            content_type = %content_type,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Object store put successful"
        );

        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        join_url(&self.base_url, key)
    }

    async fn get(&self, key: &str) -> StorageResult<Bytes> {
        validate_key(key)?;

        let start = std::time::Instant::now();
        let location = Path::from(key);

        let result: ObjectResult<_> = self
            .store
            .get_opts(&location, GetOptions::default())
            .await;

        let result = result.map_err(|e| match e {
            ObjectStoreError::NotFound { .. } => StorageError::NotFound(key.to_string()),
            other => {
                tracing::error!(
                    error = %other,
                    bucket = %self.bucket,
                    key = %key,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "Object store get failed"
                );
                StorageError::Read(other.to_string())
            }
        })?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| StorageError::Read(e.to_string()))?;

        tracing::debug!(
            bucket = %self.bucket,
            key = %key,
            size_bytes = bytes.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Object store get successful"
        );

        Ok(bytes)
    }

    async fn exists(&self, key: &str) -> StorageResult<bool> {
        validate_key(key)?;

        let location = Path::from(key);
        let options = GetOptions {
            head: true,
            ..Default::default()
        };

        match self.store.get_opts(&location, options).await {
            Ok(_) => Ok(true),
            Err(ObjectStoreError::NotFound { .. }) => Ok(false),
            Err(e) => Err(StorageError::Read(e.to_string())),
        }
    }

    fn backend_type(&self) -> StorageBackend {
        self.backend
    }
}

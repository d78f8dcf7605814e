//! Blob store abstraction trait
//!
//! This module defines the BlobStore trait that all storage backends must implement.

use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Storage operation errors
///
/// `Write` and `Read` carry the backend's message unmodified so callers can surface it as-is.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{0}")]
    Write(String),

    #[error("{0}")]
    Read(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Blob store abstraction trait
///
/// All storage backends (object stores, local filesystem) implement this trait so the upload
/// workflow never couples to a specific backend.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Write `content` under `key`, replacing any existing object with the same key.
    ///
    /// `content_type` is stored where the backend supports it; backends fall back to their
    /// configured default when it is `None`.
    async fn put(&self, key: &str, content: Bytes, content_type: Option<&str>)
        -> StorageResult<()>;

    /// Public retrieval URL for `key`: the backend's base location joined with the key.
    ///
    /// Pure computation. The object is never checked for existence.
    fn public_url(&self, key: &str) -> String;

    /// Read the object stored under `key`
    async fn get(&self, key: &str) -> StorageResult<Bytes>;

    /// Check if an object exists
    async fn exists(&self, key: &str) -> StorageResult<bool>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}

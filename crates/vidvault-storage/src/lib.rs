//! Vidvault Storage Library
//!
//! This crate provides the blob store abstraction and its implementations: any
//! `object_store` backend (Amazon S3 and S3-compatible providers in production, in-memory in
//! tests) and the local filesystem.
//!
//! # Storage key format
//!
//! Keys are flat object names equal to the video id, e.g. `{uuid}.mp4`. Keys must not be
//! empty, contain `..` or start with `/`. Validation is centralized in the `keys` module so
//! all backends stay consistent.

pub mod factory;
pub(crate) mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod object;
pub mod traits;

// Re-export commonly used types
pub use factory::create_blob_store;
#[cfg(feature = "storage-local")]
pub use local::LocalBlobStore;
#[cfg(feature = "storage-s3")]
pub use object::ObjectBlobStore;
pub use traits::{BlobStore, StorageError, StorageResult};
pub use vidvault_core::StorageBackend;

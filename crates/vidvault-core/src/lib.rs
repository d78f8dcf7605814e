//! Vidvault Core Library
//!
//! This crate provides the domain models, error types, configuration and identifier
//! generation shared across all Vidvault components.

pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::{BaseConfig, Config, LogFormat};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use ids::{IdGenerator, UuidGenerator};
pub use models::{UploadReceipt, VideoRecord};
pub use storage_types::{MetadataBackend, StorageBackend};

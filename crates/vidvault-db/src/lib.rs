//! Vidvault metadata store
//!
//! This crate defines the `MetadataStore` trait through which video records are written and
//! enumerated, plus its Postgres and in-memory implementations. Enumeration is page-based:
//! each page carries an optional continuation cursor and `scan_all` follows it to the end.

pub mod db;
pub mod traits;

// Re-export commonly used types
pub use db::{MemoryMetadataStore, PostgresMetadataStore};
pub use traits::{MetadataError, MetadataResult, MetadataStore, ScanPage};
pub use vidvault_core::MetadataBackend;

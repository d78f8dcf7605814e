//! Metadata store backends
//
// Postgres-backed video table (production)
pub mod video;
//
// Process-local store (development and tests)
pub mod memory;

pub use memory::MemoryMetadataStore;
pub use video::PostgresMetadataStore;

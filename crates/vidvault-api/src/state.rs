//! Application state shared by all handlers.

use std::sync::Arc;
use vidvault_core::{Config, IdGenerator};
use vidvault_db::MetadataStore;
use vidvault_storage::BlobStore;

/// Store clients are created once at startup and live for the whole process.
pub struct AppState {
    pub config: Config,
    pub blob_store: Arc<dyn BlobStore>,
    pub metadata_store: Arc<dyn MetadataStore>,
    pub id_generator: Arc<dyn IdGenerator>,
}

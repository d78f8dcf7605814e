//! Metadata store abstraction trait

use crate::MetadataBackend;
use async_trait::async_trait;
use thiserror::Error;
use vidvault_core::VideoRecord;

/// Metadata store errors
///
/// `Write` and `Read` carry the backend's message unmodified.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("{0}")]
    Write(String),

    #[error("{0}")]
    Read(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for metadata operations
pub type MetadataResult<T> = Result<T, MetadataError>;

/// One enumeration page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanPage {
    pub records: Vec<VideoRecord>,
    /// `video_id` to resume after; `None` once the table is exhausted.
    pub next_cursor: Option<String>,
}

/// Metadata store abstraction trait
#[async_trait]
pub trait MetadataStore: Send + Sync {
    /// Write `record`, replacing any existing record with the same `video_id`.
    async fn put(&self, record: &VideoRecord) -> MetadataResult<()>;

    /// Fetch up to `limit` records ordered by `video_id`, starting after `start_after`.
    async fn scan_page(&self, start_after: Option<&str>, limit: u32) -> MetadataResult<ScanPage>;

    /// Rows requested per page by [`MetadataStore::scan_all`].
    fn page_size(&self) -> u32;

    /// Enumerate every record, following continuation cursors until none remains.
    async fn scan_all(&self) -> MetadataResult<Vec<VideoRecord>> {
        let mut records = Vec::new();
        let mut cursor: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page = self.scan_page(cursor.as_deref(), self.page_size()).await?;
            pages += 1;
            records.extend(page.records);

            match page.next_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        tracing::debug!(pages, records = records.len(), "Metadata scan complete");
        Ok(records)
    }

    /// Check that the backend is reachable
    async fn ping(&self) -> MetadataResult<()>;

    /// Get the metadata backend type
    fn backend_type(&self) -> MetadataBackend;
}

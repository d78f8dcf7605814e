use crate::traits::{MetadataResult, MetadataStore, ScanPage};
use crate::MetadataBackend;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::ops::Bound;
use tokio::sync::RwLock;
use vidvault_core::VideoRecord;

/// Process-local metadata store keyed by `video_id`
///
/// Honours the same page and cursor contract as the Postgres store. Contents are lost on
/// restart.
pub struct MemoryMetadataStore {
    records: RwLock<BTreeMap<String, VideoRecord>>,
    page_size: u32,
}

impl MemoryMetadataStore {
    pub fn new(page_size: u32) -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            page_size: page_size.max(1),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl MetadataStore for MemoryMetadataStore {
    async fn put(&self, record: &VideoRecord) -> MetadataResult<()> {
        self.records
            .write()
            .await
            .insert(record.video_id.clone(), record.clone());

        tracing::debug!(video_id = %record.video_id, "Memory metadata put");
        Ok(())
    }

    async fn scan_page(&self, start_after: Option<&str>, limit: u32) -> MetadataResult<ScanPage> {
        let limit = limit.max(1) as usize;
        let records = self.records.read().await;

        let lower = match start_after {
            Some(cursor) => Bound::Excluded(cursor.to_string()),
            None => Bound::Unbounded,
        };

        let page: Vec<VideoRecord> = records
            .range((lower, Bound::Unbounded))
            .take(limit)
            .map(|(_, record)| record.clone())
            .collect();

        let next_cursor = if page.len() == limit {
            page.last().map(|record| record.video_id.clone())
        } else {
            None
        };

        Ok(ScanPage {
            records: page,
            next_cursor,
        })
    }

    fn page_size(&self) -> u32 {
        self.page_size
    }

    async fn ping(&self) -> MetadataResult<()> {
        Ok(())
    }

    fn backend_type(&self) -> MetadataBackend {
        MetadataBackend::Memory
    }
}

//! Store doubles for failure injection and call counting.

use async_trait::async_trait;
use bytes::Bytes;
use std::sync::atomic::{AtomicUsize, Ordering};
use vidvault_core::VideoRecord;
use vidvault_db::{
    MemoryMetadataStore, MetadataBackend, MetadataError, MetadataResult, MetadataStore, ScanPage,
};
use vidvault_storage::{BlobStore, StorageBackend, StorageError, StorageResult};

/// Blob store whose writes always fail with `message` (e.g. a quota fault).
pub struct FailingBlobStore {
    pub message: String,
    pub puts: AtomicUsize,
}

impl FailingBlobStore {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            puts: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl BlobStore for FailingBlobStore {
    async fn put(&self, _key: &str, _content: Bytes, _: Option<&str>) -> StorageResult<()> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::Write(self.message.clone()))
    }

    fn public_url(&self, key: &str) -> String {
        format!("https://bucket.example/{}", key)
    }

    async fn get(&self, key: &str) -> StorageResult<Bytes> {
        Err(StorageError::NotFound(key.to_string()))
    }

    async fn exists(&self, _key: &str) -> StorageResult<bool> {
        Err(StorageError::Read(self.message.clone()))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Memory
    }
}

/// In-memory metadata store that counts calls and can fail reads or writes.
pub struct CountingMetadataStore {
    inner: MemoryMetadataStore,
    pub puts: AtomicUsize,
    pub page_scans: AtomicUsize,
    pub fail_writes: Option<String>,
    pub fail_reads: Option<String>,
}

impl CountingMetadataStore {
    pub fn new(page_size: u32) -> Self {
        Self {
            inner: MemoryMetadataStore::new(page_size),
            puts: AtomicUsize::new(0),
            page_scans: AtomicUsize::new(0),
            fail_writes: None,
            fail_reads: None,
        }
    }

    pub fn failing_writes(page_size: u32, message: impl Into<String>) -> Self {
        Self {
            fail_writes: Some(message.into()),
            ..Self::new(page_size)
        }
    }

    pub fn failing_reads(page_size: u32, message: impl Into<String>) -> Self {
        Self {
            fail_reads: Some(message.into()),
            ..Self::new(page_size)
        }
    }

    pub fn put_count(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    pub fn page_scan_count(&self) -> usize {
        self.page_scans.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetadataStore for CountingMetadataStore {
    async fn put(&self, record: &VideoRecord) -> MetadataResult<()> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.fail_writes {
            return Err(MetadataError::Write(message.clone()));
        }
        self.inner.put(record).await
    }

    async fn scan_page(&self, start_after: Option<&str>, limit: u32) -> MetadataResult<ScanPage> {
        self.page_scans.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.fail_reads {
            return Err(MetadataError::Read(message.clone()));
        }
        self.inner.scan_page(start_after, limit).await
    }

    fn page_size(&self) -> u32 {
        self.inner.page_size()
    }

    async fn ping(&self) -> MetadataResult<()> {
        match &self.fail_reads {
            Some(message) => Err(MetadataError::Read(message.clone())),
            None => Ok(()),
        }
    }

    fn backend_type(&self) -> MetadataBackend {
        MetadataBackend::Memory
    }
}

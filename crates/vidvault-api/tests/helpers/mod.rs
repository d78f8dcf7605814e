//! Test helpers: build AppState and router for integration tests.
//!
//! Everything runs in-process against in-memory stores; no external services are needed.

#![allow(dead_code)]

pub mod stores;

use axum_test::TestServer;
use object_store::memory::InMemory;
use std::collections::HashMap;
use std::sync::Arc;
use vidvault_api::setup::routes;
use vidvault_api::state::AppState;
use vidvault_core::{Config, UuidGenerator};
use vidvault_storage::{BlobStore, ObjectBlobStore};

pub use stores::CountingMetadataStore;

/// Base location every test blob store reports.
pub const BASE_URL: &str = "https://bucket.example";

pub struct TestApp {
    pub server: TestServer,
    pub blob_store: Arc<dyn BlobStore>,
    pub metadata_store: Arc<CountingMetadataStore>,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

/// App backed by an in-memory object store and metadata store.
pub fn setup_test_app() -> TestApp {
    setup_test_app_with(memory_blob_store(), Arc::new(CountingMetadataStore::new(1000)))
}

pub fn setup_test_app_with(
    blob_store: Arc<dyn BlobStore>,
    metadata_store: Arc<CountingMetadataStore>,
) -> TestApp {
    setup_test_app_with_config(test_config(&[]), blob_store, metadata_store)
}

pub fn setup_test_app_with_config(
    config: Config,
    blob_store: Arc<dyn BlobStore>,
    metadata_store: Arc<CountingMetadataStore>,
) -> TestApp {
    let state = Arc::new(AppState {
        config: config.clone(),
        blob_store: blob_store.clone(),
        metadata_store: metadata_store.clone(),
        id_generator: Arc::new(UuidGenerator),
    });

    let app = routes::setup_routes(&config, state).expect("Failed to setup routes");
    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        blob_store,
        metadata_store,
    }
}

pub fn memory_blob_store() -> Arc<dyn BlobStore> {
    Arc::new(ObjectBlobStore::with_store(
        Arc::new(InMemory::new()),
        "videos",
        BASE_URL,
    ))
}

/// Memory-backed configuration; `overrides` replace or add variables.
pub fn test_config(overrides: &[(&str, &str)]) -> Config {
    let mut vars: HashMap<String, String> = [
        ("STORAGE_BACKEND", "memory"),
        ("METADATA_BACKEND", "memory"),
        ("PUBLIC_BASE_URL", BASE_URL),
        ("CORS_ORIGINS", "*"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    for (k, v) in overrides {
        vars.insert(k.to_string(), v.to_string());
    }

    Config::from_lookup(move |key| vars.get(key).cloned()).expect("Invalid test config")
}

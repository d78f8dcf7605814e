//! Upload API integration tests.
//!
//! Run with: `cargo test -p vidvault-api --test upload_test`

mod helpers;

use axum::http::StatusCode;
use bytes::Bytes;
use helpers::stores::FailingBlobStore;
use helpers::{
    memory_blob_store, setup_test_app, setup_test_app_with, setup_test_app_with_config,
    test_config, CountingMetadataStore, BASE_URL,
};
use serde_json::{json, Value};
use std::sync::Arc;

#[tokio::test]
async fn test_upload_then_fetch_returns_record() {
    let app = setup_test_app();
    let client = app.client();

    let response = client
        .post("/upload")
        .bytes(Bytes::from_static(b"abc"))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let receipt: Value = response.json();
    assert_eq!(receipt["message"], "Video uploaded successfully!");

    let video_id = receipt["videoId"].as_str().unwrap().to_string();
    let uuid_part = video_id.strip_suffix(".mp4").unwrap();
    assert!(uuid::Uuid::parse_str(uuid_part).is_ok());
    assert_eq!(receipt["url"], format!("{}/{}", BASE_URL, video_id));

    assert_eq!(
        app.blob_store.get(&video_id).await.unwrap(),
        Bytes::from_static(b"abc")
    );

    let listed: Value = client.get("/fetch").await.json();
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["videoId"], video_id);
    assert_eq!(listed[0]["url"], receipt["url"]);
}

#[tokio::test]
async fn test_upload_keeps_content_type_and_decoded_title() {
    let app = setup_test_app();
    let client = app.client();

    let response = client
        .post("/upload")
        .add_header("Content-Type", "video/webm")
        .add_header("X-File-Name", "my%20holiday%20clip.webm")
        .bytes(Bytes::from_static(b"webm-bytes"))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let listed: Value = client.get("/fetch").await.json();
    assert_eq!(listed[0]["contentType"], "video/webm");
    assert_eq!(listed[0]["title"], "my holiday clip.webm");
}

#[tokio::test]
async fn test_consecutive_uploads_get_distinct_ids() {
    let app = setup_test_app();
    let client = app.client();

    let first: Value = client.post("/upload").bytes(Bytes::from_static(b"a")).await.json();
    let second: Value = client.post("/upload").bytes(Bytes::from_static(b"a")).await.json();

    assert_ne!(first["videoId"], second["videoId"]);
    assert_eq!(app.metadata_store.put_count(), 2);
}

#[tokio::test]
async fn test_empty_body_is_accepted() {
    let app = setup_test_app();

    let response = app.client().post("/upload").bytes(Bytes::new()).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(app.metadata_store.put_count(), 1);
}

#[tokio::test]
async fn test_blob_quota_failure_skips_metadata() {
    let blob_store = Arc::new(FailingBlobStore::new(
        "QuotaExceeded: storage quota exceeded for bucket",
    ));
    let metadata_store = Arc::new(CountingMetadataStore::new(1000));
    let app = setup_test_app_with(blob_store.clone(), metadata_store.clone());

    let response = app
        .client()
        .post("/upload")
        .bytes(Bytes::from_static(b"abc"))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "QuotaExceeded: storage quota exceeded for bucket" })
    );
    assert_eq!(blob_store.puts.load(std::sync::atomic::Ordering::SeqCst), 1);
    assert_eq!(metadata_store.put_count(), 0);
}

#[tokio::test]
async fn test_metadata_failure_reports_error_and_orphans_blob() {
    let metadata_store = Arc::new(CountingMetadataStore::failing_writes(
        1000,
        "ProvisionedThroughputExceededException",
    ));
    let app = setup_test_app_with(memory_blob_store(), metadata_store.clone());

    let response = app
        .client()
        .post("/upload")
        .bytes(Bytes::from_static(b"abc"))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "ProvisionedThroughputExceededException" })
    );
    assert_eq!(metadata_store.put_count(), 1);

    // The listing stays empty even though the blob was written.
    let listed: Value = app.client().get("/fetch").await.json();
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let config = test_config(&[("MAX_UPLOAD_SIZE_MB", "1")]);
    let metadata_store = Arc::new(CountingMetadataStore::new(1000));
    let app = setup_test_app_with_config(config, memory_blob_store(), metadata_store.clone());

    let response = app
        .client()
        .post("/upload")
        .bytes(Bytes::from(vec![0u8; 1024 * 1024 + 1]))
        .await;

    assert_eq!(response.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(metadata_store.put_count(), 0);
}

#[tokio::test]
async fn test_cors_and_request_id_headers() {
    let app = setup_test_app();

    let response = app
        .client()
        .post("/upload")
        .add_header("Origin", "https://frontend.example")
        .bytes(Bytes::from_static(b"abc"))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.header("access-control-allow-origin"), "*");
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_upload_preflight_allows_post_and_file_name_header() {
    let app = setup_test_app();

    let response = app
        .client()
        .method(axum::http::Method::OPTIONS, "/upload")
        .add_header("Origin", "https://frontend.example")
        .add_header("Access-Control-Request-Method", "POST")
        .add_header("Access-Control-Request-Headers", "content-type,x-file-name")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.header("access-control-allow-origin"), "*");

    let methods = response.header("access-control-allow-methods");
    assert!(methods.to_str().unwrap().contains("POST"));

    let headers = response.header("access-control-allow-headers");
    assert!(headers.to_str().unwrap().contains("x-file-name"));
}

#[tokio::test]
async fn test_explicit_origin_is_echoed() {
    let config = test_config(&[("CORS_ORIGINS", "https://frontend.example")]);
    let app = setup_test_app_with_config(
        config,
        memory_blob_store(),
        Arc::new(CountingMetadataStore::new(1000)),
    );

    let response = app
        .client()
        .get("/fetch")
        .add_header("Origin", "https://frontend.example")
        .await;

    assert_eq!(
        response.header("access-control-allow-origin"),
        "https://frontend.example"
    );
}

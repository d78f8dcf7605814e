use crate::error::HttpAppError;
use crate::services::{UploadRequest, UploadWorkflow};
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap},
    Json,
};
use bytes::Bytes;
use percent_encoding::percent_decode_str;
use std::sync::Arc;
use vidvault_core::constants::FILE_NAME_HEADER;
use vidvault_core::UploadReceipt;

/// Accept a raw video body and register it.
///
/// `Content-Type` is kept as the content-type hint and the percent-encoded `X-File-Name`
/// becomes the record title. Neither header is required.
#[tracing::instrument(
    skip(state, headers, body),
    fields(size_bytes = body.len(), operation = "upload_video")
)]
pub async fn upload_video(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<UploadReceipt>, HttpAppError> {
    let request = UploadRequest {
        content: body,
        content_type: header_str(&headers, CONTENT_TYPE.as_str()).map(String::from),
        title: header_str(&headers, FILE_NAME_HEADER).map(decode_file_name),
    };

    let workflow = UploadWorkflow {
        blob_store: state.blob_store.as_ref(),
        metadata_store: state.metadata_store.as_ref(),
        id_generator: state.id_generator.as_ref(),
        video_extension: state.config.video_extension(),
    };

    let receipt = workflow.run(request).await?;
    Ok(Json(receipt))
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn decode_file_name(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

use crate::error::HttpAppError;
use crate::services::list_videos;
use crate::state::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;
use vidvault_core::VideoRecord;

/// Return every stored video record as a bare JSON array.
#[tracing::instrument(skip(state), fields(operation = "list_videos"))]
pub async fn fetch_videos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<VideoRecord>>, HttpAppError> {
    let records = list_videos(state.metadata_store.as_ref()).await?;
    Ok(Json(records))
}

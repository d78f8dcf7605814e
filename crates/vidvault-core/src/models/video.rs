use serde::{Deserialize, Serialize};

use crate::constants::UPLOAD_SUCCESS_MESSAGE;

/// Metadata record for one uploaded video.
///
/// `video_id` doubles as the blob store key. `url` is derived from the blob store's base
/// location and the id at upload time and is never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    pub video_id: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl VideoRecord {
    pub fn new(video_id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
            url: url.into(),
            content_type: None,
            title: None,
        }
    }

    pub fn with_content_type(mut self, content_type: Option<String>) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }
}

/// Body of a successful upload response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReceipt {
    pub message: String,
    pub url: String,
    pub video_id: String,
}

impl UploadReceipt {
    pub fn new(video_id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            message: UPLOAD_SUCCESS_MESSAGE.to_string(),
            url: url.into(),
            video_id: video_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minimal_record_serializes_to_id_and_url_only() {
        let record = VideoRecord::new("a.mp4", "https://bucket.example/a.mp4");
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({ "videoId": "a.mp4", "url": "https://bucket.example/a.mp4" })
        );
    }

    #[test]
    fn optional_fields_use_camel_case() {
        let record = VideoRecord::new("a.mp4", "u")
            .with_content_type(Some("video/webm".to_string()))
            .with_title(Some("holiday.webm".to_string()));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["contentType"], "video/webm");
        assert_eq!(value["title"], "holiday.webm");
    }

    #[test]
    fn record_without_optional_fields_deserializes() {
        let record: VideoRecord =
            serde_json::from_value(json!({ "videoId": "x.mp4", "url": "u" })).unwrap();
        assert_eq!(record, VideoRecord::new("x.mp4", "u"));
    }

    #[test]
    fn receipt_carries_fixed_message() {
        let receipt = UploadReceipt::new("x.mp4", "https://b/x.mp4");
        let value = serde_json::to_value(&receipt).unwrap();
        assert_eq!(value["message"], "Video uploaded successfully!");
        assert_eq!(value["videoId"], "x.mp4");
        assert_eq!(value["url"], "https://b/x.mp4");
    }
}

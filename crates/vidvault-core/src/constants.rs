//! Shared defaults.

/// Extension appended to every generated video id.
pub const DEFAULT_VIDEO_EXTENSION: &str = "mp4";

/// Content type written to the blob store when the client sends no hint.
pub const DEFAULT_CONTENT_TYPE: &str = "video/mp4";

/// Metadata table name when `TABLE_NAME` is not set.
pub const DEFAULT_TABLE_NAME: &str = "videos";

/// Message returned alongside the URL of a successful upload.
pub const UPLOAD_SUCCESS_MESSAGE: &str = "Video uploaded successfully!";

/// Request header carrying the client's original (percent-encoded) filename.
pub const FILE_NAME_HEADER: &str = "X-File-Name";

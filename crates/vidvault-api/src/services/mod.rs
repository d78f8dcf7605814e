//! Request-scoped workflows run by the HTTP handlers.

pub mod listing;
pub mod upload;

pub use listing::{list_videos, ListError};
pub use upload::{UploadError, UploadRequest, UploadWorkflow};

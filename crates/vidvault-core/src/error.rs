//! Error types module
//!
//! All errors that reach the HTTP boundary are unified under `AppError`. Store and workflow
//! errors carry the underlying service's message, which is passed through to the client
//! unmodified.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for store and unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "UPLOAD_FAILED")
    fn error_code(&self) -> &'static str;

    /// Client-facing message
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Blob or metadata write failed during an upload.
    #[error("{0}")]
    UploadFailed(String),

    /// Metadata scan failed during a listing.
    #[error("{0}")]
    ListFailed(String),
}

impl AppError {
    /// Get the error type name for logging
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::UploadFailed(_) => "UploadFailed",
            AppError::ListFailed(_) => "ListFailed",
        }
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::UploadFailed(_) | AppError::ListFailed(_) => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::UploadFailed(_) => "UPLOAD_FAILED",
            AppError::ListFailed(_) => "LIST_FAILED",
        }
    }

    fn client_message(&self) -> String {
        match self {
            AppError::UploadFailed(msg) | AppError::ListFailed(msg) => msg.clone(),
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::UploadFailed(_) | AppError::ListFailed(_) => LogLevel::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_failed_passes_message_through() {
        let err = AppError::UploadFailed("QuotaExceeded: bucket is full".to_string());
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.error_code(), "UPLOAD_FAILED");
        assert_eq!(err.client_message(), "QuotaExceeded: bucket is full");
        assert_eq!(err.to_string(), "QuotaExceeded: bucket is full");
        assert_eq!(err.log_level(), LogLevel::Error);
    }

    #[test]
    fn test_list_failed_metadata() {
        let err = AppError::ListFailed("connection reset".to_string());
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.error_code(), "LIST_FAILED");
        assert_eq!(err.client_message(), "connection reset");
        assert_eq!(err.error_type(), "ListFailed");
    }
}

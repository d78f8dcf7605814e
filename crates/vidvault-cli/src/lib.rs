//! Command-line client for the vidvault API.
//!
//! Replaces the browser upload page: `vidvault upload <file>` posts raw bytes to `/upload`,
//! `vidvault list` renders the `/fetch` listing.

pub mod api_client;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use std::path::Path;
use vidvault_core::constants::DEFAULT_CONTENT_TYPE;
use vidvault_core::VideoRecord;

/// Shown in listings for records uploaded without a file name.
pub const UNTITLED_VIDEO: &str = "Untitled Video";

/// Initialize tracing for the CLI binary.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Guess a video content type from the file extension, falling back to `video/mp4`.
pub fn guess_content_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("mp4") | Some("m4v") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mov") => "video/quicktime",
        Some("mkv") => "video/x-matroska",
        Some("avi") => "video/x-msvideo",
        Some("ogv") => "video/ogg",
        Some("mpeg") | Some("mpg") => "video/mpeg",
        _ => DEFAULT_CONTENT_TYPE,
    }
}

/// Percent-encode a file name for the `X-File-Name` header.
pub fn encode_file_name(name: &str) -> String {
    utf8_percent_encode(name, NON_ALPHANUMERIC).to_string()
}

pub fn display_title(record: &VideoRecord) -> &str {
    record.title.as_deref().unwrap_or(UNTITLED_VIDEO)
}

/// Truncate a string to max_len characters, appending "..." if truncated.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_follows_extension() {
        assert_eq!(guess_content_type(Path::new("clip.webm")), "video/webm");
        assert_eq!(guess_content_type(Path::new("CLIP.MOV")), "video/quicktime");
        assert_eq!(guess_content_type(Path::new("dir/clip.mp4")), "video/mp4");
    }

    #[test]
    fn unknown_extension_defaults_to_mp4() {
        assert_eq!(guess_content_type(Path::new("clip")), "video/mp4");
        assert_eq!(guess_content_type(Path::new("clip.xyz")), "video/mp4");
    }

    #[test]
    fn file_name_is_header_safe() {
        assert_eq!(encode_file_name("my clip.mp4"), "my%20clip%2Emp4");
        assert_eq!(encode_file_name("été.webm"), "%C3%A9t%C3%A9%2Ewebm");
    }

    #[test]
    fn missing_title_is_untitled() {
        let record = VideoRecord::new("a.mp4", "https://bucket.example/a.mp4");
        assert_eq!(display_title(&record), "Untitled Video");

        let titled = record.with_title(Some("holiday".to_string()));
        assert_eq!(display_title(&titled), "holiday");
    }

    #[test]
    fn truncate_string_long() {
        assert_eq!(truncate_string("hello", 10), "hello");
        assert_eq!(truncate_string("hello world", 8), "hello...");
        assert_eq!(truncate_string("hello", 0), "...");
    }
}

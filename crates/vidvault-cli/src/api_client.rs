//! HTTP client for the vidvault API.

use anyhow::{Context, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::Duration;
use vidvault_core::constants::FILE_NAME_HEADER;
use vidvault_core::{UploadReceipt, VideoRecord};

use crate::{encode_file_name, guess_content_type};

const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(300))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create client from environment: VIDVAULT_API_URL (or API_URL), defaulting to localhost.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("VIDVAULT_API_URL")
            .or_else(|_| std::env::var("API_URL"))
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Upload a local file as the raw request body.
    pub async fn upload_file(&self, file_path: &Path) -> Result<UploadReceipt> {
        let content = tokio::fs::read(file_path)
            .await
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?;

        let file_name = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .map(encode_file_name);

        let mut request = self
            .client
            .post(self.build_url("/upload"))
            .header(reqwest::header::CONTENT_TYPE, guess_content_type(file_path))
            .body(content);

        if let Some(name) = file_name {
            request = request.header(FILE_NAME_HEADER, name);
        }

        tracing::debug!(path = %file_path.display(), "Uploading video");

        let response = request.send().await.context("Failed to send request")?;
        parse_response(response).await
    }

    /// Fetch every video record.
    pub async fn list_videos(&self) -> Result<Vec<VideoRecord>> {
        let response = self
            .client
            .get(self.build_url("/fetch"))
            .send()
            .await
            .context("Failed to send request")?;

        parse_response(response).await
    }
}

/// Deserialize a success body, or surface the server's `{"error": ..}` message.
async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = serde_json::from_str::<serde_json::Value>(&error_text)
            .ok()
            .and_then(|body| body.get("error").and_then(|e| e.as_str()).map(String::from))
            .unwrap_or(error_text);

        return Err(anyhow::anyhow!(
            "API request failed with status {}: {}",
            status,
            message
        ));
    }

    response
        .json::<T>()
        .await
        .context("Failed to parse response")
}

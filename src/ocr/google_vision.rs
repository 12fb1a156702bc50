//! Google Cloud Vision client for text detection
//!
//! Uses the REST `images:annotate` endpoint with an API key.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use super::TextDetector;
use crate::error::ClientError;

pub const DEFAULT_VISION_URL: &str = "https://vision.googleapis.com/v1";

#[derive(Debug, Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    responses: Vec<AnnotateImageResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnnotateImageResponse {
    #[serde(default)]
    text_annotations: Vec<TextAnnotation>,
    #[serde(default)]
    error: Option<Status>,
}

#[derive(Debug, Deserialize)]
struct TextAnnotation {
    description: String,
}

#[derive(Debug, Deserialize)]
struct Status {
    #[serde(default)]
    message: String,
}

/// Google Cloud Vision API client
pub struct GoogleVisionClient {
    pub(crate) client: reqwest::Client,
    pub(crate) api_key: String,
    pub(crate) base_url: String,
}

impl GoogleVisionClient {
    /// Creates a client against the given API base URL
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self, ClientError> {
        log::info!("Creating Google Vision client ({})", base_url);
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[async_trait]
impl TextDetector for GoogleVisionClient {
    async fn extract_full_text(&self, image_bytes: &[u8]) -> Result<Option<String>, ClientError> {
        let url = format!("{}/images:annotate", self.base_url);
        let body = json!({
            "requests": [{
                "image": { "content": STANDARD.encode(image_bytes) },
                "features": [{ "type": "TEXT_DETECTION" }]
            }]
        });

        log::debug!("Requesting text detection for {} bytes", image_bytes.len());

        let response = self
            .client
            .post(&url)
            .query(&[("key", &self.api_key)])
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::HttpStatus(response.status()));
        }

        let payload: AnnotateResponse = serde_json::from_slice(&response.bytes().await?)?;
        let Some(first) = payload.responses.into_iter().next() else {
            return Ok(None);
        };

        if let Some(status) = first.error.filter(|s| !s.message.is_empty()) {
            return Err(ClientError::Api(format!(
                "Google Vision API error: {}",
                status.message
            )));
        }

        // First annotation holds the full text, the rest are single words
        Ok(first
            .text_annotations
            .into_iter()
            .next()
            .map(|a| a.description))
    }
}

#[cfg(test)]
#[path = "google_vision_tests.rs"]
mod tests;

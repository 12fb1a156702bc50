//! OCR collaborator and card identity extraction

mod google_vision;
mod service;

pub use google_vision::{GoogleVisionClient, DEFAULT_VISION_URL};
pub use service::{OcrService, MIN_TEXT_LEN};

use crate::error::ClientError;
use async_trait::async_trait;

/// Provider that turns an image into the full block of text printed on it
#[async_trait]
pub trait TextDetector: Send + Sync {
    /// Returns `None` when the provider detected no text at all
    async fn extract_full_text(&self, image_bytes: &[u8]) -> Result<Option<String>, ClientError>;
}

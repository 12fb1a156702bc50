//! Card identity extraction: OCR call plus text parsing and validation

use log::{debug, info, warn};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

use super::TextDetector;
use crate::error::{details, ClientError, Result, ScanError};
use crate::models::CardIdentity;
use crate::parser::CardTextParser;

/// Trimmed OCR text shorter than this cannot describe a card
pub const MIN_TEXT_LEN: usize = 10;

/// Characters of raw text echoed back when no name could be found
const TEXT_PREVIEW_LEN: usize = 200;

/// Extracts a [`CardIdentity`] from a card photo
pub struct OcrService {
    detector: Arc<dyn TextDetector>,
    parser: CardTextParser,
    timeout: Duration,
}

impl OcrService {
    pub fn new(detector: Arc<dyn TextDetector>, parser: CardTextParser, timeout: Duration) -> Self {
        Self {
            detector,
            parser,
            timeout,
        }
    }

    /// Runs OCR on the image and parses the card identity from its text.
    ///
    /// Fails with [`ScanError::OcrFailed`] when the provider errors or times
    /// out, when too little text comes back, or when no name is recognised.
    pub async fn extract_card_info(&self, image_bytes: &[u8]) -> Result<CardIdentity> {
        let full_text = self.detect_text(image_bytes).await.map_err(|e| {
            warn!("OCR provider failed: {}", e);
            ScanError::ocr_failed(
                format!("OCR processing failed: {}", e),
                details([("error", json!(e.to_string()))]),
            )
        })?;

        let text = match full_text {
            Some(text) if text.trim().chars().count() >= MIN_TEXT_LEN => text,
            other => {
                let detected_len = other.map(|t| t.chars().count()).unwrap_or(0);
                warn!("Insufficient OCR text ({} characters)", detected_len);
                return Err(ScanError::ocr_failed(
                    "Could not detect sufficient text in image. \
                     Please ensure the card is clearly visible and well-lit.",
                    details([("detected_text_length", json!(detected_len))]),
                ));
            }
        };

        debug!("OCR returned {} characters", text.len());

        let parsed = self.parser.parse(&text);
        let Some(identity) = parsed.clone().into_identity() else {
            warn!("No card name found in OCR text");
            let preview: String = text.chars().take(TEXT_PREVIEW_LEN).collect();
            return Err(ScanError::ocr_failed(
                "Could not identify card name from image. \
                 Please ensure the card name is clearly visible.",
                details([
                    ("detected_text", json!(preview)),
                    (
                        "parsed_data",
                        serde_json::to_value(&parsed).unwrap_or(Value::Null),
                    ),
                ]),
            ));
        };

        info!(
            "Identified card '{}' (set: {:?}, number: {:?}, rarity: {:?})",
            identity.name, identity.set, identity.number, identity.rarity
        );
        Ok(identity)
    }

    async fn detect_text(
        &self,
        image_bytes: &[u8],
    ) -> std::result::Result<Option<String>, ClientError> {
        tokio::time::timeout(self.timeout, self.detector.extract_full_text(image_bytes))
            .await
            .map_err(|_| ClientError::Timeout(self.timeout))?
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;

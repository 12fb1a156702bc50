//! Full scan pipeline: image → identity → pricing

use log::info;
use std::time::Instant;

use crate::error::Result;
use crate::models::{ScanMetadata, ScanResult};
use crate::ocr::OcrService;
use crate::pricing::PriceService;

/// Runs card identification and pricing for one image
pub struct CardScanner {
    ocr: OcrService,
    pricing: PriceService,
}

impl CardScanner {
    pub fn new(ocr: OcrService, pricing: PriceService) -> Self {
        Self { ocr, pricing }
    }

    /// Scans a card image. Pricing only starts once the card is identified;
    /// the first failing stage ends the scan.
    pub async fn scan(&self, image_bytes: &[u8]) -> Result<ScanResult> {
        let started = Instant::now();

        let identity = self.ocr.extract_card_info(image_bytes).await?;
        let pricing = self.pricing.get_pricing(&identity).await?;

        let metadata = ScanMetadata {
            scan_time_ms: started.elapsed().as_millis() as u64,
            confidence_score: identity.completeness(),
        };

        info!(
            "Scanned '{}' in {}ms ({} price source(s))",
            identity.name,
            metadata.scan_time_ms,
            pricing.quotes.len()
        );

        Ok(ScanResult {
            identity,
            pricing,
            metadata,
        })
    }
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;

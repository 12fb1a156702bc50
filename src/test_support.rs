//! Canned collaborators shared by pipeline and router tests

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::error::ClientError;
use crate::ocr::{OcrService, TextDetector};
use crate::parser::CardTextParser;
use crate::pricing::{CardCatalog, CatalogCard, PriceService};
use crate::scanner::CardScanner;

/// Detector that always returns the same text
pub struct StaticDetector(pub Option<String>);

#[async_trait]
impl TextDetector for StaticDetector {
    async fn extract_full_text(&self, _image_bytes: &[u8]) -> Result<Option<String>, ClientError> {
        Ok(self.0.clone())
    }
}

/// Catalog that always returns the same record (or no match)
pub struct StaticCatalog(pub Option<serde_json::Value>);

#[async_trait]
impl CardCatalog for StaticCatalog {
    async fn search_card(
        &self,
        _name: &str,
        _set: Option<&str>,
        _number: Option<&str>,
    ) -> Result<Option<CatalogCard>, ClientError> {
        match &self.0 {
            Some(json) => Ok(Some(serde_json::from_value(json.clone())?)),
            None => Ok(None),
        }
    }
}

pub fn scanner_with(ocr_text: &str, catalog_record: Option<serde_json::Value>) -> CardScanner {
    let timeout = Duration::from_secs(1);
    CardScanner::new(
        OcrService::new(
            Arc::new(StaticDetector(Some(ocr_text.to_string()))),
            CardTextParser::default(),
            timeout,
        ),
        PriceService::new(Arc::new(StaticCatalog(catalog_record)), timeout),
    )
}

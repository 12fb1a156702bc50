//! Error types for card_scanner

use serde_json::{Map, Value};
use std::time::Duration;

/// Structured diagnostic payload attached to every scan failure
pub type Details = Map<String, Value>;

/// Failures surfaced to callers of the scanning pipeline
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Uploaded image was malformed, missing or too large
    #[error("{message}")]
    InvalidInput { message: String, details: Details },
    /// OCR produced too little text, no card name, or the provider failed
    #[error("{message}")]
    OcrFailed { message: String, details: Details },
    /// Catalog lookup returned no match for the extracted identity
    #[error("{message}")]
    CardNotFound { message: String, details: Details },
    /// Catalog matched without usable prices, or the catalog failed
    #[error("{message}")]
    PricingUnavailable { message: String, details: Details },
}

impl ScanError {
    pub fn invalid_input(message: impl Into<String>, details: Details) -> Self {
        ScanError::InvalidInput {
            message: message.into(),
            details,
        }
    }

    pub fn ocr_failed(message: impl Into<String>, details: Details) -> Self {
        ScanError::OcrFailed {
            message: message.into(),
            details,
        }
    }

    pub fn card_not_found(message: impl Into<String>, details: Details) -> Self {
        ScanError::CardNotFound {
            message: message.into(),
            details,
        }
    }

    pub fn pricing_unavailable(message: impl Into<String>, details: Details) -> Self {
        ScanError::PricingUnavailable {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable code for the error kind
    pub fn code(&self) -> &'static str {
        match self {
            ScanError::InvalidInput { .. } => "INVALID_IMAGE",
            ScanError::OcrFailed { .. } => "OCR_FAILED",
            ScanError::CardNotFound { .. } => "CARD_NOT_FOUND",
            ScanError::PricingUnavailable { .. } => "PRICING_UNAVAILABLE",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ScanError::InvalidInput { message, .. }
            | ScanError::OcrFailed { message, .. }
            | ScanError::CardNotFound { message, .. }
            | ScanError::PricingUnavailable { message, .. } => message,
        }
    }

    pub fn details(&self) -> &Details {
        match self {
            ScanError::InvalidInput { details, .. }
            | ScanError::OcrFailed { details, .. }
            | ScanError::CardNotFound { details, .. }
            | ScanError::PricingUnavailable { details, .. } => details,
        }
    }
}

/// Builds a [`Details`] map from key/value pairs.
pub fn details<I, K>(entries: I) -> Details
where
    I: IntoIterator<Item = (K, Value)>,
    K: Into<String>,
{
    entries.into_iter().map(|(k, v)| (k.into(), v)).collect()
}

/// Transport-level failures from the OCR and catalog API clients
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed (network error, connection refused, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Failed to parse JSON response
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// HTTP error status code
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
    /// Provider answered but reported an error in its payload
    #[error("API error: {0}")]
    Api(String),
    /// Call did not finish within the configured timeout
    #[error("Request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
}

/// Result alias for scanning operations
pub type Result<T> = std::result::Result<T, ScanError>;

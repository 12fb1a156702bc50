//! Card Scanner - Pokemon card identification and pricing
//!
//! Reads the text on a card photo through an OCR provider, recognises the
//! card from that text, and prices it against the Pokemon TCG catalog.

pub mod config;
pub mod error;
pub mod models;
pub mod ocr;
pub mod parser;
pub mod pricing;
pub mod scanner;
pub mod web;

#[cfg(test)]
mod test_support;

pub use config::Config;
pub use error::{ClientError, Result, ScanError};
pub use models::{CardIdentity, PriceQuote, PricingData, PricingSummary, ScanResult};
pub use scanner::CardScanner;

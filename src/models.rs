//! Value objects produced by a card scan

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Condition assumed for every quote; the catalog carries no finer grading
pub const DEFAULT_CONDITION: &str = "Near Mint";

/// Card identity recognised from OCR text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardIdentity {
    pub name: String,
    pub set: Option<String>,
    pub number: Option<String>,
    pub rarity: Option<String>,
}

impl CardIdentity {
    /// Fraction of the four identity fields that were recognised.
    ///
    /// The name is always present on a constructed identity, so the
    /// result lies in `0.25..=1.0`.
    pub fn completeness(&self) -> f64 {
        let optional_found = [&self.set, &self.number, &self.rarity]
            .iter()
            .filter(|field| field.is_some())
            .count();
        (1 + optional_found) as f64 / 4.0
    }
}

/// Price for a card from a single source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    #[serde(rename = "name")]
    pub source: String,
    pub price_usd: f64,
    pub condition: String,
    pub url: Option<String>,
    #[serde(rename = "last_updated")]
    pub observed_at: DateTime<Utc>,
}

/// Statistic the caller should treat as the card's price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    #[default]
    Median,
}

/// Summary statistics over a list of quotes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingSummary {
    pub median: f64,
    #[serde(rename = "average")]
    pub mean: f64,
    pub count: usize,
    #[serde(rename = "recommendation")]
    pub recommended: Recommendation,
}

/// Quotes plus their summary for one card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingData {
    #[serde(rename = "sources")]
    pub quotes: Vec<PriceQuote>,
    #[serde(rename = "statistics")]
    pub summary: PricingSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanMetadata {
    pub scan_time_ms: u64,
    pub confidence_score: f64,
}

/// Complete outcome of scanning one card image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    #[serde(rename = "card")]
    pub identity: CardIdentity,
    pub pricing: PricingData,
    pub metadata: ScanMetadata,
}

/// Service health report
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub dependencies: BTreeMap<String, String>,
    pub timestamp: DateTime<Utc>,
}

//! Pricing lookups: catalog search plus price aggregation

use chrono::Utc;
use log::{info, warn};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

use super::{build_price_quotes, calculate_summary, CardCatalog, CatalogCard};
use crate::error::{details, ClientError, Result, ScanError};
use crate::models::{CardIdentity, PricingData};

/// Looks up a card in the catalog and aggregates its prices
pub struct PriceService {
    catalog: Arc<dyn CardCatalog>,
    timeout: Duration,
}

impl PriceService {
    pub fn new(catalog: Arc<dyn CardCatalog>, timeout: Duration) -> Self {
        Self { catalog, timeout }
    }

    /// Prices the identified card.
    ///
    /// Fails with [`ScanError::CardNotFound`] when the catalog has no match
    /// and with [`ScanError::PricingUnavailable`] when the match has no
    /// usable prices or the catalog call fails.
    pub async fn get_pricing(&self, identity: &CardIdentity) -> Result<PricingData> {
        let card = self
            .search(identity)
            .await
            .map_err(|e| {
                warn!("Catalog search failed for '{}': {}", identity.name, e);
                ScanError::pricing_unavailable(
                    "Pricing service temporarily unavailable. Please try again.",
                    details([("error", json!(e.to_string()))]),
                )
            })?
            .ok_or_else(|| {
                warn!("No catalog match for '{}'", identity.name);
                ScanError::card_not_found(
                    format!(
                        "Could not find pricing for '{}'. \
                         This card may not be in our database yet.",
                        identity.name
                    ),
                    details([
                        ("card_name", json!(identity.name)),
                        ("set", json!(identity.set)),
                        ("number", json!(identity.number)),
                    ]),
                )
            })?;

        let prices = self.catalog.market_prices(&card);
        let quotes = build_price_quotes(&prices, &card, Utc::now());

        if quotes.is_empty() {
            warn!("Catalog card {} has no usable prices", card.id);
            return Err(ScanError::pricing_unavailable(
                format!(
                    "Found card '{}' but pricing data is unavailable.",
                    identity.name
                ),
                details([
                    ("card_id", json!(card.id)),
                    ("card_name", json!(identity.name)),
                ]),
            ));
        }

        let summary = calculate_summary(&quotes);
        info!(
            "Priced '{}' ({}): {} source(s), median ${:.2}",
            identity.name, card.id, summary.count, summary.median
        );

        Ok(PricingData { quotes, summary })
    }

    async fn search(
        &self,
        identity: &CardIdentity,
    ) -> std::result::Result<Option<CatalogCard>, ClientError> {
        let search = self.catalog.search_card(
            &identity.name,
            identity.set.as_deref(),
            identity.number.as_deref(),
        );
        tokio::time::timeout(self.timeout, search)
            .await
            .map_err(|_| ClientError::Timeout(self.timeout))?
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;

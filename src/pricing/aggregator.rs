//! Turns catalog price amounts into quotes and summary statistics

use chrono::{DateTime, Utc};

use super::{CatalogCard, MarketPrices};
use crate::models::{PriceQuote, PricingSummary, Recommendation, DEFAULT_CONDITION};

/// Source label for the Cardmarket average sell price
pub const MARKETPLACE_SOURCE: &str = "CardMarket";

/// TCGplayer print variants that produce quotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceTier {
    Holofoil,
    Normal,
    FirstEditionHolofoil,
}

impl PriceTier {
    /// Processing order for quotes
    pub const ALL: [PriceTier; 3] = [
        PriceTier::Holofoil,
        PriceTier::Normal,
        PriceTier::FirstEditionHolofoil,
    ];

    /// Key used by the catalog's price map
    pub fn catalog_key(self) -> &'static str {
        match self {
            PriceTier::Holofoil => "holofoil",
            PriceTier::Normal => "normal",
            PriceTier::FirstEditionHolofoil => "1stEditionHolofoil",
        }
    }

    pub fn source_name(self) -> &'static str {
        match self {
            PriceTier::Holofoil => "TCGPlayer (Holofoil)",
            PriceTier::Normal => "TCGPlayer (Normal)",
            PriceTier::FirstEditionHolofoil => "TCGPlayer (1st Ed Holofoil)",
        }
    }
}

/// Builds quotes for every recognised tier with a positive amount, followed
/// by the marketplace average when positive.
pub fn build_price_quotes(
    prices: &MarketPrices,
    card: &CatalogCard,
    observed_at: DateTime<Utc>,
) -> Vec<PriceQuote> {
    let quote = |source: &str, price: f64, url: Option<&str>| PriceQuote {
        source: source.to_string(),
        price_usd: price,
        condition: DEFAULT_CONDITION.to_string(),
        url: url.map(String::from),
        observed_at,
    };

    let mut quotes: Vec<PriceQuote> = PriceTier::ALL
        .iter()
        .filter_map(|tier| {
            let amount = *prices.tiers.get(tier.catalog_key())?;
            (amount > 0.0).then(|| quote(tier.source_name(), amount, card.tcgplayer_url()))
        })
        .collect();

    if let Some(avg) = prices.marketplace_average.filter(|avg| *avg > 0.0) {
        quotes.push(quote(MARKETPLACE_SOURCE, avg, card.cardmarket_url()));
    }

    quotes
}

/// Median and mean over the quote prices; an empty list yields zeros
pub fn calculate_summary(quotes: &[PriceQuote]) -> PricingSummary {
    if quotes.is_empty() {
        return PricingSummary {
            median: 0.0,
            mean: 0.0,
            count: 0,
            recommended: Recommendation::Median,
        };
    }

    let mut prices: Vec<f64> = quotes.iter().map(|q| q.price_usd).collect();
    prices.sort_by(f64::total_cmp);

    let count = prices.len();
    let mid = count / 2;
    let median = if count % 2 == 0 {
        (prices[mid - 1] + prices[mid]) / 2.0
    } else {
        prices[mid]
    };
    let mean = prices.iter().sum::<f64>() / count as f64;

    PricingSummary {
        median,
        mean,
        count,
        recommended: Recommendation::Median,
    }
}

#[cfg(test)]
#[path = "aggregator_tests.rs"]
mod tests;

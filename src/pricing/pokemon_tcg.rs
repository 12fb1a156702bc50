//! Pokemon TCG API client for card search and pricing
//!
//! Uses async reqwest for non-blocking HTTP requests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

use super::{CardCatalog, PriceTier};
use crate::error::ClientError;

pub const DEFAULT_TCG_API_URL: &str = "https://api.pokemontcg.io/v2";

/// Card record returned by the Pokemon TCG API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogCard {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tcgplayer: Option<TcgPlayerSection>,
    #[serde(default)]
    pub cardmarket: Option<CardmarketSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TcgPlayerSection {
    pub url: Option<String>,
    /// Keyed by print variant, e.g. "holofoil" or "reverseHolofoil"
    #[serde(default)]
    pub prices: HashMap<String, TierPrices>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierPrices {
    pub low: Option<f64>,
    pub mid: Option<f64>,
    pub high: Option<f64>,
    pub market: Option<f64>,
    pub direct_low: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardmarketSection {
    pub url: Option<String>,
    #[serde(default)]
    pub prices: Option<CardmarketPrices>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardmarketPrices {
    pub average_sell_price: Option<f64>,
    pub low_price: Option<f64>,
    pub trend_price: Option<f64>,
}

/// Raw price amounts pulled from a catalog record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketPrices {
    /// Tier label to market amount
    pub tiers: HashMap<String, f64>,
    /// Cardmarket average sell price
    pub marketplace_average: Option<f64>,
}

impl CatalogCard {
    /// Extracts market prices from the record.
    ///
    /// Only the first TCGplayer tier present (in [`PriceTier::ALL`] order) is
    /// taken. Missing amounts come through as `0.0`.
    pub fn market_prices(&self) -> MarketPrices {
        let mut tiers = HashMap::new();

        if let Some(ref tcg) = self.tcgplayer {
            let present = PriceTier::ALL
                .iter()
                .find_map(|tier| tcg.prices.get(tier.catalog_key()).map(|p| (tier, p)));
            if let Some((tier, prices)) = present {
                tiers.insert(
                    tier.catalog_key().to_string(),
                    prices.market.unwrap_or(0.0),
                );
            }
        }

        let marketplace_average = self
            .cardmarket
            .as_ref()
            .and_then(|cm| cm.prices.as_ref())
            .map(|p| p.average_sell_price.unwrap_or(0.0));

        MarketPrices {
            tiers,
            marketplace_average,
        }
    }

    pub fn tcgplayer_url(&self) -> Option<&str> {
        self.tcgplayer.as_ref().and_then(|t| t.url.as_deref())
    }

    pub fn cardmarket_url(&self) -> Option<&str> {
        self.cardmarket.as_ref().and_then(|c| c.url.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<CatalogCard>,
}

#[derive(Debug, Deserialize)]
struct CardResponse {
    data: Option<CatalogCard>,
}

/// Builds the Lucene-style search query for a card.
///
/// Collector numbers like "4/102" are searched by the part before the
/// slash, which is how the catalog stores them.
pub(crate) fn build_query(name: &str, set: Option<&str>, number: Option<&str>) -> String {
    let mut parts = vec![format!("name:\"{}\"", name)];

    if let Some(set) = set {
        parts.push(format!("set.name:\"{}\"", set));
    }

    if let Some(number) = number {
        let collector = number.split('/').next().unwrap_or(number);
        parts.push(format!("number:\"{}\"", collector));
    }

    parts.join(" ")
}

/// Pokemon TCG API client
pub struct PokemonTcgClient {
    pub(crate) client: reqwest::Client,
    pub(crate) api_key: String,
    pub(crate) base_url: String,
}

impl PokemonTcgClient {
    /// Creates a client; an empty API key sends unauthenticated requests
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self, ClientError> {
        log::info!("Creating Pokemon TCG API client ({})", base_url);
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self.client.get(url);
        if self.api_key.is_empty() {
            request
        } else {
            request.header("X-Api-Key", &self.api_key)
        }
    }

    /// Fetch a single card by its catalog ID
    pub async fn get_card_by_id(&self, card_id: &str) -> Result<Option<CatalogCard>, ClientError> {
        let url = format!("{}/cards/{}", self.base_url, urlencoding::encode(card_id));

        log::debug!("Fetching card by id: {}", card_id);

        let response = self.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(ClientError::HttpStatus(response.status()));
        }

        let body: CardResponse = serde_json::from_slice(&response.bytes().await?)?;
        Ok(body.data)
    }
}

#[async_trait]
impl CardCatalog for PokemonTcgClient {
    async fn search_card(
        &self,
        name: &str,
        set: Option<&str>,
        number: Option<&str>,
    ) -> Result<Option<CatalogCard>, ClientError> {
        let query = build_query(name, set, number);
        let url = format!("{}/cards", self.base_url);

        log::debug!("Searching catalog: {}", query);

        let response = self.get(&url).query(&[("q", &query)]).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::HttpStatus(response.status()));
        }

        let body: SearchResponse = serde_json::from_slice(&response.bytes().await?)?;
        Ok(body.data.into_iter().next())
    }
}

#[cfg(test)]
#[path = "pokemon_tcg_tests.rs"]
mod tests;

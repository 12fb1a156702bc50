//! Catalog collaborator, price aggregation and pricing lookups

mod aggregator;
mod pokemon_tcg;
mod service;

pub use aggregator::{build_price_quotes, calculate_summary, PriceTier, MARKETPLACE_SOURCE};
pub use pokemon_tcg::{
    CardmarketPrices, CardmarketSection, CatalogCard, MarketPrices, PokemonTcgClient,
    TcgPlayerSection, TierPrices, DEFAULT_TCG_API_URL,
};
pub use service::PriceService;

use crate::error::ClientError;
use async_trait::async_trait;

/// Card database that can be searched by identity and carries prices
#[async_trait]
pub trait CardCatalog: Send + Sync {
    /// Best match for the query, or `None` when nothing matches
    async fn search_card(
        &self,
        name: &str,
        set: Option<&str>,
        number: Option<&str>,
    ) -> Result<Option<CatalogCard>, ClientError>;

    /// Price tiers carried by a catalog record
    fn market_prices(&self, card: &CatalogCard) -> MarketPrices {
        card.market_prices()
    }
}

//! Tests for the pricing service.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::PriceService;
use crate::error::{ClientError, ScanError};
use crate::models::CardIdentity;
use crate::pricing::{CardCatalog, CatalogCard};

type SearchArgs = (String, Option<String>, Option<String>);

/// Catalog returning a canned outcome and recording its queries
struct FakeCatalog {
    outcome: Outcome,
    searches: Mutex<Vec<SearchArgs>>,
}

enum Outcome {
    Card(serde_json::Value),
    NoMatch,
    Failing,
    Slow,
}

impl FakeCatalog {
    fn new(outcome: Outcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            searches: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl CardCatalog for FakeCatalog {
    async fn search_card(
        &self,
        name: &str,
        set: Option<&str>,
        number: Option<&str>,
    ) -> Result<Option<CatalogCard>, ClientError> {
        self.searches.lock().unwrap().push((
            name.to_string(),
            set.map(String::from),
            number.map(String::from),
        ));

        match &self.outcome {
            Outcome::Card(json) => Ok(Some(serde_json::from_value(json.clone())?)),
            Outcome::NoMatch => Ok(None),
            Outcome::Failing => Err(ClientError::HttpStatus(
                reqwest::StatusCode::SERVICE_UNAVAILABLE,
            )),
            Outcome::Slow => {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok(None)
            }
        }
    }
}

fn charizard() -> CardIdentity {
    CardIdentity {
        name: "Charizard".to_string(),
        set: None,
        number: Some("4/102".to_string()),
        rarity: Some("Holo Rare".to_string()),
    }
}

fn service(catalog: Arc<FakeCatalog>) -> PriceService {
    PriceService::new(catalog, Duration::from_millis(200))
}

#[tokio::test]
async fn prices_matched_card() {
    let catalog = FakeCatalog::new(Outcome::Card(serde_json::json!({
        "tcgplayer": { "prices": { "holofoil": { "market": 350.0 } } }
    })));

    let pricing = service(catalog.clone())
        .get_pricing(&charizard())
        .await
        .unwrap();

    assert_eq!(pricing.quotes.len(), 1);
    assert_eq!(pricing.quotes[0].source, "TCGPlayer (Holofoil)");
    assert_eq!(pricing.quotes[0].price_usd, 350.0);
    assert_eq!(pricing.summary.median, 350.0);
    assert_eq!(pricing.summary.mean, 350.0);
    assert_eq!(pricing.summary.count, 1);

    let searches = catalog.searches.lock().unwrap();
    assert_eq!(
        *searches,
        vec![("Charizard".to_string(), None, Some("4/102".to_string()))]
    );
}

#[tokio::test]
async fn no_match_is_card_not_found() {
    let err = service(FakeCatalog::new(Outcome::NoMatch))
        .get_pricing(&charizard())
        .await
        .unwrap_err();

    assert!(matches!(err, ScanError::CardNotFound { .. }));
    assert_eq!(err.details()["card_name"], "Charizard");
    assert!(err.details()["set"].is_null());
    assert_eq!(err.details()["number"], "4/102");
}

#[tokio::test]
async fn match_without_prices_is_pricing_unavailable() {
    let catalog = FakeCatalog::new(Outcome::Card(serde_json::json!({
        "id": "base1-4",
        "name": "Charizard",
        "tcgplayer": { "prices": { "holofoil": { "market": 0.0 } } }
    })));

    let err = service(catalog).get_pricing(&charizard()).await.unwrap_err();

    assert!(matches!(err, ScanError::PricingUnavailable { .. }));
    assert_eq!(err.details()["card_id"], "base1-4");
    assert_eq!(err.details()["card_name"], "Charizard");
}

#[tokio::test]
async fn catalog_failure_is_pricing_unavailable() {
    let err = service(FakeCatalog::new(Outcome::Failing))
        .get_pricing(&charizard())
        .await
        .unwrap_err();

    assert!(matches!(err, ScanError::PricingUnavailable { .. }));
    assert!(err.details()["error"]
        .as_str()
        .unwrap()
        .contains("503"));
}

#[tokio::test]
async fn slow_catalog_times_out() {
    let err = service(FakeCatalog::new(Outcome::Slow))
        .get_pricing(&charizard())
        .await
        .unwrap_err();

    assert!(matches!(err, ScanError::PricingUnavailable { .. }));
    assert!(err.details()["error"]
        .as_str()
        .unwrap()
        .contains("timed out"));
}

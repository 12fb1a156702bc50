//! Card Scanner - HTTP API
//!
//! Serves card scanning over HTTP: photo in, card identity and prices out.

use card_scanner::ocr::{GoogleVisionClient, OcrService};
use card_scanner::parser::CardTextParser;
use card_scanner::pricing::{PokemonTcgClient, PriceService};
use card_scanner::web::{self, ServiceInfo};
use card_scanner::{CardScanner, Config};
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();

    log::info!(
        "Starting {} v{} ({})",
        config.app_name,
        config.app_version(),
        config.environment
    );

    let vision = match GoogleVisionClient::new(
        config.google_vision_api_key.clone(),
        config.google_vision_url.clone(),
        config.ocr_timeout(),
    ) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to create Google Vision client: {}", e);
            std::process::exit(1);
        }
    };

    if !vision.is_configured() {
        log::warn!("GOOGLE_VISION_API_KEY is not set, scans will fail at the OCR step");
    }
    let ocr_configured = vision.is_configured();

    let catalog = match PokemonTcgClient::new(
        config.pokemon_tcg_api_key.clone(),
        config.pokemon_tcg_api_url.clone(),
        config.pricing_timeout(),
    ) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to create Pokemon TCG client: {}", e);
            std::process::exit(1);
        }
    };

    let scanner = CardScanner::new(
        OcrService::new(
            Arc::new(vision),
            CardTextParser::default(),
            config.ocr_timeout(),
        ),
        PriceService::new(Arc::new(catalog), config.pricing_timeout()),
    );

    let info = ServiceInfo {
        name: config.app_name.clone(),
        version: config.app_version().to_string(),
        ocr_configured,
    };

    let router = web::create_router(Arc::new(scanner), info, &config.cors_origins_list());

    if let Err(e) = web::serve(router, &config.bind_addr()).await {
        log::error!("Web server error: {}", e);
        std::process::exit(1);
    }
}

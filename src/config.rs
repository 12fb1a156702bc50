//! Service configuration from command-line flags and environment variables

use clap::Parser;
use std::time::Duration;

use crate::ocr::DEFAULT_VISION_URL;
use crate::pricing::DEFAULT_TCG_API_URL;

/// Pokemon card scanner API - identifies cards from photos and prices them
#[derive(Parser, Debug, Clone)]
#[command(name = "card_scanner")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Address to bind the HTTP server to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind the HTTP server to
    #[arg(short, long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Google Cloud Vision API key
    #[arg(long, env = "GOOGLE_VISION_API_KEY", default_value = "", hide_env_values = true)]
    pub google_vision_api_key: String,

    /// Google Cloud Vision API base URL
    #[arg(long, env = "GOOGLE_VISION_URL", default_value = DEFAULT_VISION_URL)]
    pub google_vision_url: String,

    /// Pokemon TCG API key (optional, raises rate limits)
    #[arg(long, env = "POKEMON_TCG_API_KEY", default_value = "", hide_env_values = true)]
    pub pokemon_tcg_api_key: String,

    /// Pokemon TCG API base URL
    #[arg(long, env = "POKEMON_TCG_API_URL", default_value = DEFAULT_TCG_API_URL)]
    pub pokemon_tcg_api_url: String,

    /// Comma-separated list of allowed CORS origins
    #[arg(long, env = "CORS_ORIGINS", default_value = "http://localhost:19006")]
    pub cors_origins: String,

    /// Timeout for OCR requests in milliseconds
    #[arg(long, env = "OCR_TIMEOUT_MS", default_value_t = 2500)]
    pub ocr_timeout_ms: u64,

    /// Timeout for pricing requests in milliseconds
    #[arg(long, env = "PRICING_TIMEOUT_MS", default_value_t = 3000)]
    pub pricing_timeout_ms: u64,

    /// Deployment environment name
    #[arg(long, env = "ENVIRONMENT", default_value = "development")]
    pub environment: String,

    /// Application name reported by the API
    #[arg(long, env = "APP_NAME", default_value = "Pokemon Card Scanner API")]
    pub app_name: String,
}

impl Config {
    /// Allowed CORS origins, parsed from the comma-separated setting
    pub fn cors_origins_list(&self) -> Vec<String> {
        self.cors_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn ocr_timeout(&self) -> Duration {
        Duration::from_millis(self.ocr_timeout_ms)
    }

    pub fn pricing_timeout(&self) -> Duration {
        Duration::from_millis(self.pricing_timeout_ms)
    }

    pub fn app_version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let config = Config::parse_from([
            "card_scanner",
            "--cors-origins",
            "http://localhost:19006, https://scanner.example.com ,",
        ]);
        assert_eq!(
            config.cors_origins_list(),
            vec![
                "http://localhost:19006".to_string(),
                "https://scanner.example.com".to_string()
            ]
        );
    }

    #[test]
    fn timeouts_convert_to_durations() {
        let config = Config::parse_from([
            "card_scanner",
            "--ocr-timeout-ms",
            "1200",
            "--pricing-timeout-ms",
            "4000",
        ]);
        assert_eq!(config.ocr_timeout(), Duration::from_millis(1200));
        assert_eq!(config.pricing_timeout(), Duration::from_millis(4000));
    }

    #[test]
    fn bind_addr_combines_host_and_port() {
        let config = Config::parse_from(["card_scanner", "--host", "127.0.0.1", "--port", "9000"]);
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn app_version_is_crate_version() {
        let config = Config::parse_from(["card_scanner", "--port", "8001"]);
        assert_eq!(config.app_version(), env!("CARGO_PKG_VERSION"));
    }
}

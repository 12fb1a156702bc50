//! HTTP API for the card scanner
//!
//! Accepts card photos as multipart uploads and returns identity plus pricing.

use axum::{
    body::Bytes,
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};

use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::error::{details, ScanError};
use crate::models::{HealthResponse, ScanResult};
use crate::scanner::CardScanner;

/// Largest accepted image upload (5 MiB)
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Multipart field carrying the image
const IMAGE_FIELD: &str = "image";

/// Static facts about the running service
#[derive(Debug, Clone)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    /// Whether the OCR provider has credentials
    pub ocr_configured: bool,
}

/// Shared application state
#[derive(Clone)]
struct AppState {
    scanner: Arc<CardScanner>,
    info: ServiceInfo,
}

#[derive(Serialize)]
struct ServiceDescription {
    name: String,
    version: String,
    health: &'static str,
}

impl IntoResponse for ScanError {
    fn into_response(self) -> Response {
        let status = match self {
            ScanError::InvalidInput { .. } | ScanError::OcrFailed { .. } => StatusCode::BAD_REQUEST,
            ScanError::CardNotFound { .. } => StatusCode::NOT_FOUND,
            ScanError::PricingUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        };

        log::warn!("Scan failed ({}): {}", self.code(), self.message());

        let body = json!({
            "error": {
                "code": self.code(),
                "message": self.message(),
                "details": self.details(),
            }
        });
        (status, Json(body)).into_response()
    }
}

/// Rejects uploads that are not images or exceed [`MAX_IMAGE_BYTES`]
pub fn validate_image(content_type: Option<&str>, image: &[u8]) -> Result<(), ScanError> {
    if !content_type.is_some_and(|ct| ct.starts_with("image/")) {
        return Err(ScanError::invalid_input(
            "Invalid image format. Please upload a JPEG or PNG image.",
            details([("content_type", json!(content_type))]),
        ));
    }

    if image.len() > MAX_IMAGE_BYTES {
        return Err(ScanError::invalid_input(
            "Image file too large. Maximum size is 5MB.",
            details([("size_bytes", json!(image.len()))]),
        ));
    }

    Ok(())
}

/// Pulls the image field out of the upload, returning its content type and bytes
async fn read_image_field(multipart: &mut Multipart) -> Result<(Option<String>, Bytes), ScanError> {
    let malformed = |e: axum::extract::multipart::MultipartError| {
        ScanError::invalid_input(
            "Could not read uploaded image.",
            details([("error", json!(e.body_text()))]),
        )
    };

    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }
        let content_type = field.content_type().map(String::from);
        let bytes = field.bytes().await.map_err(malformed)?;
        return Ok((content_type, bytes));
    }

    Err(ScanError::invalid_input(
        "No image uploaded. Send the card photo in the 'image' form field.",
        details([("field", json!(IMAGE_FIELD))]),
    ))
}

/// GET / - Service description
async fn index_handler(State(state): State<AppState>) -> Json<ServiceDescription> {
    Json(ServiceDescription {
        name: state.info.name,
        version: state.info.version,
        health: "/api/v1/health",
    })
}

/// GET /api/v1/health
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let vision = if state.info.ocr_configured {
        "ok"
    } else {
        "unconfigured"
    };
    let status = if state.info.ocr_configured {
        "healthy"
    } else {
        "degraded"
    };

    let dependencies = BTreeMap::from([
        ("google_vision".to_string(), vision.to_string()),
        ("pokemon_tcg_api".to_string(), "ok".to_string()),
    ]);

    Json(HealthResponse {
        status: status.to_string(),
        version: state.info.version,
        dependencies,
        timestamp: Utc::now(),
    })
}

/// POST /api/v1/scan (multipart, field "image")
async fn scan_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ScanResult>, ScanError> {
    let mut multipart = multipart.map_err(|e| {
        ScanError::invalid_input(
            "Expected a multipart/form-data upload.",
            details([("error", json!(e.body_text()))]),
        )
    })?;

    let (content_type, image) = read_image_field(&mut multipart).await?;
    validate_image(content_type.as_deref(), &image)?;

    log::info!(
        "Received scan request ({} bytes, {})",
        image.len(),
        content_type.as_deref().unwrap_or("unknown type")
    );

    Ok(Json(state.scanner.scan(&image).await?))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Build the web server router
pub fn create_router(
    scanner: Arc<CardScanner>,
    info: ServiceInfo,
    cors_origins: &[String],
) -> Router {
    let state = AppState { scanner, info };

    Router::new()
        .route("/", get(index_handler))
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/scan", post(scan_handler))
        // Leave headroom over the image limit so oversize uploads get a typed error
        .layer(DefaultBodyLimit::max(MAX_IMAGE_BYTES + 1024 * 1024))
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

/// Start the web server, stopping gracefully on Ctrl-C
pub async fn serve(router: Router, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("Card scanner API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}

#[cfg(test)]
#[path = "web_tests.rs"]
mod tests;

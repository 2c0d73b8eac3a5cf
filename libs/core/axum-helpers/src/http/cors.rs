use axum::http::{HeaderValue, Method, header};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

/// Environment variable holding comma-separated allowed origins.
pub const CORS_ALLOWED_ORIGIN: &str = "CORS_ALLOWED_ORIGIN";

/// CORS layer for the given origins: common methods, JSON headers, 1 hour max age.
pub fn create_cors_layer(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::LOCATION])
        .max_age(Duration::from_secs(3600))
}

/// Parses a comma-separated origin list, skipping blanks.
pub fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<HeaderValue>()
                .map_err(|e| format!("Invalid {CORS_ALLOWED_ORIGIN} value '{s}': {e}"))
        })
        .collect()
}

/// Builds the CORS layer from [`CORS_ALLOWED_ORIGIN`].
///
/// Unset or empty means no cross-origin access (`Ok(None)`).
pub fn cors_layer_from_env() -> Result<Option<CorsLayer>, String> {
    let Ok(raw) = std::env::var(CORS_ALLOWED_ORIGIN) else {
        warn!("{CORS_ALLOWED_ORIGIN} not set, cross-origin requests will be rejected");
        return Ok(None);
    };

    let origins = parse_origins(&raw)?;
    if origins.is_empty() {
        return Ok(None);
    }

    info!(origins = %raw, "CORS configured");
    Ok(Some(create_cors_layer(origins)))
}

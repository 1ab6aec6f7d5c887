//! Cross-cutting HTTP concerns.

use std::time::Duration;

use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Configures CORS (Cross-Origin Resource Sharing).
///
/// The browser client is served from a different origin than this API, so
/// every calling origin is admitted.
pub fn cors_policy() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

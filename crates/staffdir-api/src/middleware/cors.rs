//! CORS layer construction from configuration.

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use staffdir_core::config::app::CorsConfig;

/// Build the CORS layer from configuration.
///
/// A wildcard origin cannot be combined with credentials; when `"*"` is
/// configured the layer stays credential-less regardless of the flag.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();

    let wildcard = config.allowed_origins.iter().any(|o| o == "*");
    if wildcard {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    let mut layer = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);
    if config.allow_credentials {
        layer = layer.allow_credentials(true);
    }
    layer
}

//! CORS layer built from configuration

use crate::config::CorsConfig;
use crate::error::{AppError, Result};
use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};

/// Build the CORS layer for the configured origins.
///
/// Credentialed requests cannot use wildcard methods or headers, so those are
/// mirrored from the preflight request instead.
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
    if config.allows_any_origin() {
        if config.allow_credentials {
            return Err(AppError::config(
                "CORS credentials cannot be allowed for any origin ('*')",
            ));
        }
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|_| AppError::config(format!("Invalid CORS origin '{}'", origin)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(config.allow_credentials))
}

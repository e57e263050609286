//! Static endpoints and the fallback for unknown paths.

use axum::http::Uri;

use poc_api_core::messages;

use crate::error::ApiError;

/// Liveness probe.
///
/// `GET /api/health`
pub async fn health() -> &'static str {
    messages::HEALTH_OK
}

/// `GET /api/public`
pub async fn public() -> &'static str {
    messages::PUBLIC_INFORMATION
}

/// Fallback for paths with no route.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}

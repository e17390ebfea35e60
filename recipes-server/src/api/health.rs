//! Health check endpoint

use axum::Json;
use recipes_common::api::types::HealthResponse;

/// GET /health
///
/// Liveness probe for monitoring.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: "recipes-server".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

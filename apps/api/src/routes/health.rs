//! Health check HTTP route handlers
//!
//! - `GET /health` - Simple liveness check (returns 200 OK)
//! - `GET /health/live` - Liveness probe with version
//! - `GET /health/ready` - Readiness check (verifies the store)

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use std::sync::Arc;

use crate::error::{ApiError, ApiResult};
use crate::repositories::SharedResourceStore;
use crate::services::health::HealthCheckResponse;
use crate::services::HealthService;

/// Shared application state for health check handlers
#[derive(Clone)]
pub struct HealthState {
    /// Health check service
    pub health_service: Arc<HealthService>,
}

impl HealthState {
    /// Create new health state over the shared store
    pub fn new(store: SharedResourceStore) -> Self {
        Self {
            health_service: Arc::new(HealthService::new(store)),
        }
    }
}

/// Create health check router
pub fn health_router(state: HealthState) -> Router {
    Router::new()
        .route("/", get(simple_health))
        .route("/live", get(liveness_probe))
        .route("/ready", get(readiness_probe))
        .with_state(state)
}

/// Simple health check - always returns OK if the server is running
async fn simple_health() -> &'static str {
    "OK"
}

/// Liveness probe; does not touch the store
async fn liveness_probe() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Readiness probe - 200 with a report when the store answers, 503 otherwise
async fn readiness_probe(
    State(state): State<HealthState>,
) -> ApiResult<Json<HealthCheckResponse>> {
    let response = state.health_service.check_all().await;

    if !response.is_healthy() {
        for service in &response.services {
            if let Some(error) = &service.error {
                tracing::warn!(service = service.name, error = %error, "Readiness check failed");
            }
        }
        return Err(ApiError::DatabaseUnavailable);
    }

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_simple_health() {
        let response = simple_health().await;
        assert_eq!(response, "OK");
    }

    #[tokio::test]
    async fn test_liveness_probe() {
        let response = liveness_probe().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

//! HTTP application assembly
//!
//! Builds the Axum router shared by the binary and the integration tests.

use axum::{
    http::{header, HeaderName, Method},
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::graphql::build_schema;
use crate::middleware::{AdminIdentity, USER_EMAIL_HEADER};
use crate::repositories::SharedResourceStore;
use crate::routes::{graphql_router, health_router, GraphQLState, HealthState, GRAPHQL_PATH};

/// Build the CORS layer based on configuration.
///
/// In production mode:
/// - If `CORS_ORIGINS` is set, only those origins are allowed
/// - If `CORS_ORIGINS` is not set, CORS requests are rejected (no origins allowed)
///
/// In development mode:
/// - If `CORS_ORIGINS` is set, those origins are used
/// - If `CORS_ORIGINS` is not set, permissive CORS is used for convenience
pub fn build_cors_layer(config: &Config) -> CorsLayer {
    match &config.cors_allowed_origins {
        Some(origins) if !origins.is_empty() => {
            let allowed_origins: Vec<_> = origins
                .iter()
                .filter_map(|origin| {
                    origin.parse().ok().or_else(|| {
                        tracing::warn!("Invalid CORS origin '{}', skipping", origin);
                        None
                    })
                })
                .collect();

            if allowed_origins.is_empty() {
                tracing::error!("No valid CORS origins configured, CORS requests will be rejected");
                CorsLayer::new()
            } else {
                tracing::info!(
                    "CORS configured with {} allowed origin(s): {:?}",
                    allowed_origins.len(),
                    origins
                );
                CorsLayer::new()
                    .allow_origin(allowed_origins)
                    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                    .allow_headers([
                        header::CONTENT_TYPE,
                        header::ACCEPT,
                        header::ORIGIN,
                        HeaderName::from_static(USER_EMAIL_HEADER),
                    ])
                    .max_age(std::time::Duration::from_secs(3600))
            }
        }
        _ if config.is_production() => {
            tracing::warn!(
                "CORS_ORIGINS not configured in production mode. \
                 CORS requests will be rejected. Set CORS_ORIGINS to allow cross-origin requests."
            );
            CorsLayer::new()
        }
        _ => {
            tracing::warn!(
                "Using permissive CORS in development mode. \
                 Set CORS_ORIGINS for production-like behavior."
            );
            CorsLayer::permissive()
        }
    }
}

/// Build the application router over a store
pub fn build_router(store: SharedResourceStore, admin: AdminIdentity, cors: CorsLayer) -> Router {
    let schema = build_schema(store.clone());

    Router::new()
        .route("/", get(root))
        // GraphQL endpoint: POST executes, GET serves the playground
        .nest(GRAPHQL_PATH, graphql_router(GraphQLState::new(schema, admin)))
        // Nested health routes: /health, /health/live, /health/ready
        .nest("/health", health_router(HealthState::new(store)))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn root() -> &'static str {
    "Welcome to Devshelf - curated developer resources"
}

//! Health check service for verifying the resource store

use serde::Serialize;
use std::time::{Duration, Instant};

use crate::repositories::SharedResourceStore;

/// Status of an individual dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    /// Dependency is healthy and responding
    Healthy,
    /// Dependency is unhealthy or unreachable
    Unhealthy,
}

/// Result of a single dependency health check
#[derive(Debug, Clone, Serialize)]
pub struct ServiceHealth {
    /// Name of the dependency
    pub name: &'static str,
    /// Current status
    pub status: ServiceStatus,
    /// Response time in milliseconds
    pub response_time_ms: u64,
    /// Error message if unhealthy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ServiceHealth {
    /// Create a healthy result
    pub fn healthy(name: &'static str, response_time: Duration) -> Self {
        Self {
            name,
            status: ServiceStatus::Healthy,
            response_time_ms: response_time.as_millis() as u64,
            error: None,
        }
    }

    /// Create an unhealthy result
    pub fn unhealthy(name: &'static str, error: impl Into<String>, response_time: Duration) -> Self {
        Self {
            name,
            status: ServiceStatus::Unhealthy,
            response_time_ms: response_time.as_millis() as u64,
            error: Some(error.into()),
        }
    }
}

/// Aggregated health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthCheckResponse {
    /// Overall status (healthy only if every dependency is healthy)
    pub status: ServiceStatus,
    /// Individual dependency results
    pub services: Vec<ServiceHealth>,
    /// API version
    pub version: &'static str,
}

impl HealthCheckResponse {
    /// Create a new health check response from individual results
    pub fn new(services: Vec<ServiceHealth>) -> Self {
        let status = if services.iter().all(|s| s.status == ServiceStatus::Healthy) {
            ServiceStatus::Healthy
        } else {
            ServiceStatus::Unhealthy
        };

        Self {
            status,
            services,
            version: env!("CARGO_PKG_VERSION"),
        }
    }

    /// Check if overall health is good
    pub fn is_healthy(&self) -> bool {
        self.status == ServiceStatus::Healthy
    }
}

/// Health check service backed by the shared store handle
pub struct HealthService {
    store: SharedResourceStore,
}

impl HealthService {
    /// Create a new health service
    pub fn new(store: SharedResourceStore) -> Self {
        Self { store }
    }

    /// Check that the store answers a trivial query
    pub async fn check_database(&self) -> ServiceHealth {
        let start = Instant::now();
        match self.store.ping().await {
            Ok(()) => ServiceHealth::healthy("database", start.elapsed()),
            Err(e) => ServiceHealth::unhealthy(
                "database",
                format!("Query failed: {}", e),
                start.elapsed(),
            ),
        }
    }

    /// Run every dependency check
    pub async fn check_all(&self) -> HealthCheckResponse {
        HealthCheckResponse::new(vec![self.check_database().await])
    }
}

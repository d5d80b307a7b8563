//! Devshelf API library
//!
//! This module exposes the core API components for use by the binaries and
//! integration tests.

pub mod config;
pub mod error;
pub mod graphql;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod seed;
pub mod server;
pub mod services;

// Re-export commonly used types
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use server::{build_cors_layer, build_router};

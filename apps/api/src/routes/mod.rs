//! HTTP route handlers for the Devshelf API
//!
//! - GraphQL endpoint and playground
//! - Health check endpoints

pub mod graphql;
pub mod health;

pub use graphql::{graphql_router, GraphQLState, GRAPHQL_PATH};
pub use health::{health_router, HealthState};

//! Database repository layer for Devshelf
//!
//! Resolvers talk to the store through the [`ResourceStore`] trait so the
//! GraphQL layer stays independent of the PostgreSQL implementation.

pub mod resource;

pub use resource::{ResourceRepository, ResourceStore, SharedResourceStore};

use std::time::Duration;

use devshelf_shared_config::DatabaseConfig;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Embedded schema migrations from `apps/api/migrations`
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Open the process-wide connection pool
pub async fn connect(database: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(database.max_connections)
        .min_connections(database.min_connections)
        .acquire_timeout(Duration::from_secs(database.connect_timeout_secs))
        .connect(&database.url)
        .await
}

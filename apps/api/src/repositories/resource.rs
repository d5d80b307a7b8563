//! Resource repository for centralized database operations
//!
//! This module provides all resource-related database operations in a single
//! location, following the repository pattern.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{NewResource, Resource, ResourceFilter};

/// SQL columns for resource queries
const RESOURCE_COLUMNS: &str = "id, title, description, url, category, is_favorite";

/// Operations the API needs from the durable resource store
///
/// Each call is a single round-trip. Callers that read and then write (toggle,
/// delete) do so without a transaction; the last write wins.
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// List resources matching every constraint in `filter`, ordered by id
    async fn find_many(&self, filter: ResourceFilter) -> Result<Vec<Resource>, sqlx::Error>;

    /// Find a resource by its identifier
    async fn find_by_id(&self, id: i32) -> Result<Option<Resource>, sqlx::Error>;

    /// Insert a resource and return it with its assigned identifier
    async fn create(&self, resource: NewResource) -> Result<Resource, sqlx::Error>;

    /// Set the favorite flag of an existing resource
    ///
    /// Returns `sqlx::Error::RowNotFound` if the row vanished since it was read.
    async fn set_favorite(&self, id: i32, is_favorite: bool) -> Result<Resource, sqlx::Error>;

    /// Delete a resource, returning whether a row was removed
    async fn delete(&self, id: i32) -> Result<bool, sqlx::Error>;

    /// Round-trip to the store to verify it is reachable
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

/// Shared handle to the store, held in the GraphQL schema data
pub type SharedResourceStore = Arc<dyn ResourceStore>;

/// Repository for resource database operations
#[derive(Clone)]
pub struct ResourceRepository {
    pool: PgPool,
}

impl ResourceRepository {
    /// Create a new ResourceRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Wrap this repository as a shared store handle
    pub fn into_shared(self) -> SharedResourceStore {
        Arc::new(self)
    }

    /// Remove every resource and insert `resources` in one transaction
    ///
    /// Used by the seed loader. Returns the number of rows inserted.
    pub async fn replace_all(&self, resources: &[NewResource]) -> Result<u64, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM resources")
            .execute(&mut *tx)
            .await?
            .rows_affected();
        tracing::debug!(deleted, "Cleared existing resources");

        let mut inserted = 0;
        for resource in resources {
            inserted += sqlx::query(
                r#"
                INSERT INTO resources (title, description, url, category, is_favorite)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(&resource.title)
            .bind(&resource.description)
            .bind(&resource.url)
            .bind(resource.category)
            .bind(resource.is_favorite)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }
}

#[async_trait]
impl ResourceStore for ResourceRepository {
    async fn find_many(&self, filter: ResourceFilter) -> Result<Vec<Resource>, sqlx::Error> {
        let sql = format!(
            r#"SELECT {} FROM resources
            WHERE ($1::resource_category IS NULL OR category = $1)
                AND ($2::boolean IS NULL OR is_favorite = $2)
            ORDER BY id ASC"#,
            RESOURCE_COLUMNS
        );
        sqlx::query_as::<_, Resource>(&sql)
            .bind(filter.category)
            .bind(filter.is_favorite)
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Resource>, sqlx::Error> {
        let sql = format!("SELECT {} FROM resources WHERE id = $1", RESOURCE_COLUMNS);
        sqlx::query_as::<_, Resource>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn create(&self, resource: NewResource) -> Result<Resource, sqlx::Error> {
        let sql = format!(
            r#"INSERT INTO resources (title, description, url, category, is_favorite)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}"#,
            RESOURCE_COLUMNS
        );
        sqlx::query_as::<_, Resource>(&sql)
            .bind(resource.title)
            .bind(resource.description)
            .bind(resource.url)
            .bind(resource.category)
            .bind(resource.is_favorite)
            .fetch_one(&self.pool)
            .await
    }

    async fn set_favorite(&self, id: i32, is_favorite: bool) -> Result<Resource, sqlx::Error> {
        let sql = format!(
            "UPDATE resources SET is_favorite = $2 WHERE id = $1 RETURNING {}",
            RESOURCE_COLUMNS
        );
        sqlx::query_as::<_, Resource>(&sql)
            .bind(id)
            .bind(is_favorite)
            .fetch_one(&self.pool)
            .await
    }

    async fn delete(&self, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM resources WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

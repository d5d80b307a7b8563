//! Resource business logic
//!
//! Authorization, input validation and store dispatch for the resource
//! query and mutations. Resolvers stay thin and delegate here.

use crate::error::{ApiError, ApiResult};
use crate::models::{CallerContext, NewResource, Resource, ResourceCategory, ResourceFilter};
use crate::repositories::SharedResourceStore;

const RESOURCE: &str = "Resource";

/// Fields supplied by a caller creating a resource
#[derive(Debug, Clone)]
pub struct CreateResource {
    pub title: String,
    pub description: String,
    pub url: String,
    pub category: ResourceCategory,
}

/// Service wrapping the resource store
#[derive(Clone)]
pub struct ResourceService {
    store: SharedResourceStore,
}

impl ResourceService {
    /// Create a new resource service
    pub fn new(store: SharedResourceStore) -> Self {
        Self { store }
    }

    /// List resources matching the filter; open to every caller
    pub async fn list(&self, filter: ResourceFilter) -> ApiResult<Vec<Resource>> {
        let resources = self.store.find_many(filter).await?;
        tracing::debug!(
            count = resources.len(),
            category = ?filter.category,
            is_favorite = ?filter.is_favorite,
            "Listed resources"
        );
        Ok(resources)
    }

    /// Create a resource as the admin; new resources are never favorites
    pub async fn create(&self, caller: &CallerContext, input: CreateResource) -> ApiResult<Resource> {
        require_admin(caller, "createResource")?;

        require_non_empty("Title", &input.title)?;
        require_non_empty("Description", &input.description)?;

        // Stored as sent; url only has to be present
        let resource = self
            .store
            .create(NewResource::new(
                input.title,
                input.description,
                input.url,
                input.category,
            ))
            .await?;

        tracing::info!(resource_id = resource.id, category = ?resource.category, "Resource created");
        Ok(resource)
    }

    /// Flip the favorite flag of an existing resource
    ///
    /// Read then write with no lock; concurrent toggles resolve last-write-wins.
    pub async fn toggle_favorite(&self, caller: &CallerContext, id: &str) -> ApiResult<Resource> {
        require_admin(caller, "toggleFavorite")?;
        let id = parse_resource_id(id)?;

        let current = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::not_found(RESOURCE, id.to_string()))?;

        let updated = self.store.set_favorite(id, !current.is_favorite).await?;

        tracing::info!(resource_id = id, is_favorite = updated.is_favorite, "Favorite toggled");
        Ok(updated)
    }

    /// Delete an existing resource
    pub async fn delete(&self, caller: &CallerContext, id: &str) -> ApiResult<()> {
        require_admin(caller, "deleteResource")?;
        let id = parse_resource_id(id)?;

        if self.store.find_by_id(id).await?.is_none() {
            return Err(ApiError::not_found(RESOURCE, id.to_string()));
        }

        if !self.store.delete(id).await? {
            // Removed by another request between the read and the delete
            return Err(ApiError::Database(sqlx::Error::RowNotFound));
        }

        tracing::info!(resource_id = id, "Resource deleted");
        Ok(())
    }
}

/// Reject callers whose claimed identity is not the configured admin
fn require_admin(caller: &CallerContext, operation: &'static str) -> ApiResult<()> {
    if caller.is_admin {
        return Ok(());
    }
    tracing::warn!(
        operation,
        caller = caller.email.as_deref().unwrap_or("<anonymous>"),
        "Rejected non-admin mutation"
    );
    Err(ApiError::Unauthorized)
}

/// Parse a GraphQL `ID` into the store's integer key
fn parse_resource_id(id: &str) -> ApiResult<i32> {
    id.trim()
        .parse::<i32>()
        .map_err(|_| ApiError::ValidationError("Invalid resource ID".to_string()))
}

fn require_non_empty(field: &str, value: &str) -> ApiResult<()> {
    if value.is_empty() {
        return Err(ApiError::ValidationError(format!("{} cannot be empty", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_require_admin() {
        assert!(require_admin(&CallerContext::admin("admin@example.com"), "op").is_ok());
        assert_matches!(
            require_admin(&CallerContext::user("someone@example.com"), "op"),
            Err(ApiError::Unauthorized)
        );
        assert_matches!(
            require_admin(&CallerContext::anonymous(), "op"),
            Err(ApiError::Unauthorized)
        );
    }

    #[test]
    fn test_parse_resource_id() {
        assert_eq!(parse_resource_id("42").unwrap(), 42);
        assert_eq!(parse_resource_id(" 7 ").unwrap(), 7);
        assert_matches!(parse_resource_id("abc"), Err(ApiError::ValidationError(_)));
        assert_matches!(parse_resource_id(""), Err(ApiError::ValidationError(_)));
        assert_matches!(parse_resource_id("1.0"), Err(ApiError::ValidationError(_)));
        assert_matches!(parse_resource_id("1e0"), Err(ApiError::ValidationError(_)));
        assert_matches!(
            parse_resource_id("99999999999"),
            Err(ApiError::ValidationError(_))
        );
    }

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("Title", "X").is_ok());
        assert!(require_non_empty("Title", "  ").is_ok());
        assert_matches!(
            require_non_empty("Title", ""),
            Err(ApiError::ValidationError(msg)) if msg == "Title cannot be empty"
        );
    }
}

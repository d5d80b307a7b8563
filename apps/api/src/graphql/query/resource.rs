//! Resource queries for Devshelf GraphQL API

use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::graphql::types::{Category, Resource};
use crate::models::ResourceFilter;
use crate::services::ResourceService;

/// Resource queries
#[derive(Default)]
pub struct ResourceQuery;

#[Object]
impl ResourceQuery {
    /// List resources, optionally narrowed by category and favorite flag
    ///
    /// Supplied filters are combined with AND; omitted filters match anything.
    /// No authorization is required.
    async fn resources(
        &self,
        ctx: &Context<'_>,
        category: Option<Category>,
        is_favorite: Option<bool>,
    ) -> Result<Vec<Resource>> {
        let service = ctx.data::<ResourceService>()?;

        let filter = ResourceFilter {
            category: category.map(Into::into),
            is_favorite,
        };

        let resources = service.list(filter).await.map_err(|e| e.extend())?;
        Ok(resources.into_iter().map(Resource::from).collect())
    }
}

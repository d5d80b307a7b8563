//! Resource mutations for Devshelf GraphQL API
//!
//! - createResource: Insert a new resource
//! - toggleFavorite: Flip the favorite flag of a resource
//! - deleteResource: Remove a resource
//!
//! All mutations require the caller to carry the admin identity.

use std::borrow::Cow;

use async_graphql::{Context, ErrorExtensions, InputObject, Object, Result, ID};

use crate::graphql::types::{Category, DeleteResourceResponse, Resource};
use crate::models::CallerContext;
use crate::services::{CreateResource, ResourceService};

const DELETE_SUCCESS_MESSAGE: &str = "Resource deleted successfully";

/// Input for creating a new resource
#[derive(Debug, InputObject)]
pub struct NewResourceInput {
    /// Resource title
    pub title: String,
    /// Resource description
    pub description: String,
    /// Link target
    pub url: String,
    /// Resource category
    pub category: Category,
}

impl From<NewResourceInput> for CreateResource {
    fn from(input: NewResourceInput) -> Self {
        Self {
            title: input.title,
            description: input.description,
            url: input.url,
            category: input.category.into(),
        }
    }
}

/// Caller context attached by the HTTP handler; a request without one is anonymous
fn caller<'a>(ctx: &'a Context<'_>) -> Cow<'a, CallerContext> {
    match ctx.data_opt::<CallerContext>() {
        Some(caller) => Cow::Borrowed(caller),
        None => Cow::Owned(CallerContext::anonymous()),
    }
}

/// Resource mutations
#[derive(Default)]
pub struct ResourceMutation;

#[Object]
impl ResourceMutation {
    /// Create a new resource
    ///
    /// The new resource is not a favorite.
    ///
    /// # Errors
    /// - Unauthorized if the caller is not the admin
    /// - Validation error if title or description is empty
    async fn create_resource(&self, ctx: &Context<'_>, data: NewResourceInput) -> Result<Resource> {
        let service = ctx.data::<ResourceService>()?;
        let resource = service
            .create(&caller(ctx), data.into())
            .await
            .map_err(|e| e.extend())?;
        Ok(resource.into())
    }

    /// Flip the favorite flag of a resource
    ///
    /// # Errors
    /// - Unauthorized if the caller is not the admin
    /// - Not found if no resource has this id
    async fn toggle_favorite(&self, ctx: &Context<'_>, id: ID) -> Result<Resource> {
        let service = ctx.data::<ResourceService>()?;
        let resource = service
            .toggle_favorite(&caller(ctx), &id)
            .await
            .map_err(|e| e.extend())?;
        Ok(resource.into())
    }

    /// Delete a resource
    ///
    /// # Errors
    /// - Unauthorized if the caller is not the admin
    /// - Not found if no resource has this id
    async fn delete_resource(&self, ctx: &Context<'_>, id: ID) -> Result<DeleteResourceResponse> {
        let service = ctx.data::<ResourceService>()?;
        service
            .delete(&caller(ctx), &id)
            .await
            .map_err(|e| e.extend())?;
        Ok(DeleteResourceResponse {
            success: true,
            message: Some(DELETE_SUCCESS_MESSAGE.to_string()),
        })
    }
}

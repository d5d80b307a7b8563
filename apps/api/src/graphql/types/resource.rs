//! Resource GraphQL types
//!
//! GraphQL-facing wrappers around the database models, kept separate so the
//! exposed names (`Category`, `isFavorite`, `ID`) do not leak into storage.

use async_graphql::{Enum, Object, SimpleObject, ID};

use crate::models::Resource as DbResource;
use crate::models::ResourceCategory as DbResourceCategory;

/// Resource category enum for GraphQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum Category {
    /// Developer tool
    Tool,
    /// Course or tutorial series
    Course,
    /// Documentation
    Docs,
    /// Video content
    Video,
    /// UI kit or component library
    Uikit,
}

impl From<DbResourceCategory> for Category {
    fn from(category: DbResourceCategory) -> Self {
        match category {
            DbResourceCategory::Tool => Self::Tool,
            DbResourceCategory::Course => Self::Course,
            DbResourceCategory::Docs => Self::Docs,
            DbResourceCategory::Video => Self::Video,
            DbResourceCategory::Uikit => Self::Uikit,
        }
    }
}

impl From<Category> for DbResourceCategory {
    fn from(category: Category) -> Self {
        match category {
            Category::Tool => Self::Tool,
            Category::Course => Self::Course,
            Category::Docs => Self::Docs,
            Category::Video => Self::Video,
            Category::Uikit => Self::Uikit,
        }
    }
}

/// Resource exposed via GraphQL
pub struct Resource {
    inner: DbResource,
}

impl Resource {
    /// Create a new GraphQL Resource from a database Resource
    pub fn new(resource: DbResource) -> Self {
        Self { inner: resource }
    }
}

impl From<DbResource> for Resource {
    fn from(resource: DbResource) -> Self {
        Self::new(resource)
    }
}

#[Object]
impl Resource {
    /// Unique resource identifier
    async fn id(&self) -> ID {
        ID::from(self.inner.id.to_string())
    }

    /// Resource title
    async fn title(&self) -> &str {
        &self.inner.title
    }

    /// Resource description
    async fn description(&self) -> &str {
        &self.inner.description
    }

    /// Link target
    async fn url(&self) -> &str {
        &self.inner.url
    }

    /// Resource category
    async fn category(&self) -> Category {
        self.inner.category.into()
    }

    /// Whether the resource is marked as a favorite
    async fn is_favorite(&self) -> bool {
        self.inner.is_favorite
    }
}

/// Acknowledgment returned by deleteResource
#[derive(Debug, Clone, SimpleObject)]
pub struct DeleteResourceResponse {
    /// Whether the resource was deleted
    pub success: bool,
    /// Human-readable outcome
    pub message: Option<String>,
}

//! Resource models for Devshelf
//!
//! A resource is a curated link (tool, course, docs page, video or UI kit)
//! with a favorite flag. Rows live in the `resources` table.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Resource category enum matching PostgreSQL resource_category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "resource_category", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum ResourceCategory {
    Tool,
    Course,
    Docs,
    Video,
    Uikit,
}

impl ResourceCategory {
    /// All categories in declaration order
    pub const ALL: [ResourceCategory; 5] = [
        Self::Tool,
        Self::Course,
        Self::Docs,
        Self::Video,
        Self::Uikit,
    ];
}

/// Resource record from the resources table
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Resource {
    /// Store-assigned identifier, never changes after insert
    pub id: i32,

    /// Display title
    pub title: String,

    /// Short description
    pub description: String,

    /// Link target
    pub url: String,

    /// Category of the resource
    pub category: ResourceCategory,

    /// Whether the resource is marked as a favorite
    pub is_favorite: bool,
}

/// Payload for inserting a resource
///
/// `is_favorite` is only set by the seed loader; the create mutation always
/// inserts with `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResource {
    pub title: String,
    pub description: String,
    pub url: String,
    pub category: ResourceCategory,
    pub is_favorite: bool,
}

impl NewResource {
    /// Create an insert payload with the favorite flag cleared
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
        category: ResourceCategory,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: url.into(),
            category,
            is_favorite: false,
        }
    }

    /// Set the initial favorite flag
    pub fn favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }
}

/// Conjunctive filter for listing resources; `None` leaves a field unconstrained
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResourceFilter {
    pub category: Option<ResourceCategory>,
    pub is_favorite: Option<bool>,
}

impl ResourceFilter {
    /// Check whether a resource satisfies every supplied constraint
    pub fn matches(&self, resource: &Resource) -> bool {
        self.category.map_or(true, |c| resource.category == c)
            && self.is_favorite.map_or(true, |f| resource.is_favorite == f)
    }
}

//! GraphQL queries for Devshelf

mod resource;

pub use resource::ResourceQuery;

use async_graphql::MergedObject;

/// Root query type combining all query domains
#[derive(MergedObject, Default)]
pub struct Query(ResourceQuery);

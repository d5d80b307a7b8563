//! GraphQL schema builder for Devshelf

use async_graphql::{EmptySubscription, Schema};

use crate::repositories::SharedResourceStore;
use crate::services::ResourceService;

use super::mutation::Mutation;
use super::query::Query;

/// The Devshelf GraphQL schema type
pub type DevshelfSchema = Schema<Query, Mutation, EmptySubscription>;

/// Create the GraphQL schema backed by the given store
///
/// The per-request `CallerContext` is not part of the schema data; the HTTP
/// handler attaches it to each request.
pub fn build_schema(store: SharedResourceStore) -> DevshelfSchema {
    Schema::build(Query::default(), Mutation::default(), EmptySubscription)
        .data(ResourceService::new(store))
        .finish()
}

//! GraphQL mutations for Devshelf

mod resource;

pub use resource::{NewResourceInput, ResourceMutation};

use async_graphql::MergedObject;

/// Root mutation type combining all mutation domains
#[derive(MergedObject, Default)]
pub struct Mutation(ResourceMutation);

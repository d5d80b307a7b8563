//! GraphQL schema and resolvers for Devshelf
//!
//! This module contains the async-graphql schema including:
//! - The `resources` query with optional category and favorite filters
//! - Admin-only mutations to create, favorite and delete resources
//! - Type definitions for the exposed objects and enums

pub mod mutation;
pub mod query;
pub mod schema;
pub mod types;

pub use schema::{build_schema, DevshelfSchema};

//! GraphQL type definitions for Devshelf

mod resource;

pub use resource::{Category, DeleteResourceResponse, Resource};

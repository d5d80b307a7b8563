//! Domain models for Devshelf
//!
//! This module contains:
//! - The `Resource` row and its category enum as stored in PostgreSQL
//! - Insert and filter payloads used by the store layer
//! - The per-request caller context consulted by mutations

pub mod caller;
pub mod resource;

pub use caller::CallerContext;
pub use resource::{NewResource, Resource, ResourceCategory, ResourceFilter};

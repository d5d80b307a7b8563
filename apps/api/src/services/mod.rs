//! Business logic services for Devshelf
//!
//! - Resource listing and admin-only mutations
//! - Health checks

pub mod health;
pub mod resource;

pub use health::HealthService;
pub use resource::{CreateResource, ResourceService};

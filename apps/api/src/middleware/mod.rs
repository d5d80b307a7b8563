//! Middleware components for Devshelf API
//!
//! - `AdminIdentity`: derives the per-request `CallerContext` from the
//!   `x-user-email` header, also usable as an Axum extractor

pub mod admin;

pub use admin::{AdminIdentity, USER_EMAIL_HEADER};

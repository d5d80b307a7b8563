//! Common test utilities for API integration tests
//!
//! Shared infrastructure: an in-memory resource store and helpers for
//! executing GraphQL requests as a given caller.

#![allow(unused_imports)]

pub mod helpers;
pub mod mock_store;

pub use helpers::*;
pub use mock_store::*;

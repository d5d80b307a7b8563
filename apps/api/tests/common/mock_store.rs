//! In-memory resource store for testing resolvers without PostgreSQL
//!
//! Assigns sequential identifiers like a SERIAL column and can be switched
//! into a failing mode to simulate an unreachable database.

#![allow(dead_code)]

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use devshelf_api::models::{NewResource, Resource, ResourceFilter};
use devshelf_api::repositories::{ResourceStore, SharedResourceStore};

#[derive(Default)]
struct MockState {
    rows: Vec<Resource>,
    last_id: i32,
    unavailable: bool,
}

/// Mock store; clones share the same rows
#[derive(Clone, Default)]
pub struct MockResourceStore {
    state: Arc<RwLock<MockState>>,
}

impl MockResourceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `resources`
    pub fn with_resources(resources: Vec<NewResource>) -> Self {
        let store = Self::new();
        {
            let mut state = store.write();
            for resource in resources {
                insert(&mut state, resource);
            }
        }
        store
    }

    /// Shared handle for building a schema or router
    pub fn shared(&self) -> SharedResourceStore {
        Arc::new(self.clone())
    }

    /// Copy of every stored row, ordered by id
    pub fn snapshot(&self) -> Vec<Resource> {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .rows
            .clone()
    }

    /// Look up a row directly
    pub fn get(&self, id: i32) -> Option<Resource> {
        self.snapshot().into_iter().find(|r| r.id == id)
    }

    /// Make every subsequent call fail as if the pool timed out
    pub fn set_unavailable(&self, unavailable: bool) {
        self.write().unavailable = unavailable;
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, MockState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }

    fn check_available(&self) -> Result<(), sqlx::Error> {
        if self.state.read().unwrap_or_else(|e| e.into_inner()).unavailable {
            Err(sqlx::Error::PoolTimedOut)
        } else {
            Ok(())
        }
    }
}

fn insert(state: &mut MockState, resource: NewResource) -> Resource {
    state.last_id += 1;
    let row = Resource {
        id: state.last_id,
        title: resource.title,
        description: resource.description,
        url: resource.url,
        category: resource.category,
        is_favorite: resource.is_favorite,
    };
    state.rows.push(row.clone());
    row
}

#[async_trait]
impl ResourceStore for MockResourceStore {
    async fn find_many(&self, filter: ResourceFilter) -> Result<Vec<Resource>, sqlx::Error> {
        self.check_available()?;
        Ok(self
            .snapshot()
            .into_iter()
            .filter(|r| filter.matches(r))
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Resource>, sqlx::Error> {
        self.check_available()?;
        Ok(self.get(id))
    }

    async fn create(&self, resource: NewResource) -> Result<Resource, sqlx::Error> {
        self.check_available()?;
        Ok(insert(&mut self.write(), resource))
    }

    async fn set_favorite(&self, id: i32, is_favorite: bool) -> Result<Resource, sqlx::Error> {
        self.check_available()?;
        let mut state = self.write();
        let row = state
            .rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(sqlx::Error::RowNotFound)?;
        row.is_favorite = is_favorite;
        Ok(row.clone())
    }

    async fn delete(&self, id: i32) -> Result<bool, sqlx::Error> {
        self.check_available()?;
        let mut state = self.write();
        let before = state.rows.len();
        state.rows.retain(|r| r.id != id);
        Ok(state.rows.len() < before)
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        self.check_available()
    }
}

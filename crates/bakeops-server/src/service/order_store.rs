//! In-memory order directory
//!
//! Stand-in for the external CRUD platform: keeps each order's current
//! lifecycle status keyed by `(kind, id)`. The lock and lifecycle
//! subsystems only see it through the `ResourceDirectory` trait, so a real
//! deployment replaces this with its own persistence-backed directory.

use std::sync::Arc;

use bakeops_common::ResourceKind;
use bakeops_lifecycle::{ResourceDirectory, initial_status};
use dashmap::DashMap;

#[derive(Clone, Default)]
pub struct InMemoryOrderStore {
    orders: Arc<DashMap<(ResourceKind, String), String>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self {
            orders: Arc::new(DashMap::new()),
        }
    }

    /// Register an order in its kind's initial status
    ///
    /// Returns the initial status, or `None` when the id is already taken.
    pub fn create(&self, kind: ResourceKind, resource_id: &str) -> Option<String> {
        let key = (kind, resource_id.to_string());
        if self.orders.contains_key(&key) {
            return None;
        }
        let status = initial_status(kind).to_string();
        self.orders.insert(key, status.clone());
        Some(status)
    }

    pub fn set_status(&self, kind: ResourceKind, resource_id: &str, status: &str) -> bool {
        match self.orders.get_mut(&(kind, resource_id.to_string())) {
            Some(mut entry) => {
                *entry = status.to_string();
                true
            }
            None => false,
        }
    }

    /// Remove an order; returns `true` when something was deleted
    pub fn delete(&self, kind: ResourceKind, resource_id: &str) -> bool {
        self.orders
            .remove(&(kind, resource_id.to_string()))
            .is_some()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl ResourceDirectory for InMemoryOrderStore {
    fn exists(&self, kind: ResourceKind, resource_id: &str) -> bool {
        self.orders.contains_key(&(kind, resource_id.to_string()))
    }

    fn status_of(&self, kind: ResourceKind, resource_id: &str) -> Option<String> {
        self.orders
            .get(&(kind, resource_id.to_string()))
            .map(|status| status.clone())
    }
}

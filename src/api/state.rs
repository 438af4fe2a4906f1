//! Application state for the shift engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::SchedulingConfig;
use crate::store::InMemoryStore;

/// Shared application state.
///
/// Contains the store and the scheduling policy, both shared across all
/// request handlers.
#[derive(Clone)]
pub struct AppState {
    store: Arc<InMemoryStore>,
    config: Arc<SchedulingConfig>,
}

impl AppState {
    /// Creates application state with an empty store.
    pub fn new(config: SchedulingConfig) -> Self {
        Self::with_store(Arc::new(InMemoryStore::new()), config)
    }

    /// Creates application state around an existing store.
    pub fn with_store(store: Arc<InMemoryStore>, config: SchedulingConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Returns the store.
    pub fn store(&self) -> &InMemoryStore {
        &self.store
    }

    /// Returns the scheduling configuration.
    pub fn config(&self) -> &SchedulingConfig {
        &self.config
    }
}

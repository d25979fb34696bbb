//! Shared application state

use std::sync::Arc;

use stockroom_core::Store;
use tokio::sync::RwLock;

/// Shared state handed to every handler
///
/// The store itself is single-threaded and lock-free; the RwLock here is
/// boundary plumbing so the router can be cloned across tasks. Each
/// operation runs to completion under one guard, and no guard is held
/// across any await other than the acquisition itself.
#[derive(Debug, Clone)]
pub struct AppState {
    store: Arc<RwLock<Store>>,
}

impl AppState {
    /// Wrap an explicitly constructed store
    ///
    /// The store is injected rather than global: the binary builds one for
    /// the process lifetime, tests build one per test for isolation.
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Shared handle to the store
    pub fn store(&self) -> &RwLock<Store> {
        &self.store
    }
}

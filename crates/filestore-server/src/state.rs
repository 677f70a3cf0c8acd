use std::sync::Arc;

use filestore_store::{DocumentStore, InMemoryDocumentStore, StoreConfig};

/// Shared state handed to every handler.
///
/// The store is injected here; handlers never reach for a global.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory(config: StoreConfig) -> Self {
        Self::new(Arc::new(InMemoryDocumentStore::with_config(config)))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory(StoreConfig::default())
    }
}

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use filestore_crypto::ContentHasher;
use filestore_types::Document;

use crate::config::{StoreConfig, UpdatePolicy};
use crate::error::{StoreError, StoreResult};
use crate::traits::DocumentStore;

/// In-memory, HashMap-based document store.
///
/// One `RwLock` guards the whole map. Content hashes are computed before the
/// lock is taken so the critical section is just the map operation.
pub struct InMemoryDocumentStore {
    documents: RwLock<HashMap<String, Document>>,
    config: StoreConfig,
}

impl InMemoryDocumentStore {
    /// Create a new empty store with the default (upsert) update policy.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// Number of documents currently stored.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read_guard()?.len())
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.read_guard()?.is_empty())
    }

    /// Total content bytes across all documents.
    pub fn total_bytes(&self) -> StoreResult<u64> {
        Ok(self
            .read_guard()?
            .values()
            .map(|doc| doc.size() as u64)
            .sum())
    }

    /// Remove all documents.
    pub fn clear(&self) -> StoreResult<()> {
        self.write_guard()?.clear();
        Ok(())
    }

    fn read_guard(&self) -> StoreResult<RwLockReadGuard<'_, HashMap<String, Document>>> {
        self.documents
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }

    fn write_guard(&self) -> StoreResult<RwLockWriteGuard<'_, HashMap<String, Document>>> {
        self.documents
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }
}

fn make_document(name: &str, content: &str) -> Document {
    Document::new(name, content, ContentHasher::DOCUMENT.hash_str(content))
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn add(&self, name: &str, content: &str) -> StoreResult<()> {
        let doc = make_document(name, content);
        let mut map = self.write_guard()?;
        if map.contains_key(name) {
            return Err(StoreError::AlreadyExists {
                name: name.to_string(),
            });
        }
        map.insert(doc.name.clone(), doc);
        Ok(())
    }

    fn remove(&self, name: &str) -> StoreResult<()> {
        let mut map = self.write_guard()?;
        match map.remove(name) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound {
                name: name.to_string(),
            }),
        }
    }

    fn update(&self, name: &str, content: &str) -> StoreResult<()> {
        let doc = make_document(name, content);
        let mut map = self.write_guard()?;
        if self.config.update_policy == UpdatePolicy::RequireExisting && !map.contains_key(name) {
            return Err(StoreError::NotFound {
                name: name.to_string(),
            });
        }
        map.insert(doc.name.clone(), doc);
        Ok(())
    }

    fn list(&self) -> StoreResult<Vec<String>> {
        Ok(self.read_guard()?.keys().cloned().collect())
    }

    fn get(&self, name: &str) -> StoreResult<Option<Document>> {
        Ok(self.read_guard()?.get(name).cloned())
    }

    fn snapshot(&self) -> StoreResult<Vec<Document>> {
        Ok(self.read_guard()?.values().cloned().collect())
    }

    fn contains(&self, name: &str) -> StoreResult<bool> {
        Ok(self.read_guard()?.contains_key(name))
    }
}

impl std::fmt::Debug for InMemoryDocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.documents.read().map(|m| m.len()).unwrap_or(0);
        f.debug_struct("InMemoryDocumentStore")
            .field("document_count", &count)
            .field("update_policy", &self.config.update_policy)
            .finish()
    }
}

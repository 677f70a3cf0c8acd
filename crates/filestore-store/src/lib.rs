//! Document storage for the file store.
//!
//! Holds the mapping from document name to [`Document`] for the lifetime of
//! the process. Nothing is persisted.
//!
//! # Backends
//!
//! All backends implement the [`DocumentStore`] trait:
//!
//! - [`InMemoryDocumentStore`] -- `HashMap` behind a single `RwLock`
//!
//! # Design Rules
//!
//! 1. Names are unique; no document exists without a name.
//! 2. Mutations (add, remove, update) hold the write lock for their duration.
//! 3. Reads (list, get, snapshot) hold the read lock and never block each other.
//! 4. Callers get clones, never references into the map.
//! 5. The content hash is recomputed on every write.
//!
//! [`Document`]: filestore_types::Document

pub mod config;
pub mod error;
pub mod memory;
pub mod traits;

pub use config::{StoreConfig, UpdatePolicy};
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryDocumentStore;
pub use traits::DocumentStore;

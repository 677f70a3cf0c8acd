use thiserror::Error;

/// Errors from document store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// `add` targeted a name that is already taken.
    #[error("file already exists: {name}")]
    AlreadyExists { name: String },

    /// `remove`, `get`, or a strict `update` targeted a missing name.
    #[error("file not found: {name}")]
    NotFound { name: String },

    /// A writer panicked while holding the lock.
    #[error("store lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

//! Wire protocol for the file store.
//!
//! Endpoint paths, form field names, and the JSON shapes exchanged between
//! the `store` client and the server. Both sides depend on this crate so the
//! two can never drift apart.

pub mod endpoint;
pub mod message;

pub use endpoint::{endpoints, fields, DEFAULT_LIMIT, DEFAULT_ORDER};
pub use message::{DocumentResponse, FileQuery, FreqWordsQuery, HealthResponse};

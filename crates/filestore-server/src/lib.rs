//! HTTP server for the file store.
//!
//! A thin adapter over [`filestore_store::DocumentStore`] and
//! [`filestore_analysis`]: form fields in, JSON or plain text out. Store errors
//! become plain-text bodies with 409 (already exists), 404 (not found),
//! 400 (malformed form), 413 (oversized body), 415 (not a form) or 500.

pub mod config;
pub mod error;
pub mod form;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use form::DocumentForm;
pub use router::build_router;
pub use server::FileStoreServer;
pub use state::AppState;

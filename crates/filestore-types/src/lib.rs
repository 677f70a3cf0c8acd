//! Foundation types for the file store.
//!
//! Every other crate in the workspace depends on `filestore-types`.
//!
//! # Key Types
//!
//! - [`Document`] -- a named text blob together with the hash of its content
//! - [`ContentHash`] -- 32-byte BLAKE3 digest, hex-encoded on the wire

pub mod document;
pub mod error;
pub mod hash;

pub use document::Document;
pub use error::TypeError;
pub use hash::ContentHash;

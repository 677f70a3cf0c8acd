//! Content hashing for the file store.
//!
//! Wraps BLAKE3 with a domain tag so document digests can never collide with
//! digests computed for some other purpose over the same bytes.

pub mod hasher;

pub use hasher::ContentHasher;

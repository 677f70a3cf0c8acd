use serde::{Deserialize, Serialize};

use crate::hash::ContentHash;

/// A named text blob held by the store.
///
/// The name is the only identifier. Readers always receive an owned clone, so
/// a `Document` never aliases the store's own copy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    pub content: String,
    pub hash: ContentHash,
}

impl Document {
    pub fn new(name: impl Into<String>, content: impl Into<String>, hash: ContentHash) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            hash,
        }
    }

    /// Content length in bytes.
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

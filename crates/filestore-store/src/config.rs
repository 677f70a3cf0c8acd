use serde::{Deserialize, Serialize};

/// What `update` does when the target name is not in the store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdatePolicy {
    /// Create the document silently. `update` never fails.
    #[default]
    Upsert,
    /// Fail with `StoreError::NotFound`, mirroring `remove`.
    RequireExisting,
}

/// Configuration for an in-memory document store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub update_policy: UpdatePolicy,
}

impl StoreConfig {
    /// Update only touches documents that already exist.
    pub fn strict() -> Self {
        Self {
            update_policy: UpdatePolicy::RequireExisting,
        }
    }
}

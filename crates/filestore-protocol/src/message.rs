use serde::{Deserialize, Serialize};

use filestore_analysis::SortOrder;
use filestore_types::{ContentHash, Document};

use crate::endpoint::{fields, DEFAULT_LIMIT};

/// Body of a successful `/get`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentResponse {
    pub name: String,
    pub content: String,
    pub hash: ContentHash,
}

impl From<Document> for DocumentResponse {
    fn from(doc: Document) -> Self {
        Self {
            name: doc.name,
            content: doc.content,
            hash: doc.hash,
        }
    }
}

/// Query string of `/get`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FileQuery {
    #[serde(default)]
    pub filename: String,
}

/// Query string of `/freq-words`.
///
/// Both fields are kept as raw strings so malformed values fall back to the
/// defaults instead of rejecting the request.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FreqWordsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
}

impl FreqWordsQuery {
    pub fn new(limit: i64, order: SortOrder) -> Self {
        Self {
            limit: Some(limit.to_string()),
            order: Some(order.as_str().to_string()),
        }
    }

    /// Build from raw query pairs. A repeated key keeps its first value and
    /// unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                fields::LIMIT => &mut query.limit,
                fields::ORDER => &mut query.order,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    /// Requested limit, or [`DEFAULT_LIMIT`] if missing or not an integer.
    pub fn limit(&self) -> i64 {
        self.limit
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(DEFAULT_LIMIT)
    }

    /// Requested order. Missing or empty means descending.
    pub fn order(&self) -> SortOrder {
        self.order
            .as_deref()
            .map(SortOrder::from_param)
            .unwrap_or_default()
    }
}

/// Body of `/health`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub documents: usize,
}

impl HealthResponse {
    pub fn ok(documents: usize) -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            documents,
        }
    }
}

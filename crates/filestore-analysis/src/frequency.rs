use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::tokenizer::words;

/// Direction of the count ordering in a ranking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    /// Parse a request parameter. Only the exact string `"asc"` selects
    /// ascending order; anything else, including garbage, is descending.
    pub fn from_param(param: &str) -> Self {
        if param == "asc" {
            Self::Ascending
        } else {
            Self::Descending
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "dsc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive word occurrence counts for one piece of text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn from_text(text: &str) -> Self {
        let mut counts = HashMap::new();
        for word in words(text) {
            *counts.entry(word).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sort by count in `order`. Equal counts are ordered by word, ascending,
    /// so the ranking is deterministic.
    pub fn into_ranked(self, order: SortOrder) -> RankedWords {
        let mut entries: Vec<(String, usize)> = self.counts.into_iter().collect();
        entries.sort_by(|(wa, ca), (wb, cb)| {
            let by_count = match order {
                SortOrder::Ascending => ca.cmp(cb),
                SortOrder::Descending => cb.cmp(ca),
            };
            match by_count {
                Ordering::Equal => wa.cmp(wb),
                other => other,
            }
        });
        RankedWords(entries)
    }
}

/// Words with their counts, in ranked order.
///
/// Serializes as a JSON object whose keys appear in rank order, and
/// deserializes without losing that order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RankedWords(Vec<(String, usize)>);

impl RankedWords {
    pub fn new(entries: Vec<(String, usize)>) -> Self {
        Self(entries)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(w, c)| (w.as_str(), *c))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Count for `word`, if it made the cut.
    pub fn get(&self, word: &str) -> Option<usize> {
        self.0.iter().find(|(w, _)| w == word).map(|(_, c)| *c)
    }

    pub fn words(&self) -> Vec<&str> {
        self.0.iter().map(|(w, _)| w.as_str()).collect()
    }

    pub fn truncate(&mut self, len: usize) {
        self.0.truncate(len);
    }

    pub fn into_vec(self) -> Vec<(String, usize)> {
        self.0
    }
}

impl Serialize for RankedWords {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (word, count) in &self.0 {
            map.serialize_entry(word, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RankedWords {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RankedVisitor;

        impl<'de> Visitor<'de> for RankedVisitor {
            type Value = RankedWords;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of word to count")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((word, count)) = access.next_entry::<String, usize>()? {
                    entries.push((word, count));
                }
                Ok(RankedWords(entries))
            }
        }

        deserializer.deserialize_map(RankedVisitor)
    }
}

/// The `limit` most (or least) frequent words in `text`.
///
/// A `limit` of zero or less yields an empty ranking; a `limit` beyond the
/// number of distinct words yields all of them.
pub fn frequent_words(text: &str, limit: i64, order: SortOrder) -> RankedWords {
    if text.is_empty() || limit <= 0 {
        return RankedWords::default();
    }
    let mut ranked = FrequencyTable::from_text(text).into_ranked(order);
    ranked.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    ranked
}

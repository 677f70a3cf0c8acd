//! Text analytics for the file store.
//!
//! Pure, stateless functions over text. Nothing in this crate can fail:
//! empty or odd input always yields a well-defined result.
//!
//! Two token definitions are in play:
//!
//! - [`word_count`] counts whitespace-delimited fields, punctuation included.
//! - [`frequent_words`] first collapses every run of characters outside
//!   `[A-Za-z0-9]` to a single space, then lowercases the remaining fields.

pub mod frequency;
pub mod tokenizer;

pub use frequency::{frequent_words, FrequencyTable, RankedWords, SortOrder};
pub use tokenizer::word_count;

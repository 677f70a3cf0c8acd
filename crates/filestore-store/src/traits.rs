use filestore_types::Document;

use crate::error::StoreResult;

/// Named document storage.
///
/// All implementations must satisfy these invariants:
/// - Names are unique within the store at all times.
/// - Mutations are linearized: two concurrent `add` calls for one name see
///   exactly one success and one `AlreadyExists`.
/// - Reads return owned copies and never observe a half-written document.
pub trait DocumentStore: Send + Sync {
    /// Insert a new document.
    ///
    /// Fails with `AlreadyExists` if `name` is taken; the existing document is
    /// left untouched.
    fn add(&self, name: &str, content: &str) -> StoreResult<()>;

    /// Delete a document. Fails with `NotFound` if `name` is absent.
    fn remove(&self, name: &str) -> StoreResult<()>;

    /// Replace a document's content wholesale.
    ///
    /// Whether a missing name is created or rejected depends on the store's
    /// [`UpdatePolicy`](crate::UpdatePolicy).
    fn update(&self, name: &str, content: &str) -> StoreResult<()>;

    /// All current names, in no particular order.
    fn list(&self) -> StoreResult<Vec<String>>;

    /// Look up a document by name.
    ///
    /// Returns `Ok(None)` if the document does not exist.
    fn get(&self, name: &str) -> StoreResult<Option<Document>>;

    /// Every document, copied out under a single read lock.
    fn snapshot(&self) -> StoreResult<Vec<Document>>;

    /// Check whether a document exists.
    fn contains(&self, name: &str) -> StoreResult<bool> {
        Ok(self.get(name)?.is_some())
    }

    /// Every document's content joined by a single space.
    ///
    /// This is the corpus fed to frequency analysis. Iteration order follows
    /// [`snapshot`](Self::snapshot) and is unspecified.
    fn corpus(&self) -> StoreResult<String> {
        let docs = self.snapshot()?;
        let mut corpus = String::with_capacity(docs.iter().map(|d| d.size() + 1).sum());
        for doc in &docs {
            corpus.push_str(&doc.content);
            corpus.push(' ');
        }
        Ok(corpus)
    }
}

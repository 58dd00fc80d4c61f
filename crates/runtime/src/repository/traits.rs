//! Persistence contract for opaque blobs keyed by string.

use super::error::Result;

/// Key-value blob store.
///
/// The runtime keeps the whole roster under one key and cached records under
/// `record:<id>` / `record-name:<name>`. Values are opaque to the store.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Insert or overwrite.
    fn put(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Removing an absent key is not an error.
    fn delete(&self, key: &str) -> Result<()>;

    fn contains(&self, key: &str) -> bool {
        matches!(self.get(key), Ok(Some(_)))
    }

    /// All stored keys, sorted.
    fn keys(&self) -> Result<Vec<String>>;
}

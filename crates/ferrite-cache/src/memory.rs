//! In-memory cache store.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::CacheError;
use crate::CacheStore;

/// A thread-safe, process-local cache store.
///
/// Useful for single-process deployments and tests. Entries live until
/// deleted; there is no eviction.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<HashMap<String, serde_json::Value>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.read().map_or(0, |items| items.len())
    }

    /// Whether the store has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CacheStore for MemoryStore {
    fn put(&self, key: &str, value: serde_json::Value) -> Result<(), CacheError> {
        let mut items = self
            .items
            .write()
            .map_err(|_| CacheError::Store(String::from("poisoned lock")))?;
        items.insert(key.to_owned(), value);
        tracing::trace!(key, "cache put");
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<serde_json::Value>, CacheError> {
        let items = self
            .items
            .read()
            .map_err(|_| CacheError::Store(String::from("poisoned lock")))?;
        Ok(items.get(key).cloned())
    }

    fn del(&self, key: &str) -> Result<(), CacheError> {
        let mut items = self
            .items
            .write()
            .map_err(|_| CacheError::Store(String::from("poisoned lock")))?;
        items.remove(key);
        tracing::trace!(key, "cache del");
        Ok(())
    }
}

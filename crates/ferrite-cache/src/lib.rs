//! # ferrite-cache
//!
//! The key/value contract the engine uses to memoize query results.
//!
//! A [`CacheStore`] persists JSON values keyed by a fingerprint of the SQL
//! statement and its bound arguments. The crate ships the contract, the
//! [`fingerprint`] keying scheme, and an in-memory backend; durable
//! backends live behind the same trait elsewhere.
//!
//! ```rust
//! use ferrite_cache::{fingerprint, CacheStore, MemoryStore};
//! use ferrite_core::SqlValue;
//!
//! let store = MemoryStore::new();
//! let key = fingerprint("SELECT * FROM t WHERE id = ?", &[SqlValue::Int(7)]);
//! store.put(&key, serde_json::json!({"id": 7}))?;
//! assert!(store.get(&key)?.is_some());
//! store.del(&key)?;
//! assert!(store.get(&key)?.is_none());
//! # Ok::<(), ferrite_cache::CacheError>(())
//! ```
//!
//! Eviction policy is deliberately absent: stores hold what they are given
//! until deleted.

mod error;
mod memory;

pub use error::CacheError;
pub use memory::MemoryStore;

use ferrite_core::SqlValue;

/// A key/value store memoizing query results.
///
/// Implementations must be safe for concurrent use. A missing key is
/// `Ok(None)`, not an error.
pub trait CacheStore: Send + Sync {
    /// Stores `value` under `key`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// When the backend cannot accept the write.
    fn put(&self, key: &str, value: serde_json::Value) -> Result<(), CacheError>;

    /// Fetches the entry under `key`.
    ///
    /// # Errors
    ///
    /// Only for backend failures; a missing key is `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>, CacheError>;

    /// Removes the entry under `key`; removing a missing key is fine.
    ///
    /// # Errors
    ///
    /// When the backend cannot perform the removal.
    fn del(&self, key: &str) -> Result<(), CacheError>;
}

/// Canonical cache key for a SQL statement and its bound arguments.
///
/// Two operations share a cache entry iff their SQL and argument lists
/// render identically.
#[must_use]
pub fn fingerprint(sql: &str, args: &[SqlValue]) -> String {
    // serde_json renders every SqlValue; non-finite floats become null
    serde_json::to_string(args)
        .map_or_else(|_| sql.to_owned(), |rendered| format!("{sql}-{rendered}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_varies_with_args() {
        let a = fingerprint("SELECT 1", &[SqlValue::Int(1)]);
        let b = fingerprint("SELECT 1", &[SqlValue::Int(2)]);
        let c = fingerprint("SELECT 2", &[SqlValue::Int(1)]);
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_fingerprint_is_stable() {
        let args = [SqlValue::Text(String::from("x")), SqlValue::Null];
        assert_eq!(fingerprint("SELECT 1", &args), fingerprint("SELECT 1", &args));
    }

    #[test]
    fn test_fingerprint_embeds_sql() {
        let key = fingerprint("SELECT * FROM t", &[]);
        assert!(key.starts_with("SELECT * FROM t-"));
    }
}

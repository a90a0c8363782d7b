//! Error types for cache stores.

use thiserror::Error;

/// Cache store failures.
#[derive(Debug, Error)]
pub enum CacheError {
    /// A value could not be serialized or deserialized.
    #[error("cache serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backend failed (I/O, poisoned lock, connection loss).
    #[error("cache store error: {0}")]
    Store(String),
}

//! Error types for the hook chain.

use thiserror::Error;

/// Errors surfaced by hooks and hook-wrapped operations.
///
/// Values are cloneable and comparable so the chain can carry an in-flight
/// error through the after-phase and return it unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HookError {
    /// The wrapped database operation failed.
    #[error("database error: {0}")]
    Database(String),

    /// A before-hook rejected the operation.
    #[error("hook `{hook}` rejected operation: {reason}")]
    Rejected {
        /// Name of the rejecting hook.
        hook: String,
        /// Why the operation was aborted.
        reason: String,
    },

    /// The operation was canceled before execution.
    #[error("operation canceled")]
    Canceled,

    /// Any other hook-reported failure.
    #[error("{0}")]
    Other(String),
}

impl HookError {
    /// Convenience constructor for a before-hook rejection.
    #[must_use]
    pub fn rejected(hook: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Rejected {
            hook: hook.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for hook operations.
pub type Result<T> = std::result::Result<T, HookError>;

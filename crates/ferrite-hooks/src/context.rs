//! The per-operation context threaded through the hook chain.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use ferrite_core::SqlValue;

use crate::error::HookError;

/// Ambient data propagated through before-hooks.
///
/// A before-hook may replace the operation's scope wholesale or add entries
/// to it; later hooks and the engine observe the updated value. Entries are
/// JSON values keyed by name (tenant ids, shard picks, trace ids).
#[derive(Debug, Clone, Default)]
pub struct Scope {
    values: HashMap<String, serde_json::Value>,
}

impl Scope {
    /// Creates an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion.
    #[must_use]
    pub fn with_value(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.set(key, value);
        self
    }

    /// Inserts or replaces an entry.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Looks up an entry.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.values.get(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the scope has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Outcome of a successful operation, as reported by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecResult {
    /// Rows touched by the statement.
    pub rows_affected: u64,
    /// Last insert id, when the driver reports one.
    pub last_insert_id: Option<i64>,
}

/// Everything a hook may observe about one database operation.
///
/// The engine creates the context before running its before-hooks, executes
/// the operation, records the outcome with [`finish`](Self::finish), and
/// then runs the after-hooks.
#[derive(Debug, Clone)]
pub struct ExecContext {
    /// Replaceable ambient scope; before-hooks may swap or extend it.
    pub scope: Scope,
    /// The SQL about to execute.
    pub sql: String,
    /// Bound arguments.
    pub args: Vec<SqlValue>,
    /// When the context was created.
    started: Instant,
    /// Time the operation took; `None` until [`finish`](Self::finish).
    pub elapsed: Option<Duration>,
    /// Driver result, when the operation succeeded.
    pub result: Option<ExecResult>,
    /// In-flight error, set by the operation or by an earlier hook.
    pub error: Option<HookError>,
}

impl ExecContext {
    /// Creates a context for one operation, stamping the start time.
    #[must_use]
    pub fn new(sql: impl Into<String>, args: Vec<SqlValue>) -> Self {
        Self {
            scope: Scope::new(),
            sql: sql.into(),
            args,
            started: Instant::now(),
            elapsed: None,
            result: None,
            error: None,
        }
    }

    /// Builder-style scope attachment.
    #[must_use]
    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    /// When the operation started.
    #[must_use]
    pub const fn started(&self) -> Instant {
        self.started
    }

    /// Records the operation's outcome and elapsed time.
    pub fn finish(&mut self, result: Option<ExecResult>, error: Option<HookError>) {
        self.elapsed = Some(self.started.elapsed());
        self.result = result;
        self.error = error;
    }
}

//! # ferrite-hooks
//!
//! An ordered chain of observers wrapping each database operation.
//!
//! Every operation builds an [`ExecContext`] carrying its SQL, bound
//! arguments, timing, result, and in-flight error. Registered [`Hook`]s see
//! the context twice:
//!
//! - **before** the operation, in insertion order, failing fast: the first
//!   hook error aborts the operation and is returned unchanged
//! - **after** the operation, in insertion order, never short-circuiting:
//!   observers must all run, and the operation's own error is never masked
//!   by a complaining observer
//!
//! ```rust
//! use ferrite_hooks::{ExecContext, HookError, Hooks, SqlTracingHook};
//!
//! let mut hooks = Hooks::new();
//! hooks.add_hook(SqlTracingHook);
//!
//! let mut ctx = ExecContext::new("SELECT 1", vec![]);
//! hooks.before_process(&mut ctx)?;
//! // ... run the operation, then:
//! ctx.finish(None, None);
//! hooks.after_process(&ctx)?;
//! # Ok::<(), HookError>(())
//! ```
//!
//! Hooks are synchronous and run on the caller's thread. The chain is
//! assembled during setup (`add_hook` takes `&mut self`) and immutable
//! afterwards, so sharing it across concurrent operations is safe.

mod context;
mod error;
mod hook;
mod log;

pub use context::{ExecContext, ExecResult, Scope};
pub use error::{HookError, Result};
pub use hook::{Hook, Hooks};
pub use log::SqlTracingHook;

//! Hook trait and the ordered hook chain.

use crate::context::ExecContext;
use crate::error::{HookError, Result};

/// An observer wrapping each database operation.
///
/// Before-hooks guard entry (authorization, argument validation, sharding
/// decisions) and must fail fast. After-hooks observe (metrics, logging,
/// cache invalidation) and all run, even when one complains.
pub trait Hook: Send + Sync {
    /// Identifies the hook in errors and logs.
    fn name(&self) -> &'static str;

    /// Runs before the operation.
    ///
    /// May mutate or replace `ctx.scope`.
    ///
    /// # Errors
    ///
    /// Returning an error aborts the operation; the chain propagates it
    /// unchanged.
    fn before(&self, ctx: &mut ExecContext) -> Result<()> {
        let _ = ctx;
        Ok(())
    }

    /// Observes the finished operation, including its error if any.
    ///
    /// # Errors
    ///
    /// Reported to the caller only when the operation itself succeeded; an
    /// in-flight operation error always takes precedence.
    fn after(&self, ctx: &ExecContext) -> Result<()> {
        let _ = ctx;
        Ok(())
    }
}

/// An ordered hook chain; insertion order is execution order.
///
/// Registration takes `&mut self`, so the borrow checker rules out mutation
/// while an operation iterates the chain: assemble during setup, then share
/// immutably.
#[derive(Default)]
pub struct Hooks {
    hooks: Vec<Box<dyn Hook>>,
}

impl Hooks {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a hook; it runs after all previously added hooks.
    pub fn add_hook(&mut self, hook: impl Hook + 'static) {
        self.hooks.push(Box::new(hook));
    }

    /// Number of registered hooks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Whether the chain is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Runs every before-hook in insertion order.
    ///
    /// # Errors
    ///
    /// Stops at the first hook error and returns it unchanged; scope changes
    /// made up to that point remain visible in `ctx` for diagnostics, but
    /// the caller must not proceed with the operation.
    pub fn before_process(&self, ctx: &mut ExecContext) -> Result<()> {
        for hook in &self.hooks {
            tracing::trace!(hook = hook.name(), sql = %ctx.sql, "before hook");
            hook.before(ctx)?;
        }
        Ok(())
    }

    /// Runs every after-hook in insertion order, never short-circuiting.
    ///
    /// # Errors
    ///
    /// Returns, in priority order: the context's in-flight error if set,
    /// else the last error any after-hook reported, else success. A hook
    /// complaint never masks the operation's own failure.
    pub fn after_process(&self, ctx: &ExecContext) -> Result<()> {
        let mut last_err: Option<HookError> = None;
        for hook in &self.hooks {
            tracing::trace!(hook = hook.name(), sql = %ctx.sql, "after hook");
            if let Err(err) = hook.after(ctx) {
                last_err = Some(err);
            }
        }
        if let Some(err) = &ctx.error {
            return Err(err.clone());
        }
        last_err.map_or(Ok(()), Err)
    }
}

impl std::fmt::Debug for Hooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hooks").field("len", &self.hooks.len()).finish()
    }
}

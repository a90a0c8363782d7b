//! Built-in tracing hook.

use crate::context::ExecContext;
use crate::error::Result;
use crate::hook::Hook;

/// Logs each operation's SQL, bind count, timing, and outcome through
/// `tracing`.
///
/// Failures log at `warn`, successes at `debug`. The hook itself never
/// errors, so it is safe anywhere in the chain.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqlTracingHook;

impl Hook for SqlTracingHook {
    fn name(&self) -> &'static str {
        "sql-tracing"
    }

    fn before(&self, ctx: &mut ExecContext) -> Result<()> {
        tracing::debug!(sql = %ctx.sql, args = ctx.args.len(), "executing");
        Ok(())
    }

    fn after(&self, ctx: &ExecContext) -> Result<()> {
        match &ctx.error {
            Some(err) => {
                tracing::warn!(sql = %ctx.sql, elapsed = ?ctx.elapsed, %err, "operation failed");
            }
            None => {
                let rows = ctx.result.map(|r| r.rows_affected);
                tracing::debug!(sql = %ctx.sql, elapsed = ?ctx.elapsed, rows, "operation finished");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HookError;

    #[test]
    fn test_tracing_hook_never_errors() {
        let hook = SqlTracingHook;
        let mut ctx = ExecContext::new("SELECT 1", vec![]);
        assert!(hook.before(&mut ctx).is_ok());
        ctx.finish(None, Some(HookError::Canceled));
        assert!(hook.after(&ctx).is_ok());
    }
}

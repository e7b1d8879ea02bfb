//! Commit hook - the last gate before staged mutations become visible
//!
//! The hook stands in for the external persistence layer's commit step:
//! checked after execution, before any write-back. A failing hook aborts the
//! whole batch with `PersistenceCommitFailed` and zero mutations visible.

use quickact_core::{QuickActionError, Result};

/// Commit hook: allow or fail a write-back before any mutation is stored.
pub trait CommitHook: Send + Sync {
    /// Check whether the commit may proceed.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceCommitFailed` if the commit must be aborted.
    fn check(&self, issuable_id: &str) -> Result<()>;
}

/// Always allows (default for hosts and tests that don't test commit failure).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCommitHook;

impl CommitHook for NoopCommitHook {
    fn check(&self, _: &str) -> Result<()> {
        Ok(())
    }
}

/// Always fails (for tests that verify rollback leaves the store untouched).
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingCommitHook;

impl CommitHook for FailingCommitHook {
    fn check(&self, issuable_id: &str) -> Result<()> {
        Err(QuickActionError::PersistenceCommitFailed {
            message: format!("commit rejected for issuable {issuable_id}"),
        })
    }
}

//! Engine-level operations over the issuable store
//!
//! Each operation acquires the store lock for its full duration (read,
//! execute, commit), so two concurrent calls on the same entity can never
//! interleave their mutations. The commit hook runs after execution and
//! before write-back; on failure nothing is written.

use std::sync::Mutex;

use quickact_core::{
    process, Actor, CommandRegistry, ExecutionMode, Issuable, IssuableKind, QuickActionError,
    Report, Result,
};
use quickact_core_types::{schema, RequestContext};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::commit::{CommitHook, NoopCommitHook};
use crate::store::IssuableStore;

/// Result of processing a note against an existing issuable
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteOutcome {
    /// Note text with command lines stripped; this is what gets displayed
    pub note_text: String,

    /// Aggregated per-command outcomes
    pub report: Report,
}

/// Result of creating an issuable whose description carried commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateOutcome {
    /// ID of the newly stored issuable
    pub issuable_id: String,

    /// Aggregated per-command outcomes
    pub report: Report,
}

/// Transactional quick-action engine
///
/// Owns the store behind an exclusive lock; construction wires in the
/// command registry and commit hook once, after which both are read-only.
pub struct QuickActionEngine {
    store: Mutex<IssuableStore>,
    registry: CommandRegistry,
    commit_hook: Box<dyn CommitHook>,
}

impl QuickActionEngine {
    /// Create an engine over a store with the built-in command set
    pub fn new(store: IssuableStore) -> Self {
        Self {
            store: Mutex::new(store),
            registry: CommandRegistry::with_defaults(),
            commit_hook: Box::new(NoopCommitHook),
        }
    }

    /// Replace the command registry
    pub fn with_registry(mut self, registry: CommandRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Replace the commit hook
    pub fn with_commit_hook(mut self, hook: Box<dyn CommitHook>) -> Self {
        self.commit_hook = hook;
        self
    }

    /// Create an issuable, interpreting commands in its description
    ///
    /// Commands execute against the freshly created entity before it is
    /// stored; the persisted description is the cleaned text.
    ///
    /// # Errors
    ///
    /// Propagates processing errors from the core pipeline, plus
    /// `UnknownProject` and `PersistenceCommitFailed`.
    pub fn create_issuable(
        &self,
        actor: &Actor,
        project_id: &str,
        kind: IssuableKind,
        title: &str,
        raw_description: &str,
    ) -> Result<CreateOutcome> {
        let ctx = RequestContext::new();
        info!(
            request_id = %ctx.request_id,
            op = "create_issuable",
            project_id = %project_id,
            actor_id = %actor.id,
            event = schema::EVENT_START,
            "creating issuable"
        );

        let mut store = self.lock_store()?;
        let project = store.get_project(project_id)?.clone();

        let issuable = Issuable::new(
            Uuid::now_v7().to_string(),
            kind,
            project_id.to_string(),
            title,
        );

        let output = process(
            actor,
            &issuable,
            &project,
            &self.registry,
            raw_description,
            ExecutionMode::Apply,
        )
        .map_err(|err| self.log_error(&ctx, "create_issuable", err))?;

        self.commit_hook
            .check(&issuable.id)
            .map_err(|err| self.log_error(&ctx, "create_issuable", err))?;

        let mut stored = output.issuable;
        stored.description = output.cleaned_text;
        let issuable_id = stored.id.clone();
        store.insert_issuable(stored)?;

        info!(
            request_id = %ctx.request_id,
            op = "create_issuable",
            issuable_id = %issuable_id,
            applied = output.report.applied_count,
            event = schema::EVENT_END,
            "issuable created"
        );

        Ok(CreateOutcome {
            issuable_id,
            report: output.report,
        })
    }

    /// Process a note posted to an existing issuable and commit its effects
    ///
    /// # Errors
    ///
    /// Propagates processing errors from the core pipeline, plus
    /// `IssuableNotFound` and `PersistenceCommitFailed`. On any error the
    /// stored entity is unchanged.
    pub fn apply_note(
        &self,
        actor: &Actor,
        issuable_id: &str,
        note_text: &str,
    ) -> Result<NoteOutcome> {
        self.process_note(actor, issuable_id, note_text, ExecutionMode::Apply)
    }

    /// Explain what a note's commands would do, without committing anything
    ///
    /// # Errors
    ///
    /// Propagates processing errors from the core pipeline and
    /// `IssuableNotFound`. The commit hook is never consulted.
    pub fn preview_note(
        &self,
        actor: &Actor,
        issuable_id: &str,
        note_text: &str,
    ) -> Result<NoteOutcome> {
        self.process_note(actor, issuable_id, note_text, ExecutionMode::Preview)
    }

    /// Fetch a copy of a stored issuable
    ///
    /// # Errors
    ///
    /// Returns `IssuableNotFound` if the issuable doesn't exist.
    pub fn issuable(&self, issuable_id: &str) -> Result<Issuable> {
        let store = self.lock_store()?;
        store.get_issuable(issuable_id).cloned()
    }

    fn process_note(
        &self,
        actor: &Actor,
        issuable_id: &str,
        note_text: &str,
        mode: ExecutionMode,
    ) -> Result<NoteOutcome> {
        let op = match mode {
            ExecutionMode::Apply => "apply_note",
            ExecutionMode::Preview => "preview_note",
        };
        let ctx = RequestContext::new();
        info!(
            request_id = %ctx.request_id,
            op = op,
            issuable_id = %issuable_id,
            actor_id = %actor.id,
            event = schema::EVENT_START,
            "processing note"
        );

        let mut store = self.lock_store()?;
        let issuable = store.get_issuable(issuable_id)?.clone();
        let project = store.get_project(&issuable.project_id)?.clone();

        let output = process(actor, &issuable, &project, &self.registry, note_text, mode)
            .map_err(|err| self.log_error(&ctx, op, err))?;

        if mode == ExecutionMode::Apply {
            self.commit_hook
                .check(issuable_id)
                .map_err(|err| self.log_error(&ctx, op, err))?;
            store.replace_issuable(output.issuable)?;
        } else {
            debug!(
                request_id = %ctx.request_id,
                op = op,
                "preview mode, skipping commit"
            );
        }

        info!(
            request_id = %ctx.request_id,
            op = op,
            issuable_id = %issuable_id,
            applied = output.report.applied_count,
            denied = output.report.denied_count,
            event = schema::EVENT_END,
            "note processed"
        );

        Ok(NoteOutcome {
            note_text: output.cleaned_text,
            report: output.report,
        })
    }

    fn lock_store(&self) -> Result<std::sync::MutexGuard<'_, IssuableStore>> {
        self.store.lock().map_err(|_| QuickActionError::Internal {
            message: "issuable store lock poisoned".to_string(),
        })
    }

    fn log_error(
        &self,
        ctx: &RequestContext,
        op: &str,
        err: QuickActionError,
    ) -> QuickActionError {
        warn!(
            request_id = %ctx.request_id,
            op = op,
            err_code = err.code(),
            event = schema::EVENT_END_ERROR,
            "quick-action processing failed"
        );
        err
    }
}

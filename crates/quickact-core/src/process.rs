//! Single entry point for quick-action processing
//!
//! `process()` wires extractor, registry, authorization gate, executor and
//! reporter together over a working copy of the target issuable. It never
//! touches shared state: the caller owns the returned copy and decides
//! whether to commit it (see the engine crate for the transactional
//! boundary).

use tracing::debug;

use crate::errors::{QuickActionError, Result};
use crate::execute::{execute, ExecutionMode};
use crate::extract::extract;
use crate::model::{Actor, Issuable, Project};
use crate::registry::CommandRegistry;
use crate::report::Report;

/// Everything one processing call produces
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessOutput {
    /// Display text with command lines stripped
    ///
    /// Always produced, even when every command failed authorization:
    /// commands are never persisted or rendered as display content.
    pub cleaned_text: String,

    /// Aggregated per-command outcomes
    pub report: Report,

    /// Working copy of the issuable after execution
    ///
    /// Equals the input in [`ExecutionMode::Preview`].
    pub issuable: Issuable,
}

/// Process raw text against an issuable
///
/// Extracts command invocations from `raw_text`, executes them in order of
/// appearance against a working copy, and returns the cleaned display text
/// with a summary report. Per-command failures (unknown keyword, missing
/// capability, state conflict) are reported in the summary and never abort
/// sibling commands.
///
/// # Errors
///
/// * `ProjectMismatch` - the supplied project does not own the issuable
/// * `ActorUnauthorizedForEntity` - the actor is scoped to a different
///   project than the issuable; nothing is extracted or executed
/// * `EntityNotMutable` - the issuable is discussion-locked and the actor
///   holds no capabilities at all (Apply mode only)
pub fn process(
    actor: &Actor,
    issuable: &Issuable,
    project: &Project,
    registry: &CommandRegistry,
    raw_text: &str,
    mode: ExecutionMode,
) -> Result<ProcessOutput> {
    if project.id != issuable.project_id {
        return Err(QuickActionError::ProjectMismatch {
            expected: issuable.project_id.clone(),
            actual: project.id.clone(),
        });
    }

    if actor.project_id != issuable.project_id {
        return Err(QuickActionError::ActorUnauthorizedForEntity {
            actor_id: actor.id.clone(),
            project_id: issuable.project_id.clone(),
        });
    }

    if mode == ExecutionMode::Apply && issuable.discussion_locked && !actor.has_any_capability() {
        return Err(QuickActionError::EntityNotMutable {
            issuable_id: issuable.id.clone(),
            reason: "discussion is locked".to_string(),
        });
    }

    let extraction = extract(raw_text);
    debug!(
        issuable_id = %issuable.id,
        actor_id = %actor.id,
        commands = extraction.invocations.len(),
        "processing quick actions"
    );

    let (outcomes, working) = execute(
        actor,
        issuable,
        project,
        registry,
        extraction.invocations,
        mode,
    );
    let report = Report::summarize(&outcomes);

    Ok(ProcessOutput {
        cleaned_text: extraction.cleaned_text,
        report,
        issuable: working,
    })
}

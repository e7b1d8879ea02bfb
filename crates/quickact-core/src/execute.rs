//! Command executor
//!
//! Applies extracted invocations to a working copy of the target issuable,
//! collecting one [`Outcome`] per invocation. The caller decides what to do
//! with the mutated working copy; nothing here touches shared state, which is
//! what makes the surrounding commit step all-or-nothing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::authorize::authorize;
use crate::extract::Invocation;
use crate::model::{Actor, Issuable, IssuableState, Project};
use crate::registry::{Arity, CommandRegistry, Effect};

/// Whether effects are applied or only explained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Apply effects to the working copy
    Apply,
    /// Leave the working copy untouched; outcome messages explain what the
    /// command would do (future tense)
    Preview,
}

/// Per-command result status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeStatus {
    /// The effect was applied (or, in preview, would be applied)
    Applied,
    /// The effect had nothing to do against the current state
    NoOp,
    /// The actor lacks the required capability
    Denied,
    /// Unknown keyword, missing argument, or unresolvable reference
    Invalid,
    /// The entity's current state forbids this command (fails this command
    /// only, never the batch)
    Conflict,
}

/// The per-command result of one processing call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// The invocation this outcome belongs to
    pub invocation: Invocation,

    /// Result status
    pub status: OutcomeStatus,

    /// Human-readable message bound to the command and status
    pub message: String,
}

/// Execute invocations against a working copy of the issuable
///
/// For each invocation, in extraction order: resolve the keyword against the
/// registry (unresolved: `Invalid`), check authorization (missing capability:
/// `Denied`, no mutation), then apply the descriptor's effect. Effects are
/// deterministic and total over the entity's current state; repeated
/// occurrences of the same keyword execute independently, in order, each
/// seeing the mutations of its predecessors.
///
/// Returns the outcomes and the mutated working copy. In
/// [`ExecutionMode::Preview`] the returned copy equals the input.
pub fn execute(
    actor: &Actor,
    issuable: &Issuable,
    project: &Project,
    registry: &CommandRegistry,
    invocations: Vec<Invocation>,
    mode: ExecutionMode,
) -> (Vec<Outcome>, Issuable) {
    let mut working = issuable.clone();
    let mut outcomes = Vec::with_capacity(invocations.len());

    for invocation in invocations {
        let (status, message) = run_invocation(actor, &mut working, project, registry, &invocation, mode);
        debug!(
            keyword = %invocation.keyword,
            status = ?status,
            issuable_id = %working.id,
            "command executed"
        );
        outcomes.push(Outcome {
            invocation,
            status,
            message,
        });
    }

    (outcomes, working)
}

fn run_invocation(
    actor: &Actor,
    working: &mut Issuable,
    project: &Project,
    registry: &CommandRegistry,
    invocation: &Invocation,
    mode: ExecutionMode,
) -> (OutcomeStatus, String) {
    let Some(descriptor) = registry.resolve(&invocation.keyword) else {
        return (
            OutcomeStatus::Invalid,
            format!("Unknown command: /{}.", invocation.keyword),
        );
    };

    if !authorize(actor, working, descriptor) {
        return (
            OutcomeStatus::Denied,
            denied_message(descriptor.effect, working),
        );
    }

    if descriptor.arity == Arity::Required && invocation.args.is_empty() {
        return (
            OutcomeStatus::Invalid,
            format!(
                "The /{} command requires an argument.",
                descriptor.keyword
            ),
        );
    }

    match descriptor.effect {
        Effect::RemoveMilestone => remove_milestone(working, project, mode),
        Effect::SetMilestone => set_milestone(working, project, invocation, mode),
        Effect::Close => transition(working, IssuableState::Closed, mode),
        Effect::Reopen => transition(working, IssuableState::Opened, mode),
    }
}

fn denied_message(effect: Effect, issuable: &Issuable) -> String {
    let label = issuable.kind.label();
    match effect {
        Effect::RemoveMilestone => "You don't have permission to remove milestone.".to_string(),
        Effect::SetMilestone => "You don't have permission to set milestone.".to_string(),
        Effect::Close => format!("You don't have permission to close this {label}."),
        Effect::Reopen => format!("You don't have permission to reopen this {label}."),
    }
}

/// Clear the milestone reference
///
/// Total over the entity's state: invoking with no milestone set is a no-op,
/// never an error, which also makes the command idempotent.
fn remove_milestone(
    working: &mut Issuable,
    project: &Project,
    mode: ExecutionMode,
) -> (OutcomeStatus, String) {
    let Some(milestone_id) = working.milestone_id.clone() else {
        return (OutcomeStatus::NoOp, "No milestone to remove.".to_string());
    };

    // The referenced milestone lives in the same project by invariant; fall
    // back to the raw id if the reference is dangling.
    let title = project
        .milestone(&milestone_id)
        .map(|m| m.title.clone())
        .unwrap_or(milestone_id);

    match mode {
        ExecutionMode::Preview => (
            OutcomeStatus::Applied,
            format!("Removes %{title} milestone."),
        ),
        ExecutionMode::Apply => {
            working.set_milestone(None);
            (OutcomeStatus::Applied, "Removed milestone.".to_string())
        }
    }
}

fn set_milestone(
    working: &mut Issuable,
    project: &Project,
    invocation: &Invocation,
    mode: ExecutionMode,
) -> (OutcomeStatus, String) {
    // Arity was checked by the caller; first() is present here.
    let Some(reference) = invocation.args.first() else {
        return (
            OutcomeStatus::Invalid,
            "The /milestone command requires an argument.".to_string(),
        );
    };

    let Some(milestone) = project.find_milestone_by_ref(reference) else {
        return (
            OutcomeStatus::Invalid,
            format!("Milestone {reference} does not exist."),
        );
    };

    if working.milestone_id.as_deref() == Some(milestone.id.as_str()) {
        return (
            OutcomeStatus::NoOp,
            format!("Milestone %{} is already set.", milestone.title),
        );
    }

    match mode {
        ExecutionMode::Preview => (
            OutcomeStatus::Applied,
            format!("Sets milestone to %{}.", milestone.title),
        ),
        ExecutionMode::Apply => {
            working.set_milestone(Some(milestone.id.clone()));
            (
                OutcomeStatus::Applied,
                format!("Set milestone to %{}.", milestone.title),
            )
        }
    }
}

fn transition(
    working: &mut Issuable,
    target: IssuableState,
    mode: ExecutionMode,
) -> (OutcomeStatus, String) {
    let label = working.kind.label();

    if working.discussion_locked {
        return (
            OutcomeStatus::Conflict,
            format!("This {label} is locked and its state cannot be changed."),
        );
    }

    if working.state == target {
        let message = match target {
            IssuableState::Closed => format!("This {label} is already closed."),
            IssuableState::Opened => format!("This {label} is already opened."),
        };
        return (OutcomeStatus::NoOp, message);
    }

    match mode {
        ExecutionMode::Preview => {
            let message = match target {
                IssuableState::Closed => format!("Closes this {label}."),
                IssuableState::Opened => format!("Reopens this {label}."),
            };
            (OutcomeStatus::Applied, message)
        }
        ExecutionMode::Apply => {
            working.set_state(target);
            let message = match target {
                IssuableState::Closed => format!("Closed this {label}."),
                IssuableState::Opened => format!("Reopened this {label}."),
            };
            (OutcomeStatus::Applied, message)
        }
    }
}

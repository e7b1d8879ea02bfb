//! Quick-action core - command interpretation for text-embedded directives
//!
//! This crate provides the foundational data structures and operations for
//! interpreting quick actions (lines of text beginning with `/` that are
//! commands rather than display content), including:
//! - Actor, Project, Milestone and Issuable models
//! - Command registry with per-command capability requirements
//! - Line-oriented command extraction with display-text cleaning
//! - Capability-based authorization gate
//! - Atomic command execution over a working copy
//! - Result reporting with per-command outcome messages
//!
//! The single entry point for hosts is [`process::process`].

pub mod authorize;
pub mod errors;
pub mod execute;
pub mod extract;
pub mod logging;
pub mod model;
pub mod process;
pub mod registry;
pub mod report;

// Re-export commonly used types
pub use authorize::authorize;
pub use errors::{QuickActionError, Result};
pub use execute::{execute, ExecutionMode, Outcome, OutcomeStatus};
pub use extract::{extract, Extraction, Invocation};
pub use model::{Actor, Capability, Issuable, IssuableKind, IssuableState, Milestone, Project};
pub use process::{process, ProcessOutput};
pub use registry::{Arity, CommandDescriptor, CommandRegistry, Effect};
pub use report::Report;

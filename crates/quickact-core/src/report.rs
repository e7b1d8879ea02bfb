//! Result reporter
//!
//! Aggregates per-command outcomes into the summary a host renders back to
//! the user. A report is purely derived from its outcomes; it carries no
//! hidden state and can be rebuilt from the same outcomes at any time.

use serde::{Deserialize, Serialize};

use crate::execute::{Outcome, OutcomeStatus};

/// Summary of one processing call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Report {
    /// Number of commands whose effect was applied
    pub applied_count: usize,

    /// Number of commands denied by the authorization gate
    pub denied_count: usize,

    /// Number of unknown or malformed commands
    pub invalid_count: usize,

    /// Per-command messages in outcome order
    pub messages: Vec<String>,
}

impl Report {
    /// Build a report from outcomes
    pub fn summarize(outcomes: &[Outcome]) -> Self {
        let mut report = Report::default();
        for outcome in outcomes {
            match outcome.status {
                OutcomeStatus::Applied => report.applied_count += 1,
                OutcomeStatus::Denied => report.denied_count += 1,
                OutcomeStatus::Invalid => report.invalid_count += 1,
                OutcomeStatus::NoOp | OutcomeStatus::Conflict => {}
            }
            report.messages.push(outcome.message.clone());
        }
        report
    }

    /// The aggregate banner a host shows when commands took effect
    pub fn banner(&self) -> Option<&'static str> {
        if self.applied_count > 0 {
            Some("Commands applied")
        } else {
            None
        }
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A project-scoped grouping entity with an optional target date
///
/// Milestones are referenced by issuables, never owned by them: removing the
/// reference from an issuable does not delete the milestone, and deleting a
/// milestone must not delete referencing issuables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    /// Unique identifier within the project
    pub id: String,

    /// Human-readable title, referenced in command text as `%title`
    pub title: String,

    /// Optional target date
    pub due_date: Option<NaiveDate>,
}

impl Milestone {
    /// Create a milestone with no due date
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            due_date: None,
        }
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

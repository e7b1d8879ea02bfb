use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The concrete kind of an issuable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssuableKind {
    Issue,
    MergeRequest,
}

impl IssuableKind {
    /// Human-readable label used in outcome messages
    pub fn label(&self) -> &'static str {
        match self {
            IssuableKind::Issue => "issue",
            IssuableKind::MergeRequest => "merge request",
        }
    }
}

/// Lifecycle state of an issuable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssuableState {
    Opened,
    Closed,
}

/// Issuable - the target entity quick actions execute against
///
/// Covers issues and merge requests through a single tagged representation;
/// the executor only reads and writes the fields below, so the two kinds
/// share all command semantics. Owned by a project; holds a weak reference
/// to at most one milestone in that project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issuable {
    /// Unique identifier (UUID v7)
    pub id: String,

    /// Issue or merge request
    pub kind: IssuableKind,

    /// The owning project
    pub project_id: String,

    /// Human-readable title
    pub title: String,

    /// Display text; command lines are never persisted here
    pub description: String,

    /// Current lifecycle state
    pub state: IssuableState,

    /// Weak reference to a milestone in the owning project, if any
    pub milestone_id: Option<String>,

    /// While locked, state transitions are frozen and capability-less actors
    /// cannot interact at all
    pub discussion_locked: bool,

    /// Timestamp when this issuable was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when this issuable was last updated
    pub updated_at: DateTime<Utc>,
}

impl Issuable {
    /// Create a new opened issuable with an empty description
    pub fn new(
        id: String,
        kind: IssuableKind,
        project_id: String,
        title: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            kind,
            project_id,
            title: title.into(),
            description: String::new(),
            state: IssuableState::Opened,
            milestone_id: None,
            discussion_locked: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this issuable is opened
    pub fn is_opened(&self) -> bool {
        self.state == IssuableState::Opened
    }

    /// Check if this issuable is closed
    pub fn is_closed(&self) -> bool {
        self.state == IssuableState::Closed
    }

    /// Check if a milestone is currently referenced
    pub fn has_milestone(&self) -> bool {
        self.milestone_id.is_some()
    }

    /// Replace the milestone reference, updating the modification timestamp
    pub fn set_milestone(&mut self, milestone_id: Option<String>) {
        self.milestone_id = milestone_id;
        self.updated_at = Utc::now();
    }

    /// Transition the lifecycle state, updating the modification timestamp
    pub fn set_state(&mut self, state: IssuableState) {
        self.state = state;
        self.updated_at = Utc::now();
    }
}

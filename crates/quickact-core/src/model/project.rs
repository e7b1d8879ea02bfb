use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::milestone::Milestone;

/// A project - the scope that owns milestones and issuables
///
/// The project is the authorization boundary: an actor's capability set is
/// resolved against exactly one project, and an issuable's milestone
/// reference must name a milestone in the owning project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Project {
    /// Unique project identifier
    pub id: String,

    /// Map of milestone ID to milestone
    milestones: HashMap<String, Milestone>,
}

impl Project {
    /// Create a new project with no milestones
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            milestones: HashMap::new(),
        }
    }

    /// Add a milestone to the project, returning its ID
    pub fn add_milestone(&mut self, milestone: Milestone) -> String {
        let id = milestone.id.clone();
        self.milestones.insert(id.clone(), milestone);
        id
    }

    /// Get a milestone by ID
    pub fn milestone(&self, id: &str) -> Option<&Milestone> {
        self.milestones.get(id)
    }

    /// Resolve a milestone reference from command text
    ///
    /// References match by title; the leading `%` sigil is optional, so both
    /// `%v1.0` and `v1.0` resolve the milestone titled `v1.0`. Quoted titles
    /// are not supported (references are single tokens).
    pub fn find_milestone_by_ref(&self, reference: &str) -> Option<&Milestone> {
        let title = reference.strip_prefix('%').unwrap_or(reference);
        self.milestones.values().find(|m| m.title == title)
    }

    /// List all milestones
    pub fn list_milestones(&self) -> Vec<&Milestone> {
        self.milestones.values().collect()
    }
}

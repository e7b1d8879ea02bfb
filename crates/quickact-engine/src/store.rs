//! In-memory store for projects and issuables
//!
//! This is the minimal persistence collaborator the engine demonstrates
//! transactional processing against. Storage access is encapsulated here so
//! a real backend can replace it without touching the engine.

use std::collections::HashMap;

use quickact_core::{Issuable, Project, QuickActionError, Result};

/// In-memory store for Projects and Issuables
///
/// Not internally synchronized; the engine serializes access through its own
/// exclusive lock.
#[derive(Debug, Clone, Default)]
pub struct IssuableStore {
    /// Map of project ID to project
    projects: HashMap<String, Project>,
    /// Map of issuable ID to issuable
    issuables: HashMap<String, Issuable>,
}

impl IssuableStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            projects: HashMap::new(),
            issuables: HashMap::new(),
        }
    }

    /// Insert a project into the store
    pub fn insert_project(&mut self, project: Project) {
        self.projects.insert(project.id.clone(), project);
    }

    /// Get a project by ID
    ///
    /// # Errors
    ///
    /// Returns `UnknownProject` if the project doesn't exist.
    pub fn get_project(&self, id: &str) -> Result<&Project> {
        self.projects
            .get(id)
            .ok_or_else(|| QuickActionError::UnknownProject {
                project_id: id.to_string(),
            })
    }

    /// Insert an issuable into the store
    ///
    /// Enforces the referential invariants: the owning project must exist,
    /// and a milestone reference must name a milestone in that project.
    ///
    /// # Errors
    ///
    /// Returns `UnknownProject` if the owning project doesn't exist, or
    /// `Internal` if the milestone reference dangles.
    pub fn insert_issuable(&mut self, issuable: Issuable) -> Result<()> {
        let project = self.get_project(&issuable.project_id)?;

        if let Some(ref milestone_id) = issuable.milestone_id {
            if project.milestone(milestone_id).is_none() {
                return Err(QuickActionError::Internal {
                    message: format!(
                        "issuable {} references milestone {} not in project {}",
                        issuable.id, milestone_id, issuable.project_id
                    ),
                });
            }
        }

        self.issuables.insert(issuable.id.clone(), issuable);
        Ok(())
    }

    /// Get an issuable by ID
    ///
    /// # Errors
    ///
    /// Returns `IssuableNotFound` if the issuable doesn't exist.
    pub fn get_issuable(&self, id: &str) -> Result<&Issuable> {
        self.issuables
            .get(id)
            .ok_or_else(|| QuickActionError::IssuableNotFound {
                issuable_id: id.to_string(),
            })
    }

    /// Replace a stored issuable with a mutated copy
    ///
    /// This is the commit write-back path; the issuable must already exist.
    ///
    /// # Errors
    ///
    /// Returns `IssuableNotFound` if the issuable was never stored.
    pub fn replace_issuable(&mut self, issuable: Issuable) -> Result<()> {
        if !self.issuables.contains_key(&issuable.id) {
            return Err(QuickActionError::IssuableNotFound {
                issuable_id: issuable.id,
            });
        }
        self.issuables.insert(issuable.id.clone(), issuable);
        Ok(())
    }

    /// List all issuables in a project
    pub fn list_issuables(&self, project_id: &str) -> Vec<&Issuable> {
        self.issuables
            .values()
            .filter(|i| i.project_id == project_id)
            .collect()
    }
}

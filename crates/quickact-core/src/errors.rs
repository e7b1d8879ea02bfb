use thiserror::Error;

/// Result type alias using QuickActionError
pub type Result<T> = std::result::Result<T, QuickActionError>;

/// Error taxonomy for quick-action processing
///
/// These are the call-level failures surfaced to the host application.
/// Per-command failures (unknown keyword, missing capability, state conflict)
/// are *not* errors: they are collected as [`crate::execute::Outcome`] values
/// and never abort sibling commands in the same text block.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuickActionError {
    /// A command keyword was registered twice
    #[error("Command already registered: /{keyword}")]
    DuplicateCommand { keyword: String },

    /// Project not found in the store
    #[error("Project not found: {project_id}")]
    UnknownProject { project_id: String },

    /// Issuable not found in the store
    #[error("Issuable not found: {issuable_id}")]
    IssuableNotFound { issuable_id: String },

    /// The supplied project is not the project owning the issuable
    #[error("Project mismatch: issuable belongs to {expected}, got {actual}")]
    ProjectMismatch { expected: String, actual: String },

    /// The actor is scoped to a different project than the target entity
    #[error("Actor {actor_id} is not authorized for issuables in project {project_id}")]
    ActorUnauthorizedForEntity {
        actor_id: String,
        project_id: String,
    },

    /// The entity cannot accept commands from this actor at all
    #[error("Issuable {issuable_id} cannot be mutated: {reason}")]
    EntityNotMutable { issuable_id: String, reason: String },

    /// The final commit step failed; all staged mutations were rolled back
    #[error("Persistence commit failed: {message}")]
    PersistenceCommitFailed { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl QuickActionError {
    /// Get the stable error code for this error
    ///
    /// Codes are part of the external contract: hosts may match on them for
    /// programmatic handling and they appear in structured log output.
    pub fn code(&self) -> &'static str {
        match self {
            QuickActionError::DuplicateCommand { .. } => "ERR_DUPLICATE_COMMAND",
            QuickActionError::UnknownProject { .. } => "ERR_UNKNOWN_PROJECT",
            QuickActionError::IssuableNotFound { .. } => "ERR_ISSUABLE_NOT_FOUND",
            QuickActionError::ProjectMismatch { .. } => "ERR_PROJECT_MISMATCH",
            QuickActionError::ActorUnauthorizedForEntity { .. } => "ERR_ACTOR_UNAUTHORIZED",
            QuickActionError::EntityNotMutable { .. } => "ERR_ENTITY_NOT_MUTABLE",
            QuickActionError::PersistenceCommitFailed { .. } => "ERR_PERSISTENCE_COMMIT_FAILED",
            QuickActionError::Internal { .. } => "ERR_INTERNAL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        let cases = [
            (
                QuickActionError::DuplicateCommand {
                    keyword: "close".to_string(),
                },
                "ERR_DUPLICATE_COMMAND",
            ),
            (
                QuickActionError::ActorUnauthorizedForEntity {
                    actor_id: "u1".to_string(),
                    project_id: "p1".to_string(),
                },
                "ERR_ACTOR_UNAUTHORIZED",
            ),
            (
                QuickActionError::PersistenceCommitFailed {
                    message: "disk full".to_string(),
                },
                "ERR_PERSISTENCE_COMMIT_FAILED",
            ),
        ];
        for (err, expected_code) in cases {
            assert_eq!(err.code(), expected_code, "Wrong code for {:?}", err);
        }
    }

    #[test]
    fn test_error_display_includes_context() {
        let err = QuickActionError::IssuableNotFound {
            issuable_id: "issue-9".to_string(),
        };
        assert_eq!(err.to_string(), "Issuable not found: issue-9");
    }
}

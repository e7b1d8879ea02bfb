//! Authorization gate for resolved commands
//!
//! Pure capability check: no session state, no hidden current-user lookup.
//! The actor is threaded through every call explicitly.

use crate::model::{Actor, Issuable};
use crate::registry::CommandDescriptor;

/// Decide whether an actor may execute a command against an issuable
///
/// Allowed when the actor's capability scope is the issuable's project and
/// the actor holds the descriptor's required capability. Deterministic and
/// side-effect-free.
pub fn authorize(actor: &Actor, issuable: &Issuable, descriptor: &CommandDescriptor) -> bool {
    actor.project_id == issuable.project_id && actor.can(descriptor.required_capability)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::IssuableKind;
    use crate::registry::CommandRegistry;

    fn issuable_in(project_id: &str) -> Issuable {
        Issuable::new(
            "issue-1".to_string(),
            IssuableKind::Issue,
            project_id.to_string(),
            "bug",
        )
    }

    #[test]
    fn test_maintainer_is_allowed() {
        let registry = CommandRegistry::with_defaults();
        let descriptor = registry.resolve("remove_milestone").unwrap();
        let actor = Actor::maintainer("user-1", "project-1");

        assert!(authorize(&actor, &issuable_in("project-1"), descriptor));
    }

    #[test]
    fn test_guest_is_denied() {
        let registry = CommandRegistry::with_defaults();
        let descriptor = registry.resolve("remove_milestone").unwrap();
        let actor = Actor::guest("user-2", "project-1");

        assert!(!authorize(&actor, &issuable_in("project-1"), descriptor));
    }

    #[test]
    fn test_cross_project_actor_is_denied() {
        let registry = CommandRegistry::with_defaults();
        let descriptor = registry.resolve("remove_milestone").unwrap();
        let actor = Actor::maintainer("user-1", "project-other");

        assert!(!authorize(&actor, &issuable_in("project-1"), descriptor));
    }
}

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A grantable permission on a project
///
/// Each registered command names the capability an actor must hold for the
/// command to execute against an issuable in the actor's project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Assign or remove the milestone on an issuable
    SetMilestone,
    /// Close or reopen an issuable
    UpdateState,
}

impl Capability {
    /// All capabilities, in a stable order
    pub fn all() -> &'static [Capability] {
        &[Capability::SetMilestone, Capability::UpdateState]
    }
}

/// An identity with a resolved capability set on one project
///
/// Actors are supplied by the host's identity/authorization collaborator with
/// the capability set already resolved; this crate never performs its own
/// membership lookup. An Actor is immutable for the duration of one
/// processing call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Opaque identifier supplied by the host
    pub id: String,

    /// The project this actor's capabilities are scoped to
    pub project_id: String,

    /// Resolved capability set
    capabilities: HashSet<Capability>,
}

impl Actor {
    /// Create an actor with an explicit capability set
    pub fn new(id: String, project_id: String, capabilities: HashSet<Capability>) -> Self {
        Self {
            id,
            project_id,
            capabilities,
        }
    }

    /// Create a maintainer-level actor (holds every capability)
    pub fn maintainer(id: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self::new(
            id.into(),
            project_id.into(),
            Capability::all().iter().copied().collect(),
        )
    }

    /// Create a guest-level actor (holds no capabilities)
    pub fn guest(id: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self::new(id.into(), project_id.into(), HashSet::new())
    }

    /// Check whether this actor holds the given capability
    pub fn can(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// Check whether this actor holds any capability at all
    pub fn has_any_capability(&self) -> bool {
        !self.capabilities.is_empty()
    }
}

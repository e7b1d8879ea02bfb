//! Command registry - descriptors for every recognized quick action
//!
//! The registry is populated once at startup (normally via
//! [`CommandRegistry::with_defaults`]) and is read-only afterwards. It is
//! passed by reference into extraction-consuming code rather than accessed as
//! ambient global state.

use serde::{Deserialize, Serialize};

use crate::errors::{QuickActionError, Result};
use crate::model::Capability;

/// Argument arity of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Arity {
    /// The command takes no arguments; extra tokens are ignored
    None,
    /// The command requires at least one argument
    Required,
}

/// The state mutation a command performs
///
/// Commands are data, not closures: the executor matches on the effect, which
/// keeps descriptors immutable, comparable and serializable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Clear the milestone reference
    RemoveMilestone,
    /// Resolve a milestone reference and assign it
    SetMilestone,
    /// Transition the issuable to closed
    Close,
    /// Transition the issuable to opened
    Reopen,
}

/// Immutable definition of one registered command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDescriptor {
    /// Keyword as it appears after the slash, e.g. `remove_milestone`
    pub keyword: String,

    /// Capability an actor must hold for this command to execute
    pub required_capability: Capability,

    /// Argument arity
    pub arity: Arity,

    /// State mutation performed on execution
    pub effect: Effect,

    /// One-line description for host-side help and autocomplete
    pub description: String,
}

impl CommandDescriptor {
    /// Create a descriptor
    pub fn new(
        keyword: impl Into<String>,
        required_capability: Capability,
        arity: Arity,
        effect: Effect,
        description: impl Into<String>,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            required_capability,
            arity,
            effect,
            description: description.into(),
        }
    }
}

/// Registry mapping command keywords to descriptors
///
/// Registration order is preserved for listing; resolution is by exact
/// keyword match.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: Vec<CommandDescriptor>,
}

impl CommandRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Create a registry pre-populated with the built-in commands
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_defaults();
        registry
    }

    /// Register a command descriptor
    ///
    /// # Errors
    ///
    /// Returns `DuplicateCommand` if the keyword is already registered.
    pub fn register(&mut self, descriptor: CommandDescriptor) -> Result<()> {
        if self.commands.iter().any(|c| c.keyword == descriptor.keyword) {
            return Err(QuickActionError::DuplicateCommand {
                keyword: descriptor.keyword,
            });
        }
        self.commands.push(descriptor);
        Ok(())
    }

    /// Resolve a keyword to its descriptor
    pub fn resolve(&self, keyword: &str) -> Option<&CommandDescriptor> {
        self.commands.iter().find(|c| c.keyword == keyword)
    }

    /// List all registered descriptors in registration order
    pub fn list(&self) -> &[CommandDescriptor] {
        &self.commands
    }

    /// Register all built-in commands
    ///
    /// The built-in set is fixed and registered keywords are unique, so the
    /// individual `register` calls cannot fail.
    fn register_defaults(&mut self) {
        let defaults = [
            CommandDescriptor::new(
                "remove_milestone",
                Capability::SetMilestone,
                Arity::None,
                Effect::RemoveMilestone,
                "Remove the milestone",
            ),
            CommandDescriptor::new(
                "milestone",
                Capability::SetMilestone,
                Arity::Required,
                Effect::SetMilestone,
                "Set the milestone",
            ),
            CommandDescriptor::new(
                "close",
                Capability::UpdateState,
                Arity::None,
                Effect::Close,
                "Close this issuable",
            ),
            CommandDescriptor::new(
                "reopen",
                Capability::UpdateState,
                Arity::None,
                Effect::Reopen,
                "Reopen this issuable",
            ),
        ];
        for descriptor in defaults {
            // Unique keywords above; unreachable in practice
            if let Err(err) = self.register(descriptor) {
                unreachable!("built-in command registered twice: {err}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_defaults_registers_builtins() {
        let registry = CommandRegistry::with_defaults();

        assert!(registry.resolve("remove_milestone").is_some());
        assert!(registry.resolve("milestone").is_some());
        assert!(registry.resolve("close").is_some());
        assert!(registry.resolve("reopen").is_some());
        assert!(registry.resolve("shrug").is_none());
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut registry = CommandRegistry::with_defaults();
        let result = registry.register(CommandDescriptor::new(
            "close",
            Capability::UpdateState,
            Arity::None,
            Effect::Close,
            "Close again",
        ));

        assert!(matches!(
            result,
            Err(QuickActionError::DuplicateCommand { keyword }) if keyword == "close"
        ));
    }

    #[test]
    fn test_resolve_is_exact_match() {
        let registry = CommandRegistry::with_defaults();

        assert!(registry.resolve("Remove_Milestone").is_none());
        assert!(registry.resolve("remove_milestone ").is_none());
    }

    #[test]
    fn test_descriptor_capability_and_arity() {
        let registry = CommandRegistry::with_defaults();
        let descriptor = registry.resolve("milestone").unwrap();

        assert_eq!(descriptor.required_capability, Capability::SetMilestone);
        assert_eq!(descriptor.arity, Arity::Required);
        assert_eq!(descriptor.effect, Effect::SetMilestone);
    }

    #[test]
    fn test_list_preserves_registration_order() {
        let registry = CommandRegistry::with_defaults();
        let keywords: Vec<&str> = registry.list().iter().map(|c| c.keyword.as_str()).collect();

        assert_eq!(
            keywords,
            vec!["remove_milestone", "milestone", "close", "reopen"]
        );
    }
}

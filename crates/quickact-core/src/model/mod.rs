pub mod actor;
pub mod issuable;
pub mod milestone;
pub mod project;

pub use actor::{Actor, Capability};
pub use issuable::{Issuable, IssuableKind, IssuableState};
pub use milestone::Milestone;
pub use project::Project;

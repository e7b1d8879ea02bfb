use quickact_core::{Actor, Issuable, IssuableKind, Milestone, Project};
use quickact_engine::{IssuableStore, QuickActionEngine};
use uuid::Uuid;

pub const PROJECT_ID: &str = "project-1";

/// Build a store holding one project with one milestone
///
/// Returns the store and the milestone ID.
#[allow(dead_code)]
pub fn store_with_milestone(title: &str) -> (IssuableStore, String) {
    let mut project = Project::new(PROJECT_ID);
    let milestone_id = project.add_milestone(Milestone::new(Uuid::now_v7().to_string(), title));

    let mut store = IssuableStore::new();
    store.insert_project(project);
    (store, milestone_id)
}

/// Insert an issue carrying the given milestone, returning its ID
#[allow(dead_code)]
pub fn seed_issue_with_milestone(store: &mut IssuableStore, milestone_id: &str) -> String {
    let mut issuable = Issuable::new(
        Uuid::now_v7().to_string(),
        IssuableKind::Issue,
        PROJECT_ID.to_string(),
        "bug 345",
    );
    issuable.milestone_id = Some(milestone_id.to_string());

    let id = issuable.id.clone();
    store.insert_issuable(issuable).unwrap();
    id
}

/// Build an engine over a store seeded with one milestoned issue
///
/// Returns the engine, the issue ID and the milestone ID.
#[allow(dead_code)]
pub fn engine_with_milestoned_issue(milestone_title: &str) -> (QuickActionEngine, String, String) {
    let (mut store, milestone_id) = store_with_milestone(milestone_title);
    let issue_id = seed_issue_with_milestone(&mut store, &milestone_id);
    (QuickActionEngine::new(store), issue_id, milestone_id)
}

/// A maintainer-level actor on the fixture project
#[allow(dead_code)]
pub fn maintainer() -> Actor {
    Actor::maintainer("maintainer-1", PROJECT_ID)
}

/// A guest-level actor on the fixture project
#[allow(dead_code)]
pub fn guest() -> Actor {
    Actor::guest("guest-1", PROJECT_ID)
}

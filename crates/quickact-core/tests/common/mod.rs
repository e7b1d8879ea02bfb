use quickact_core::{Actor, Issuable, IssuableKind, Milestone, Project};
use uuid::Uuid;

/// Create a test project carrying one milestone with the given title
///
/// Returns the project and the milestone ID.
#[allow(dead_code)]
pub fn project_with_milestone(title: &str) -> (Project, String) {
    let mut project = Project::new("project-1");
    let milestone_id = project.add_milestone(Milestone::new(Uuid::now_v7().to_string(), title));
    (project, milestone_id)
}

/// Create a test issue in the given project
#[allow(dead_code)]
pub fn create_test_issue(project_id: &str, title: &str) -> Issuable {
    Issuable::new(
        Uuid::now_v7().to_string(),
        IssuableKind::Issue,
        project_id.to_string(),
        title,
    )
}

/// Create a test merge request in the given project
#[allow(dead_code)]
pub fn create_test_merge_request(project_id: &str, title: &str) -> Issuable {
    Issuable::new(
        Uuid::now_v7().to_string(),
        IssuableKind::MergeRequest,
        project_id.to_string(),
        title,
    )
}

/// A maintainer-level actor on project-1
#[allow(dead_code)]
pub fn maintainer() -> Actor {
    Actor::maintainer("maintainer-1", "project-1")
}

/// A guest-level actor on project-1 (no capabilities)
#[allow(dead_code)]
pub fn guest() -> Actor {
    Actor::guest("guest-1", "project-1")
}

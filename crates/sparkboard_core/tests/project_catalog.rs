use sparkboard_core::{Priority, ProjectCatalog, ProjectDraft, ProjectId, ProjectStatus, RepoError};

#[test]
fn add_assigns_next_id_after_max() {
    let mut catalog = ProjectCatalog::seeded();
    let project = catalog.add(ProjectDraft::new("Customer Portal")).unwrap();

    assert_eq!(project.id, ProjectId(5));
    assert_eq!(catalog.len(), 5);
    assert_eq!(catalog.list().last(), Some(&project));
}

#[test]
fn add_to_empty_catalog_starts_at_one() {
    let mut catalog = ProjectCatalog::new();
    let project = catalog.add(ProjectDraft::new("First")).unwrap();
    assert_eq!(project.id, ProjectId(1));
}

#[test]
fn ids_are_not_reused_after_middle_delete() {
    let mut catalog = ProjectCatalog::seeded();
    catalog.delete(ProjectId(2)).unwrap();
    let project = catalog.add(ProjectDraft::new("Replacement")).unwrap();
    assert_eq!(project.id, ProjectId(5));
}

#[test]
fn add_rejects_invalid_form_with_all_field_errors() {
    let mut catalog = ProjectCatalog::new();
    let draft = ProjectDraft {
        title: " ".to_string(),
        team_members: 0,
        progress: 120,
        ..ProjectDraft::default()
    };

    let err = catalog.add(draft).unwrap_err();
    let RepoError::Validation(errors) = err else {
        panic!("expected validation error");
    };
    assert_eq!(errors.get("title"), Some("Project title is required"));
    assert_eq!(errors.get("teamMembers"), Some("Team members must be at least 1"));
    assert_eq!(errors.get("progress"), Some("Progress must be between 0 and 100"));
    assert!(catalog.is_empty());
}

#[test]
fn edit_replaces_in_place() {
    let mut catalog = ProjectCatalog::seeded();
    let mut draft = catalog.get(ProjectId(2)).unwrap().to_draft();
    draft.status = ProjectStatus::Completed;
    draft.progress = 100;
    draft.priority = Priority::Low;

    let edited = catalog.edit(ProjectId(2), draft).unwrap();

    assert_eq!(catalog.list()[1], edited);
    assert_eq!(edited.id, ProjectId(2));
    assert!(!edited.is_active());
}

#[test]
fn edit_and_delete_missing_project_fail() {
    let mut catalog = ProjectCatalog::seeded();
    assert_eq!(
        catalog.edit(ProjectId(99), ProjectDraft::new("x")).unwrap_err(),
        RepoError::ProjectNotFound(ProjectId(99))
    );
    assert_eq!(
        catalog.delete(ProjectId(99)).unwrap_err(),
        RepoError::ProjectNotFound(ProjectId(99))
    );
    assert_eq!(catalog.len(), 4);
}

#[test]
fn filter_matches_title_or_description_ignoring_case() {
    let catalog = ProjectCatalog::seeded();

    let by_title: Vec<_> = catalog.filter("MOBILE").iter().map(|p| p.id).collect();
    assert_eq!(by_title, vec![ProjectId(2)]);

    let by_description: Vec<_> = catalog
        .filter("business intelligence")
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(by_description, vec![ProjectId(4)]);

    assert_eq!(catalog.filter("  ").len(), 4);
    assert!(catalog.filter("kubernetes").is_empty());
}

#[test]
fn project_status_serializes_with_display_names() {
    let catalog = ProjectCatalog::seeded();
    let json = serde_json::to_value(&catalog.list()[0]).unwrap();
    assert_eq!(json["status"], "In Progress");
    assert_eq!(json["status"], catalog.list()[0].status.label());
    assert_eq!(json["teamMembers"], 5);
    assert_eq!(json["id"], 1);
}

use sparkboard_core::{
    search_all, seed_task_id, Dashboard, DashboardStats, DeletePrompt, ProjectDraft, ProjectId,
    SearchCategory, SearchQuery, SearchTarget,
};

#[test]
fn blank_query_returns_nothing() {
    let dashboard = Dashboard::seeded();
    assert!(search_all(&dashboard, &SearchQuery::new("   ")).is_empty());
}

#[test]
fn hits_are_grouped_by_category() {
    let dashboard = Dashboard::seeded();
    let hits = search_all(&dashboard, &SearchQuery::new("mobile"));

    let targets: Vec<_> = hits.iter().map(|hit| hit.target).collect();
    assert_eq!(
        targets,
        vec![
            SearchTarget::Project(ProjectId(2)),
            SearchTarget::Task(seed_task_id(3)),
        ]
    );
}

#[test]
fn member_hits_search_role_and_email() {
    let dashboard = Dashboard::seeded();
    let hits = search_all(&dashboard, &SearchQuery::new("PROJECT MANAGER"));

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].category(), SearchCategory::Team);
    assert_eq!(hits[0].title, "Sarah Johnson");
    assert_eq!(hits[0].description, "Project Manager - sarah@mindsparks.com");
}

#[test]
fn category_filter_and_limit_apply() {
    let dashboard = Dashboard::seeded();

    let events = search_all(
        &dashboard,
        &SearchQuery::new("2024-01-28").in_category(SearchCategory::Calendar),
    );
    assert_eq!(events.len(), 2);
    assert!(events
        .iter()
        .all(|hit| hit.category() == SearchCategory::Calendar));

    let limited = search_all(&dashboard, &SearchQuery::new("e").with_limit(3));
    assert_eq!(limited.len(), 3);
    assert!(search_all(&dashboard, &SearchQuery::new("e").with_limit(0)).is_empty());
}

#[test]
fn search_sees_live_board_state() {
    let mut dashboard = Dashboard::seeded();
    let mut confirm = |_: &DeletePrompt| true;
    dashboard
        .board_mut()
        .request_delete(seed_task_id(3), &mut confirm)
        .unwrap();

    let hits = search_all(
        &dashboard,
        &SearchQuery::new("mobile").in_category(SearchCategory::Tasks),
    );
    assert!(hits.is_empty());
}

#[test]
fn stats_follow_live_state() {
    let mut dashboard = Dashboard::seeded();
    assert_eq!(
        dashboard.stats(),
        DashboardStats {
            active_projects: 3,
            team_members: 4,
            completed_tasks: 1,
            in_progress_tasks: 1,
        }
    );

    dashboard
        .projects_mut()
        .add(ProjectDraft::new("Onboarding Revamp"))
        .unwrap();
    assert_eq!(dashboard.stats().active_projects, 4);
}

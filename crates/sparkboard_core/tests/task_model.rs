use sparkboard_core::{Priority, Task, TaskDraft, TaskStatus};
use uuid::Uuid;

#[test]
fn draft_defaults_match_create_form() {
    let draft = TaskDraft::default();
    assert!(draft.title.is_empty());
    assert_eq!(draft.priority, Priority::Medium);
    assert_eq!(draft.status, TaskStatus::Todo);
}

#[test]
fn task_serialization_uses_board_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let task = Task::from_draft(
        id,
        TaskDraft {
            title: "Setup Analytics".to_string(),
            description: "Conversion tracking".to_string(),
            assignee: "Mike Johnson".to_string(),
            priority: Priority::High,
            due_date: "2024-01-18".to_string(),
            status: TaskStatus::InProgress,
        },
    );

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["dueDate"], "2024-01-18");
    assert_eq!(json["status"], "inProgress");
    assert_eq!(json["priority"], "High");

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn status_keys_and_labels() {
    assert_eq!(
        TaskStatus::ALL.map(TaskStatus::as_str),
        ["todo", "inProgress", "done"]
    );
    assert_eq!(TaskStatus::InProgress.label(), "In Progress");
    assert_eq!(Priority::High.as_str(), "High");
    assert_eq!(Priority::default().as_str(), "Medium");
}

#[test]
fn draft_validation_reports_every_blank_required_field() {
    let draft = TaskDraft {
        title: "  ".to_string(),
        assignee: "Emma Davis".to_string(),
        ..TaskDraft::default()
    };

    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.get("title"), Some("Task title is required"));
    assert!(errors.get("description").is_some());
    assert!(errors.get("dueDate").is_some());
    assert!(errors.get("assignee").is_none());
}

#[test]
fn to_draft_prefills_edit_form() {
    let task = Task::from_draft(
        Uuid::new_v4(),
        TaskDraft::new("Brand Guidelines", TaskStatus::Done),
    );
    let draft = task.to_draft();
    assert_eq!(draft.title, "Brand Guidelines");
    assert_eq!(draft.status, TaskStatus::Done);
}

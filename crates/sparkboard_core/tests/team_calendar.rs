use sparkboard_core::model::member::DEFAULT_AVATAR_URL;
use sparkboard_core::{
    Calendar, EventDraft, EventId, EventKind, MemberDraft, MemberId, MemberStatus, RepoError,
    TeamRoster,
};

fn member_draft(name: &str) -> MemberDraft {
    MemberDraft {
        name: name.to_string(),
        role: "QA Engineer".to_string(),
        email: "lee@mindsparks.com".to_string(),
        phone: "+1 (555) 567-8901".to_string(),
        ..MemberDraft::default()
    }
}

#[test]
fn add_member_uses_form_defaults() {
    let mut roster = TeamRoster::seeded();
    let member = roster.add(member_draft("Jordan Lee")).unwrap();

    assert_eq!(member.id, MemberId(5));
    assert_eq!(member.status, MemberStatus::Active);
    assert_eq!(member.projects, 0);
    assert_eq!(member.avatar, DEFAULT_AVATAR_URL);
}

#[test]
fn add_member_requires_contact_fields() {
    let mut roster = TeamRoster::new();
    let err = roster
        .add(MemberDraft {
            name: "Jordan Lee".to_string(),
            ..MemberDraft::default()
        })
        .unwrap_err();

    let RepoError::Validation(errors) = err else {
        panic!("expected validation error");
    };
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["email", "phone"]);
}

#[test]
fn add_member_trims_text_fields() {
    let mut roster = TeamRoster::new();
    let member = roster
        .add(MemberDraft {
            name: "  Jordan Lee ".to_string(),
            role: " QA Engineer ".to_string(),
            email: " lee@mindsparks.com".to_string(),
            phone: "+1 (555) 567-8901  ".to_string(),
            ..MemberDraft::default()
        })
        .unwrap();

    assert_eq!(member.name, "Jordan Lee");
    assert_eq!(member.role, "QA Engineer");
    assert_eq!(member.email, "lee@mindsparks.com");
    assert_eq!(member.phone, "+1 (555) 567-8901");
}

#[test]
fn edit_and_remove_member() {
    let mut roster = TeamRoster::seeded();
    let mut draft = roster.get(MemberId(4)).unwrap().to_draft();
    draft.status = MemberStatus::Offline;
    let edited = roster.edit(MemberId(4), draft).unwrap();
    assert_eq!(edited.status, MemberStatus::Offline);
    assert_eq!(roster.list()[3], edited);

    roster.remove(MemberId(1)).unwrap();
    assert_eq!(roster.len(), 3);
    assert_eq!(
        roster.remove(MemberId(1)).unwrap_err(),
        RepoError::MemberNotFound(MemberId(1))
    );
}

#[test]
fn events_on_returns_exact_date_matches_in_order() {
    let calendar = Calendar::seeded();
    let titles: Vec<_> = calendar
        .events_on("2024-01-28")
        .iter()
        .map(|event| event.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Team Standup", "Project Review"]);
    assert!(calendar.events_on("2024-02-01").is_empty());
}

#[test]
fn add_event_validates_and_assigns_id() {
    let mut calendar = Calendar::seeded();
    let event = calendar
        .add(EventDraft {
            title: "Sprint Retro".to_string(),
            time: "04:00 PM".to_string(),
            date: "2024-01-30".to_string(),
            kind: EventKind::Meeting,
        })
        .unwrap();
    assert_eq!(event.id, EventId(5));
    assert_eq!(calendar.events_on("2024-01-30").len(), 2);

    let err = calendar
        .add(EventDraft {
            title: String::new(),
            time: String::new(),
            date: String::new(),
            kind: EventKind::Review,
        })
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(ref errors) if errors.len() == 2));
    assert_eq!(calendar.list().len(), 5);
}

#[test]
fn remove_event_reports_missing_id() {
    let mut calendar = Calendar::seeded();
    let removed = calendar.remove(EventId(2)).unwrap();
    assert_eq!(removed.title, "Project Review");
    assert_eq!(calendar.events_on("2024-01-28").len(), 1);

    assert_eq!(
        calendar.remove(EventId(2)).unwrap_err(),
        RepoError::EventNotFound(EventId(2))
    );
    assert_eq!(calendar.list().len(), 3);
}

#[test]
fn event_kind_serializes_as_type() {
    let calendar = Calendar::seeded();
    let json = serde_json::to_value(&calendar.list()[2]).unwrap();
    assert_eq!(json["type"], "presentation");
}

use projectboard_core::{
    Project, ProjectDraft, ProjectStatus, ProjectValidationError, DESCRIPTION_MIN_CHARS,
    PEOPLE_MAX, PEOPLE_MIN,
};
use serde_json::json;

#[test]
fn draft_validate_accepts_the_form_contract() {
    let draft = ProjectDraft::new("Build API", "Design and ship v1", 3);
    assert!(draft.validate().is_ok());

    let min_people = ProjectDraft::new("A", "12345", PEOPLE_MIN);
    assert!(min_people.validate().is_ok());

    let max_people = ProjectDraft::new("B", "12345", PEOPLE_MAX);
    assert!(max_people.validate().is_ok());
}

#[test]
fn draft_validate_rejects_blank_title() {
    let draft = ProjectDraft::new("   ", "long enough", 2);
    let err = draft.validate().expect_err("blank title must be rejected");
    assert_eq!(err, ProjectValidationError::EmptyTitle);
}

#[test]
fn draft_validate_rejects_short_description() {
    let draft = ProjectDraft::new("Title", "1234", 2);
    let err = draft
        .validate()
        .expect_err("four-character description must be rejected");
    assert_eq!(
        err,
        ProjectValidationError::DescriptionTooShort {
            min: DESCRIPTION_MIN_CHARS,
            actual: 4,
        }
    );

    let boundary = ProjectDraft::new("Title", "12345", 2);
    assert!(boundary.validate().is_ok());
}

#[test]
fn draft_validate_rejects_people_out_of_range() {
    let zero = ProjectDraft::new("Title", "long enough", 0);
    assert_eq!(
        zero.validate().expect_err("zero people must be rejected"),
        ProjectValidationError::PeopleOutOfRange {
            min: PEOPLE_MIN,
            max: PEOPLE_MAX,
            actual: 0,
        }
    );

    let over = ProjectDraft::new("Title", "long enough", PEOPLE_MAX + 1);
    assert!(matches!(
        over.validate().expect_err("six people must be rejected"),
        ProjectValidationError::PeopleOutOfRange { actual: 6, .. }
    ));
}

#[test]
fn validation_errors_render_readable_messages() {
    assert_eq!(
        ProjectValidationError::EmptyTitle.to_string(),
        "title must not be empty"
    );
    assert_eq!(
        ProjectValidationError::DescriptionTooShort { min: 5, actual: 2 }.to_string(),
        "description must be at least 5 characters, got 2"
    );
    assert_eq!(
        ProjectValidationError::PeopleOutOfRange {
            min: 1,
            max: 5,
            actual: 9,
        }
        .to_string(),
        "people must be between 1 and 5, got 9"
    );
}

#[test]
fn project_serialization_uses_expected_wire_fields() {
    let value = json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "Build API",
        "description": "Design and ship v1",
        "people": 3,
        "status": "active"
    });

    let project: Project =
        serde_json::from_value(value.clone()).expect("wire shape should deserialize");
    assert_eq!(project.id.to_string(), "11111111-2222-4333-8444-555555555555");
    assert_eq!(project.title, "Build API");
    assert_eq!(project.description, "Design and ship v1");
    assert_eq!(project.people, 3);
    assert_eq!(project.status, ProjectStatus::Active);
    assert!(project.is_active());

    let encoded = serde_json::to_value(&project).expect("project should serialize");
    assert_eq!(encoded, value);
}

#[test]
fn status_serializes_as_snake_case() {
    assert_eq!(
        serde_json::to_value(ProjectStatus::Active).expect("active should serialize"),
        "active"
    );
    assert_eq!(
        serde_json::to_value(ProjectStatus::Finished).expect("finished should serialize"),
        "finished"
    );
    assert_eq!(ProjectStatus::Active.as_str(), "active");
    assert_eq!(ProjectStatus::Finished.as_str(), "finished");
}

#[test]
fn people_label_is_singular_aware() {
    let single: Project = serde_json::from_value(json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "Solo",
        "description": "One-person effort",
        "people": 1,
        "status": "active"
    }))
    .expect("single-person project should deserialize");
    assert_eq!(single.people_label(), "1 person");

    let team: Project = serde_json::from_value(json!({
        "id": "11111111-2222-4333-8444-555555555556",
        "title": "Team",
        "description": "Four-person effort",
        "people": 4,
        "status": "finished"
    }))
    .expect("team project should deserialize");
    assert_eq!(team.people_label(), "4 people");
}

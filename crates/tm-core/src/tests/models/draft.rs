use crate::{Draft, DraftField, Status};

use std::str::FromStr;

#[test]
fn test_default_draft_is_empty_template() {
    let draft = Draft::default();
    assert_eq!(draft.title, "");
    assert_eq!(draft.description, "");
    assert_eq!(draft.status(), Status::Pending);
    assert_eq!(draft.color(), "#4a4a4a");
    assert!(draft.started_at.is_none());
    assert!(draft.ended_at.is_none());
}

#[test]
fn test_set_fields_and_clear_dates() {
    let mut draft = Draft::default();
    draft.set(DraftField::Title, "Buy milk");
    draft.set(DraftField::StartedAt, "2024-05-01");
    assert_eq!(draft.title, "Buy milk");
    assert_eq!(draft.started_at.as_deref(), Some("2024-05-01"));

    draft.set(DraftField::StartedAt, "");
    assert!(draft.started_at.is_none());
}

#[test]
fn test_submittable_requires_title_and_description() {
    let mut draft = Draft::default();
    assert!(!draft.is_submittable());

    draft.set(DraftField::Title, "Buy milk");
    assert!(!draft.is_submittable());

    draft.set(DraftField::Description, "2%");
    assert!(draft.is_submittable());

    draft.set(DraftField::Title, "");
    assert!(!draft.is_submittable());
}

#[test]
fn test_to_new_task_uses_lane_status_and_drops_orphan_end_date() {
    let mut draft = Draft::default();
    draft.set(DraftField::Title, "t");
    draft.set(DraftField::Description, "d");
    draft.set(DraftField::EndedAt, "2024-05-09");

    let task = draft.to_new_task(Status::Done);
    assert_eq!(task.status, Status::Done);
    assert_eq!(task.color(), "#162e1e");
    assert!(task.ended_at.is_none());

    draft.set(DraftField::StartedAt, "2024-05-01");
    let task = draft.to_new_task(Status::Done);
    assert_eq!(task.ended_at.as_deref(), Some("2024-05-09"));
}

#[test]
fn test_new_task_body_shape() {
    let mut draft = Draft::default();
    draft.set(DraftField::Title, "t");
    draft.set(DraftField::Description, "d");
    draft.set(DraftField::StartedAt, "2024-05-01");

    let body = serde_json::to_value(draft.to_new_task(Status::Progress)).unwrap();
    assert_eq!(body["id"], 0);
    assert_eq!(body["status"], "progress");
    assert_eq!(body["color"], "#1c3645");
    assert_eq!(body["date_start"], "2024-05-01");
    assert!(body["date_end"].is_null());
}

#[test]
fn test_draft_field_from_str() {
    assert_eq!(DraftField::from_str("startedAt").unwrap(), DraftField::StartedAt);
    assert_eq!(DraftField::from_str("ended_at").unwrap(), DraftField::EndedAt);
    assert!(DraftField::from_str("status").is_err());
    assert!(DraftField::from_str("id").is_err());
}

#[test]
fn test_serialized_empty_draft_is_full_template() {
    let value = serde_json::to_value(Draft::default()).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "id": 0,
            "title": "",
            "description": "",
            "status": "pending",
            "color": "#4a4a4a",
            "startedAt": null,
            "endedAt": null
        })
    );
}

#[test]
fn test_serialized_draft_keeps_entered_values() {
    let mut draft = Draft::default();
    draft.set(DraftField::Title, "Buy milk");
    draft.set(DraftField::StartedAt, "2024-05-01");

    let value = serde_json::to_value(&draft).unwrap();

    assert_eq!(value["title"], "Buy milk");
    assert_eq!(value["startedAt"], "2024-05-01");
    assert_eq!(value["id"], 0);
}

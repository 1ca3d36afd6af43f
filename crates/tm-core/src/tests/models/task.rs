use crate::{Status, Task};

use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::json;

#[test]
fn test_task_deserializes_camel_case_payload() {
    let task: Task = serde_json::from_value(json!({
        "id": 7,
        "title": "Buy milk",
        "description": "2%",
        "status": "progress",
        "color": "#ffffff",
        "startedAt": "2024-03-01",
        "endedAt": "2024-03-05",
        "updatedAt": "2024-03-02T10:00:00.000000Z"
    }))
    .unwrap();

    assert_eq!(task.id, 7);
    assert_eq!(task.status, Status::Progress);
    assert_eq!(task.color(), "#1c3645");
    assert_eq!(task.started_at, NaiveDate::from_ymd_opt(2024, 3, 1));
    assert_eq!(task.ended_at, NaiveDate::from_ymd_opt(2024, 3, 5));
    assert_eq!(
        task.updated_at,
        Some(Utc.with_ymd_and_hms(2024, 3, 2, 10, 0, 0).unwrap())
    );
}

#[test]
fn test_task_accepts_snake_case_aliases_and_missing_fields() {
    let task: Task = serde_json::from_value(json!({
        "id": 1,
        "title": "t",
        "description": "d",
        "status": "pending",
        "updated_at": "2024-01-01 08:30:00",
        "started_at": null
    }))
    .unwrap();

    assert_eq!(
        task.updated_at,
        Some(Utc.with_ymd_and_hms(2024, 1, 1, 8, 30, 0).unwrap())
    );
    assert!(task.started_at.is_none());
    assert!(task.ended_at.is_none());
}

#[test]
fn test_unparseable_timestamp_becomes_none() {
    let task: Task = serde_json::from_value(json!({
        "id": 1,
        "status": "done",
        "updatedAt": "yesterday"
    }))
    .unwrap();

    assert!(task.updated_at.is_none());
}

#[test]
fn test_serialized_task_carries_derived_color() {
    let mut task = Task::new(3, "t", "d", Status::Pending);
    task.status = Status::Archived;

    let value = serde_json::to_value(&task).unwrap();
    assert_eq!(value["color"], "#453e1c");
    assert_eq!(value["status"], "archived");
}

#[test]
fn test_date_range_label() {
    let mut task = Task::new(1, "t", "d", Status::Pending);
    assert_eq!(task.date_range_label(), None);

    task.ended_at = NaiveDate::from_ymd_opt(2024, 2, 10);
    assert_eq!(task.date_range_label(), None);

    task.started_at = NaiveDate::from_ymd_opt(2024, 2, 1);
    assert_eq!(
        task.date_range_label().as_deref(),
        Some("February 01, 2024 -> February 10, 2024")
    );

    task.ended_at = None;
    assert_eq!(task.date_range_label().as_deref(), Some("February 01, 2024"));
}

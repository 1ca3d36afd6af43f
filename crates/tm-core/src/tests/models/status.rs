use crate::Status;

use std::str::FromStr;

#[test]
fn test_status_as_str() {
    assert_eq!(Status::Pending.as_str(), "pending");
    assert_eq!(Status::Progress.as_str(), "progress");
    assert_eq!(Status::Done.as_str(), "done");
    assert_eq!(Status::Archived.as_str(), "archived");
}

#[test]
fn test_status_from_str() {
    assert_eq!(Status::from_str("pending").unwrap(), Status::Pending);
    assert_eq!(Status::from_str("archived").unwrap(), Status::Archived);
    assert!(Status::from_str("delete").is_err());
    assert!(Status::from_str("Pending").is_err());
}

#[test]
fn test_status_colors() {
    assert_eq!(Status::Pending.color(), "#4a4a4a");
    assert_eq!(Status::Progress.color(), "#1c3645");
    assert_eq!(Status::Done.color(), "#162e1e");
    assert_eq!(Status::Archived.color(), "#453e1c");
}

#[test]
fn test_status_default_is_pending() {
    assert_eq!(Status::default(), Status::Pending);
}

#[test]
fn test_status_serde_uses_wire_names() {
    let json = serde_json::to_string(&Status::Progress).unwrap();
    assert_eq!(json, "\"progress\"");

    let parsed: Status = serde_json::from_str("\"done\"").unwrap();
    assert_eq!(parsed, Status::Done);
    assert!(serde_json::from_str::<Status>("\"delete\"").is_err());
}

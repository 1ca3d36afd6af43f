use crate::{Status, StatusCommand};

use std::str::FromStr;

#[test]
fn test_delete_parses_as_command() {
    assert_eq!(StatusCommand::from_str("delete").unwrap(), StatusCommand::Delete);
    assert!(StatusCommand::Delete.is_delete());
}

#[test]
fn test_status_strings_parse_as_change() {
    assert_eq!(
        StatusCommand::from_str("progress").unwrap(),
        StatusCommand::Change(Status::Progress)
    );
    assert!(StatusCommand::from_str("removed").is_err());
}

#[test]
fn test_menu_order_and_labels() {
    let labels: Vec<&str> = StatusCommand::menu().iter().map(|c| c.label()).collect();
    assert_eq!(
        labels,
        vec!["Not started", "In progress", "Done", "Archived", "Delete"]
    );
}

#[test]
fn test_command_round_trips_through_display() {
    for command in StatusCommand::menu() {
        let parsed = StatusCommand::from_str(&command.to_string()).unwrap();
        assert_eq!(parsed, command);
    }
}

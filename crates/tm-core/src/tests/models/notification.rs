use crate::{CloseReason, Notification, Severity};

use std::str::FromStr;

#[test]
fn test_default_notification_is_closed() {
    let notification = Notification::default();
    assert!(!notification.open);
    assert_eq!(notification.severity, Severity::Success);
    assert!(notification.message.is_empty());
}

#[test]
fn test_click_away_does_not_close() {
    let mut notification = Notification::error("Task successfully deleted.");
    assert!(!notification.close(CloseReason::ClickAway));
    assert!(notification.open);

    assert!(notification.close(CloseReason::Timeout));
    assert!(!notification.open);
    assert_eq!(notification.message, "Task successfully deleted.");
}

#[test]
fn test_severity_from_str() {
    assert_eq!(Severity::from_str("error").unwrap(), Severity::Error);
    assert_eq!(Severity::from_str("Warning").unwrap(), Severity::Warning);
    assert!(Severity::from_str("fatal").is_err());
}

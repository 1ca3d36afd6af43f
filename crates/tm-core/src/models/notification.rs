use crate::{CloseReason, Severity};

use serde::Serialize;

/// Toast state exposed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Notification {
    pub open: bool,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    /// An open notification
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            open: true,
            message: message.into(),
            severity,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Close the toast unless the reason is a click-away. Returns whether it closed.
    pub fn close(&mut self, reason: CloseReason) -> bool {
        if reason == CloseReason::ClickAway {
            return false;
        }

        self.open = false;
        true
    }
}

use crate::{CoreError, CoreResult, Status};

use std::str::FromStr;

/// A transition requested from a card's status menu.
///
/// Deleting is a command, never a state: a stored [`crate::Task`] cannot carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCommand {
    Change(Status),
    Delete,
}

impl StatusCommand {
    pub const DELETE_STR: &'static str = "delete";

    /// Entries of the status menu, in display order.
    pub fn menu() -> [StatusCommand; 5] {
        [
            StatusCommand::Change(Status::Pending),
            StatusCommand::Change(Status::Progress),
            StatusCommand::Change(Status::Done),
            StatusCommand::Change(Status::Archived),
            StatusCommand::Delete,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Change(status) => status.as_str(),
            Self::Delete => Self::DELETE_STR,
        }
    }

    /// Status menu label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Change(Status::Pending) => "Not started",
            Self::Change(Status::Progress) => "In progress",
            Self::Change(Status::Done) => "Done",
            Self::Change(Status::Archived) => "Archived",
            Self::Delete => "Delete",
        }
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Self::Delete)
    }
}

impl From<Status> for StatusCommand {
    fn from(status: Status) -> Self {
        Self::Change(status)
    }
}

impl FromStr for StatusCommand {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        if s == Self::DELETE_STR {
            return Ok(Self::Delete);
        }

        match s {
            "pending" => Ok(Self::Change(Status::Pending)),
            "progress" => Ok(Self::Change(Status::Progress)),
            "done" => Ok(Self::Change(Status::Done)),
            "archived" => Ok(Self::Change(Status::Archived)),
            _ => Err(CoreError::invalid_status_command(s)),
        }
    }
}

impl std::fmt::Display for StatusCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

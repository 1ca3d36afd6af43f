use crate::{CoreError, CoreResult};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lane a task lives in. Only these four values can be stored on a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Pending,
    Progress,
    Done,
    Archived,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Pending,
        Status::Progress,
        Status::Done,
        Status::Archived,
    ];

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Progress => "progress",
            Self::Done => "done",
            Self::Archived => "archived",
        }
    }

    /// Card background color. A task's color is always this mapping of its status.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Pending => "#4a4a4a",
            Self::Progress => "#1c3645",
            Self::Done => "#162e1e",
            Self::Archived => "#453e1c",
        }
    }

    /// Label shown on the status chip of a card
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Not started",
            Self::Progress => "In Progress",
            Self::Done => "Done",
            Self::Archived => "Archived",
        }
    }
}

impl FromStr for Status {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "pending" => Ok(Self::Pending),
            "progress" => Ok(Self::Progress),
            "done" => Ok(Self::Done),
            "archived" => Ok(Self::Archived),
            _ => Err(CoreError::invalid_status(s)),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

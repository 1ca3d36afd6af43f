use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid task status: {value} {location}")]
    InvalidStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid status command: {value} {location}")]
    InvalidStatusCommand {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid draft field: {value} {location}")]
    InvalidDraftField {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid notification severity: {value} {location}")]
    InvalidSeverity {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn invalid_status(value: impl Into<String>) -> Self {
        Self::InvalidStatus {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_status_command(value: impl Into<String>) -> Self {
        Self::InvalidStatusCommand {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_draft_field(value: impl Into<String>) -> Self {
        Self::InvalidDraftField {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_severity(value: impl Into<String>) -> Self {
        Self::InvalidSeverity {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;

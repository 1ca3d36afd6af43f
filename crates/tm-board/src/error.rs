use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use tm_client::{ClientError, SessionError};

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Task API request failed: {source} {location}")]
    Client {
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },

    #[error("Task {id} is not on the board {location}")]
    TaskNotFound { id: i64, location: ErrorLocation },

    #[error("Session storage failed: {source} {location}")]
    Session {
        #[source]
        source: SessionError,
        location: ErrorLocation,
    },
}

impl BoardError {
    #[track_caller]
    pub fn task_not_found(id: i64) -> Self {
        Self::TaskNotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ClientError> for BoardError {
    #[track_caller]
    fn from(source: ClientError) -> Self {
        Self::Client {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<SessionError> for BoardError {
    #[track_caller]
    fn from(source: SessionError) -> Self {
        Self::Session {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] tm_config::ConfigError),

    #[error("{0}")]
    Board(#[from] tm_board::BoardError),

    #[error("{0}")]
    Client(#[from] tm_client::ClientError),

    #[error("{source}\n{hint}")]
    Session {
        #[source]
        source: tm_client::SessionError,
        hint: &'static str,
    },

    #[error("Not logged in. Run `tm login --email <email> --password <password>` first. {location}")]
    NotLoggedIn { location: ErrorLocation },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Error serializing output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    #[track_caller]
    pub fn not_logged_in() -> Self {
        Self::NotLoggedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<tm_client::SessionError> for CliError {
    fn from(source: tm_client::SessionError) -> Self {
        let hint = source.recovery_hint();
        Self::Session { source, hint }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    /// A setting that parsed but is out of range or malformed
    #[error("Invalid {key}: {message} {location}")]
    InvalidSetting {
        key: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot determine the config directory: {source} {location}")]
    ConfigDir {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Reject the value of `key`, e.g. `api.timeout_secs`
    #[track_caller]
    pub fn invalid(key: &'static str, message: impl Into<String>) -> Self {
        ConfigError::InvalidSetting {
            key,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn config_dir(source: std::io::Error) -> Self {
        ConfigError::ConfigDir {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Config key the error is about, if it concerns a single setting
    pub fn key(&self) -> Option<&'static str> {
        match self {
            ConfigError::InvalidSetting { key, .. } => Some(key),
            _ => None,
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;

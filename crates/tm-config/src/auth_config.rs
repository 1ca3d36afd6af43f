use crate::{ConfigError, ConfigErrorResult, DEFAULT_AUTH_ENABLED, DEFAULT_SESSION_FILE};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Attach the stored bearer token to task requests
    pub enabled: bool,
    /// Session file name, relative to the config directory
    pub session_file: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AUTH_ENABLED,
            session_file: String::from(DEFAULT_SESSION_FILE),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.session_file.is_empty() {
            return Err(ConfigError::invalid("auth.session_file", "cannot be empty"));
        }

        if Path::new(&self.session_file).is_absolute() || self.session_file.contains("..") {
            return Err(ConfigError::invalid(
                "auth.session_file",
                "must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}

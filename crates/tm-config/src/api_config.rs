use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS,
    MIN_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Where the remote task API lives and how long to wait for it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::invalid(
                "api.base_url",
                format!("must start with http:// or https://, got {}", self.base_url),
            ));
        }

        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::invalid(
                "api.timeout_secs",
                format!(
                    "must be {}-{}, got {}",
                    MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
                ),
            ));
        }

        Ok(())
    }
}

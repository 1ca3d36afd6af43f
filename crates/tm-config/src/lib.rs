mod api_config;
mod auth_config;
mod board_config;
mod config;
mod error;
mod load_order;
mod log_level;
mod logging_config;
mod status_update_policy;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use auth_config::AuthConfig;
pub use board_config::BoardConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use load_order::LoadOrder;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use status_update_policy::StatusUpdatePolicy;

const CONFIG_DIR_ENV: &str = "TM_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".tm";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 300;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const DEFAULT_AUTH_ENABLED: bool = true;
const DEFAULT_SESSION_FILE: &str = "user.json";

const DEFAULT_NOTIFY_ON_LOAD_FAILURE: bool = true;
const DEFAULT_NOTIFY_ON_WRITE_FAILURE: bool = true;

const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

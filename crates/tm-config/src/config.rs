use crate::{
    ApiConfig, AuthConfig, BoardConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError,
    ConfigErrorResult, DEFAULT_CONFIG_DIR, LoggingConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub auth: AuthConfig,
    pub board: BoardConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for TM_CONFIG_DIR env var, else use ./.tm/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply TM_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: TM_CONFIG_DIR env var > ./.tm/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir().map_err(ConfigError::config_dir)?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.auth.validate()?;

        if let Some(ref file) = self.logging.file
            && (file.is_empty() || Path::new(file).is_absolute() || file.contains(".."))
        {
            return Err(ConfigError::invalid(
                "logging.file",
                "must be a non-empty relative name without '..'",
            ));
        }

        Ok(())
    }

    /// Absolute path of the stored session (logged-in user).
    pub fn session_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.auth.session_file))
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (timeout {}s)",
            self.api.base_url, self.api.timeout_secs
        );
        info!(
            "  auth: {} (session file: {})",
            if self.auth.enabled {
                "enabled"
            } else {
                "disabled"
            },
            self.auth.session_file
        );
        info!(
            "  board: load_order={}, status_update={}, notify_load={}, notify_write={}, delete_severity={}",
            self.board.load_order.as_str(),
            self.board.status_update.as_str(),
            self.board.notify_on_load_failure,
            self.board.notify_on_write_failure,
            self.board.delete_severity
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("TM_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_parse("TM_API_TIMEOUT_SECS", &mut self.api.timeout_secs);

        // Auth
        Self::apply_env_bool("TM_AUTH_ENABLED", &mut self.auth.enabled);
        Self::apply_env_string("TM_AUTH_SESSION_FILE", &mut self.auth.session_file);

        // Board
        Self::apply_env_parse("TM_BOARD_LOAD_ORDER", &mut self.board.load_order);
        Self::apply_env_parse("TM_BOARD_STATUS_UPDATE", &mut self.board.status_update);
        Self::apply_env_bool(
            "TM_BOARD_NOTIFY_ON_LOAD_FAILURE",
            &mut self.board.notify_on_load_failure,
        );
        Self::apply_env_bool(
            "TM_BOARD_NOTIFY_ON_WRITE_FAILURE",
            &mut self.board.notify_on_write_failure,
        );
        Self::apply_env_parse("TM_BOARD_DELETE_SEVERITY", &mut self.board.delete_severity);

        // Logging
        Self::apply_env_parse("TM_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("TM_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("TM_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values.
    /// Unparseable values leave the current setting in place.
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}

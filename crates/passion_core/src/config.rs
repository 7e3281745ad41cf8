//! Runtime configuration.
//!
//! # Responsibility
//! - Resolve log level, log directory and catalog source from defaults and
//!   `PASSION_*` environment variables.
//! - Validate values before they reach the logging or catalog layers.
//!
//! # Invariants
//! - Blank environment values are ignored, never treated as overrides.
//! - Without a catalog path the built-in seed catalog is used.

use crate::logging::{default_log_level, init_logging, normalize_level, normalize_log_dir};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "PASSION_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "PASSION_LOG_DIR";
pub const ENV_CATALOG_PATH: &str = "PASSION_CATALOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnsupportedLogLevel(String),
    InvalidLogDir(String),
    /// Logging backend refused to start or was already configured differently.
    Logging(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLogLevel(message) => write!(f, "{message}"),
            Self::InvalidLogDir(message) => write!(f, "{message}"),
            Self::Logging(message) => write!(f, "logging init failed: {message}"),
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: String,
    /// File logging is disabled when `None`.
    pub log_dir: Option<PathBuf>,
    /// JSON catalog to load instead of the seed catalog.
    pub catalog_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            catalog_path: None,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by `lookup(key)` for each `PASSION_*` key.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.log_level = level;
        }
        config.log_dir = read(ENV_LOG_DIR).map(PathBuf::from);
        config.catalog_path = read(ENV_CATALOG_PATH).map(PathBuf::from);
        config
    }

    /// Checks the level name and, when set, that the log dir is absolute.
    pub fn validate(&self) -> Result<(), ConfigError> {
        normalize_level(&self.log_level).map_err(ConfigError::UnsupportedLogLevel)?;
        if let Some(dir) = &self.log_dir {
            normalize_log_dir(&dir.to_string_lossy()).map_err(ConfigError::InvalidLogDir)?;
        }
        Ok(())
    }

    /// Starts file logging when a log dir is configured.
    ///
    /// Returns `Ok(false)` when logging is disabled by configuration.
    pub fn init_logging(&self) -> Result<bool, ConfigError> {
        self.validate()?;
        let Some(dir) = &self.log_dir else {
            return Ok(false);
        };
        init_logging(&self.log_level, &dir.to_string_lossy()).map_err(ConfigError::Logging)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError, ENV_CATALOG_PATH, ENV_LOG_DIR, ENV_LOG_LEVEL};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let env = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn empty_environment_yields_defaults() {
        assert_eq!(config_from(&[]), AppConfig::default());
    }

    #[test]
    fn environment_overrides_defaults_and_blank_values_are_ignored() {
        let config = config_from(&[
            (ENV_LOG_LEVEL, " warn "),
            (ENV_LOG_DIR, "   "),
            (ENV_CATALOG_PATH, "/srv/catalog.json"),
        ]);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, None);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/srv/catalog.json")));
    }

    #[test]
    fn validate_rejects_unknown_level_and_relative_dir() {
        let bad_level = config_from(&[(ENV_LOG_LEVEL, "chatty")]);
        assert!(matches!(
            bad_level.validate(),
            Err(ConfigError::UnsupportedLogLevel(_))
        ));

        let relative = config_from(&[(ENV_LOG_DIR, "logs")]);
        assert!(matches!(
            relative.validate(),
            Err(ConfigError::InvalidLogDir(_))
        ));
    }

    #[test]
    fn init_logging_is_skipped_without_log_dir() {
        let config = AppConfig::default();
        assert_eq!(config.init_logging(), Ok(false));
    }
}

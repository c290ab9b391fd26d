//! Configuration management for the assistant bot.
//!
//! The bot keeps no data outside memory, so the only setting is the log
//! level. It is read from the environment, or from a `.env` file if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for the assistant bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: one of trace, debug, info, warn, error, off (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let log_level = match env::var("LOG_LEVEL") {
            Ok(val) => Self::parse_log_level(&val)?,
            Err(_) => Self::default().log_level,
        };

        Ok(Config { log_level })
    }

    /// Load configuration, falling back to defaults when a variable is invalid.
    ///
    /// The rejected error is handed back so the caller can report it once
    /// logging is running. A bad log level never stops the bot.
    pub fn from_env_or_default() -> (Self, Option<ConfigError>) {
        match Self::from_env() {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Normalize and validate a log level name.
    fn parse_log_level(value: &str) -> ConfigResult<String> {
        let level = value.trim().to_lowercase();
        if LOG_LEVELS.contains(&level.as_str()) {
            Ok(level)
        } else {
            Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), value),
            })
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_log_level() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", "DEBUG");

        let config = Config::from_env().unwrap();
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_log_level() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", "loud");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "LOG_LEVEL"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_unset_uses_default() {
        env::remove_var("LOG_LEVEL");

        let config = Config::from_env().unwrap();
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_invalid_log_level_falls_back_to_default() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", "verbose");

        let (config, err) = Config::from_env_or_default();
        assert_eq!(config, Config::default());
        match err {
            Some(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "LOG_LEVEL"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_valid_log_level_has_no_error() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", "info");

        let (config, err) = Config::from_env_or_default();
        assert_eq!(config.log_level, "info");
        assert!(err.is_none());
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(Config::parse_log_level(" warn ").unwrap(), "warn");
        assert_eq!(Config::parse_log_level("off").unwrap(), "off");
        assert!(Config::parse_log_level("").is_err());
    }
}

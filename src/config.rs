//! Configuration management for the registration form binary.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is loaded first if present.

use crate::error::{ConfigError, ConfigResult};
use crate::form::ValidationMode;
use std::env;
use std::path::PathBuf;

/// Configuration for the registration form binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "info")
    pub log_level: String,

    /// When the form re-validates (default: onSubmit)
    pub validation_mode: ValidationMode,

    /// JSON draft to submit; stdin when unset
    pub input_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "info")
    /// - `REGISTRATION_VALIDATION_MODE`: `onSubmit`, `onChange` or `onBlur` (default: `onSubmit`)
    /// - `REGISTRATION_INPUT`: Path of the JSON draft to submit (default: stdin)
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let log_level = Self::read_env("LOG_LEVEL")?.unwrap_or_else(|| "info".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let validation_mode = match Self::read_env("REGISTRATION_VALIDATION_MODE")? {
            Some(value) => value
                .parse::<ValidationMode>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "REGISTRATION_VALIDATION_MODE".to_string(),
                    reason,
                })?,
            None => ValidationMode::default(),
        };

        let input_path = Self::read_env("REGISTRATION_INPUT")?
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Config {
            log_level,
            validation_mode,
            input_path,
        })
    }

    /// Read an environment variable, treating an unset variable as `None`.
    fn read_env(var_name: &str) -> ConfigResult<Option<String>> {
        match env::var(var_name) {
            Ok(val) => Ok(Some(val)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(var_name.to_string())),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            validation_mode: ValidationMode::default(),
            input_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 3] = [
        "LOG_LEVEL",
        "REGISTRATION_VALIDATION_MODE",
        "REGISTRATION_INPUT",
    ];

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
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
        assert_eq!(config.log_level, "info");
        assert_eq!(config.validation_mode, ValidationMode::OnSubmit);
        assert!(config.input_path.is_none());
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", "debug");
        guard.set("REGISTRATION_VALIDATION_MODE", "onChange");
        guard.set("REGISTRATION_INPUT", "draft.json");

        let config = Config::from_env().unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.validation_mode, ValidationMode::OnChange);
        assert_eq!(config.input_path, Some(PathBuf::from("draft.json")));
    }

    #[test]
    #[serial]
    fn test_config_invalid_validation_mode() {
        let mut guard = EnvGuard::new();
        guard.set("REGISTRATION_VALIDATION_MODE", "always");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "REGISTRATION_VALIDATION_MODE");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_empty_log_level() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", "  ");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "LOG_LEVEL");
        }
    }

    #[test]
    #[serial]
    fn test_config_blank_input_path_means_stdin() {
        let mut guard = EnvGuard::new();
        guard.set("REGISTRATION_INPUT", "");

        let config = Config::from_env().unwrap();
        assert!(config.input_path.is_none());
    }
}

//! Configuration management for the Nefesh directory server.
//!
//! This module handles loading and validating configuration from
//! environment variables. The match thresholds live here rather than as
//! constants: their values are empirical tuning against a noisy roster,
//! not derived, so operators can adjust them without a rebuild.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default similarity confidence a city query must reach to resolve.
pub const DEFAULT_RESOLVE_CONFIDENCE_FLOOR: u8 = 70;

/// Default similarity score a record's city must exceed to be matched.
pub const DEFAULT_MATCH_ACCEPT_THRESHOLD: u8 = 80;

/// Configuration for the Nefesh directory server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the therapist record JSON document
    pub data_file: PathBuf,

    /// Path to the city gazetteer JSON file
    pub gazetteer_file: PathBuf,

    /// Confidence floor for resolving free-text city queries (0-100,
    /// inclusive; default 70)
    pub resolve_confidence_floor: u8,

    /// Acceptance bar for matching record cities against the radius set
    /// (0-100, strict; default 80)
    pub match_accept_threshold: u8,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `NEFESH_DATA_FILE`: Path to the therapist JSON document
    /// - `NEFESH_GAZETTEER_FILE`: Path to the gazetteer JSON file
    ///
    /// Optional environment variables:
    /// - `RESOLVE_CONFIDENCE_FLOOR`: City resolution floor (default: 70)
    /// - `MATCH_ACCEPT_THRESHOLD`: Record acceptance bar (default: 80)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let data_file = env::var("NEFESH_DATA_FILE")
            .map_err(|_| ConfigError::MissingVar("NEFESH_DATA_FILE".to_string()))?;

        let gazetteer_file = env::var("NEFESH_GAZETTEER_FILE")
            .map_err(|_| ConfigError::MissingVar("NEFESH_GAZETTEER_FILE".to_string()))?;

        if data_file.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "NEFESH_DATA_FILE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        if gazetteer_file.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "NEFESH_GAZETTEER_FILE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let resolve_confidence_floor =
            Self::parse_env_u8("RESOLVE_CONFIDENCE_FLOOR", DEFAULT_RESOLVE_CONFIDENCE_FLOOR)?;
        let match_accept_threshold =
            Self::parse_env_u8("MATCH_ACCEPT_THRESHOLD", DEFAULT_MATCH_ACCEPT_THRESHOLD)?;

        // Both thresholds live on the 0-100 similarity scale
        for (var, value) in [
            ("RESOLVE_CONFIDENCE_FLOOR", resolve_confidence_floor),
            ("MATCH_ACCEPT_THRESHOLD", match_accept_threshold),
        ] {
            if value > 100 {
                return Err(ConfigError::InvalidValue {
                    var: var.to_string(),
                    reason: "Must be between 0 and 100".to_string(),
                });
            }
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            data_file: PathBuf::from(data_file),
            gazetteer_file: PathBuf::from(gazetteer_file),
            resolve_confidence_floor,
            match_accept_threshold,
            log_level,
        })
    }

    /// Parse an environment variable as u8 with a default value.
    fn parse_env_u8(var_name: &str, default: u8) -> ConfigResult<u8> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u8>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-255, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::new(),
            gazetteer_file: PathBuf::new(),
            resolve_confidence_floor: DEFAULT_RESOLVE_CONFIDENCE_FLOOR,
            match_accept_threshold: DEFAULT_MATCH_ACCEPT_THRESHOLD,
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
        assert_eq!(config.resolve_confidence_floor, 70);
        assert_eq!(config.match_accept_threshold, 80);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_missing_required() {
        env::remove_var("NEFESH_DATA_FILE");
        env::remove_var("NEFESH_GAZETTEER_FILE");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::MissingVar(var)) = result {
            assert_eq!(var, "NEFESH_DATA_FILE");
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_empty_path() {
        let mut guard = EnvGuard::new();
        guard.set("NEFESH_DATA_FILE", "   ");
        guard.set("NEFESH_GAZETTEER_FILE", "cities.json");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "NEFESH_DATA_FILE");
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("NEFESH_DATA_FILE", "data/data.json");
        guard.set("NEFESH_GAZETTEER_FILE", "data/city_coordinates.json");
        guard.set("RESOLVE_CONFIDENCE_FLOOR", "60");
        guard.set("MATCH_ACCEPT_THRESHOLD", "85");

        let result = Config::from_env();
        assert!(result.is_ok(), "Config should be valid: {:?}", result.err());

        let config = result.unwrap();
        assert_eq!(config.data_file, PathBuf::from("data/data.json"));
        assert_eq!(
            config.gazetteer_file,
            PathBuf::from("data/city_coordinates.json")
        );
        assert_eq!(config.resolve_confidence_floor, 60);
        assert_eq!(config.match_accept_threshold, 85);
    }

    #[test]
    #[serial]
    fn test_config_invalid_threshold() {
        let mut guard = EnvGuard::new();
        guard.set("NEFESH_DATA_FILE", "data.json");
        guard.set("NEFESH_GAZETTEER_FILE", "cities.json");
        guard.set("MATCH_ACCEPT_THRESHOLD", "150");

        let result = Config::from_env();
        assert!(result.is_err());
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "MATCH_ACCEPT_THRESHOLD");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_u8() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_THRESHOLD_U8", "42");

        let result = Config::parse_env_u8("TEST_THRESHOLD_U8", 10);
        assert_eq!(result.unwrap(), 42);

        let result = Config::parse_env_u8("NONEXISTENT_THRESHOLD", 10);
        assert_eq!(result.unwrap(), 10);
    }

    #[test]
    #[serial]
    fn test_parse_env_u8_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_THRESHOLD_INVALID", "not-a-number");

        let result = Config::parse_env_u8("TEST_THRESHOLD_INVALID", 10);
        assert!(result.is_err());
    }
}

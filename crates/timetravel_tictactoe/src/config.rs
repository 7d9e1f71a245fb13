//! Engine configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Tunables for a [`GameController`](crate::GameController).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// How many board evaluations to memoize (0 disables the cache).
    #[serde(default = "default_evaluation_cache_capacity")]
    evaluation_cache_capacity: usize,
}

fn default_evaluation_cache_capacity() -> usize {
    64
}

impl GameConfig {
    /// Creates a configuration with an explicit cache size.
    pub fn new(evaluation_cache_capacity: usize) -> Self {
        Self {
            evaluation_cache_capacity,
        }
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(
            evaluation_cache_capacity = config.evaluation_cache_capacity,
            "Config loaded"
        );
        Ok(config)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(default_evaluation_cache_capacity())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = GameConfig::from_toml_str("").expect("empty config is valid");
        assert_eq!(config, GameConfig::default());
        assert_eq!(*config.evaluation_cache_capacity(), 64);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "evaluation_cache_capacity = 8").expect("write");
        let config = GameConfig::from_file(file.path()).expect("valid config");
        assert_eq!(*config.evaluation_cache_capacity(), 8);
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }

    #[test]
    fn test_bad_type_is_error() {
        let err = GameConfig::from_toml_str("evaluation_cache_capacity = \"lots\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}

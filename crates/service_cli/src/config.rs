//! CLI configuration management.
//!
//! Handles loading of settings from an optional TOML file with environment
//! variable override support. Command-line flags are applied last, in
//! `main`.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Environment variable overriding [`CliConfig::input`].
pub const ENV_INPUT: &str = "CONSTANT_TERM_INPUT";
/// Environment variable overriding [`CliConfig::points`].
pub const ENV_POINTS: &str = "CONSTANT_TERM_POINTS";
/// Environment variable overriding [`CliConfig::precision`].
pub const ENV_PRECISION: &str = "CONSTANT_TERM_PRECISION";
/// Environment variable overriding [`CliConfig::log_level`].
pub const ENV_LOG_LEVEL: &str = "CONSTANT_TERM_LOG_LEVEL";

/// Fewest points any run may interpolate.
pub const MIN_POINTS: usize = 3;
/// Largest supported decimal precision.
pub const MAX_PRECISION: u32 = 1000;

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Point file read when no input is given on the command line
    pub input: PathBuf,

    /// Number of leading points to interpolate
    pub points: usize,

    /// Fractional digits shown for non-integral results
    pub precision: u32,

    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data.json"),
            points: MIN_POINTS,
            precision: 50,
            log_level: "info".to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path` if it exists, otherwise use defaults.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable source.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(input) = lookup(ENV_INPUT) {
            self.input = PathBuf::from(input);
        }

        if let Some(points) = lookup(ENV_POINTS) {
            self.points = points
                .trim()
                .parse()
                .map_err(|_| ConfigError::Env(ENV_POINTS, points))?;
        }

        if let Some(precision) = lookup(ENV_PRECISION) {
            self.precision = precision
                .trim()
                .parse()
                .map_err(|_| ConfigError::Env(ENV_PRECISION, precision))?;
        }

        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = log_level;
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if self.points < MIN_POINTS {
            errors.push(format!(
                "points must be at least {}, got {}",
                MIN_POINTS, self.points
            ));
        }

        if self.precision == 0 || self.precision > MAX_PRECISION {
            errors.push(format!(
                "precision must be between 1 and {}, got {}",
                MAX_PRECISION, self.precision
            ));
        }

        if self.input.as_os_str().is_empty() {
            errors.push("input cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error reading {}: {message}", .path.display())]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying error text
        message: String,
    },

    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Environment variable holds an unusable value
    #[error("Invalid value for {0}: '{1}'")]
    Env(&'static str, String),

    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

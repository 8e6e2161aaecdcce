//! Error types for the CLI.

use adapter_loader::LoadError;
use interp_core::types::InterpolationError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Point file could not be loaded
    #[error("Failed to load points")]
    Load(#[from] LoadError),

    /// Points could not be interpolated
    #[error("Interpolation failed")]
    Interpolation(#[from] InterpolationError),

    /// Results could not be written
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// Point file holds fewer readable records than requested
    #[error("{path} has {got} readable points, need {need}")]
    TooFewPoints {
        /// File that was checked
        path: String,
        /// Consecutive records that decoded
        got: usize,
        /// Records requested
        need: usize,
    },

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_interpolation_error_is_source() {
        let err = CliError::from(InterpolationError::InsufficientData { got: 1, need: 3 });
        assert_eq!(err.to_string(), "Interpolation failed");
        assert!(err
            .source()
            .unwrap()
            .to_string()
            .contains("got 1, need at least 3"));
    }

    #[test]
    fn test_too_few_points_display() {
        let err = CliError::TooFewPoints {
            path: "data.json".to_string(),
            got: 2,
            need: 3,
        };
        assert_eq!(err.to_string(), "data.json has 2 readable points, need 3");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = CliError::InvalidArgument("points must be at least 3".to_string());
        assert!(err.to_string().contains("points must be at least 3"));
    }
}

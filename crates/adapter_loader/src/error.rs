//! Error types for point loading.

use std::path::PathBuf;

use interp_core::types::RadixError;
use thiserror::Error;

/// Point loading error.
///
/// Every variant aborts loading; no partially loaded set is returned.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Input file missing or unreadable
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// Path that could not be read
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// Input is not valid JSON
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Top-level JSON value is not an object
    #[error("Expected a JSON object at the top level, found {0}")]
    NotAnObject(&'static str),

    /// A present record is missing fields or has the wrong shape
    #[error("Invalid record \"{key}\": {message}")]
    Record {
        /// Top-level key of the record
        key: String,
        /// What was wrong with it
        message: String,
    },

    /// A record's base or value could not be decoded
    #[error("Invalid value in record \"{key}\": {source}")]
    Radix {
        /// Top-level key of the record
        key: String,
        /// Decoding failure
        #[source]
        source: RadixError,
    },
}

impl LoadError {
    /// Create a record shape error
    pub fn record(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Record {
            key: key.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_display() {
        let err = LoadError::record("2", "missing field `base`");
        assert_eq!(
            err.to_string(),
            "Invalid record \"2\": missing field `base`"
        );
    }

    #[test]
    fn test_radix_display_and_source() {
        let err = LoadError::Radix {
            key: "1".to_string(),
            source: RadixError::UnsupportedRadix(40),
        };
        assert!(err.to_string().contains("record \"1\""));
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.to_string().contains("40"));
    }

    #[test]
    fn test_io_display() {
        let err = LoadError::Io {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().starts_with("Failed to read missing.json"));
    }
}

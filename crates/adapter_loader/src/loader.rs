//! Point file loading.
//!
//! Records are keyed `"1"`, `"2"`, ... and read in that order. Loading stops
//! at the first missing key, so a gap truncates the set rather than failing.

use std::path::Path;

use interp_core::types::PointSet;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::LoadError;
use crate::record::{read_keys_header, KeysHeader, ShareRecord};

/// Number of points a quadratic needs, and the default load count.
pub const DEFAULT_POINT_COUNT: usize = 3;

/// A loaded point file: the optional header plus the decoded points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointDocument {
    /// The `"keys"` header, when the file carries one
    pub header: Option<KeysHeader>,
    /// Points in key order
    pub points: PointSet,
}

/// Load up to `max_count` points from the JSON file at `path`.
///
/// # Errors
///
/// * `LoadError::Io` - The file is missing or unreadable
/// * `LoadError::Json` / `LoadError::NotAnObject` - The content is not a JSON object
/// * `LoadError::Record` - A present record lacks `base` or `value`
/// * `LoadError::Radix` - A record's base or digits are invalid
pub fn load_points(path: impl AsRef<Path>, max_count: usize) -> Result<PointSet, LoadError> {
    Ok(load_document(path, max_count)?.points)
}

/// Load the header and up to `max_count` points from the JSON file at `path`.
pub fn load_document(
    path: impl AsRef<Path>,
    max_count: usize,
) -> Result<PointDocument, LoadError> {
    let path = path.as_ref();
    info!("Loading points from {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_document(&content, max_count)
}

/// Parse up to `max_count` points from JSON text.
///
/// # Example
///
/// ```
/// use adapter_loader::parse_points;
/// use interp_core::types::Point;
///
/// let json = r#"{
///     "1": {"base": "16", "value": "ff"},
///     "2": {"base": "2", "value": "101"}
/// }"#;
///
/// let points = parse_points(json, 3).unwrap();
/// assert_eq!(points.len(), 2);
/// assert_eq!(points.as_slice()[0], Point::from_integers(1, 255));
/// assert_eq!(points.as_slice()[1], Point::from_integers(2, 5));
/// ```
pub fn parse_points(text: &str, max_count: usize) -> Result<PointSet, LoadError> {
    Ok(parse_document(text, max_count)?.points)
}

/// Parse the header and up to `max_count` points from JSON text.
pub fn parse_document(text: &str, max_count: usize) -> Result<PointDocument, LoadError> {
    let doc: Value = serde_json::from_str(text)?;
    document_from_value(&doc, max_count)
}

/// Extract the header and up to `max_count` points from a parsed document.
pub fn document_from_value(doc: &Value, max_count: usize) -> Result<PointDocument, LoadError> {
    let object = doc.as_object().ok_or(LoadError::NotAnObject(json_kind(doc)))?;

    let header = read_keys_header(doc);
    if let Some(h) = header {
        debug!("Header: n={}, k={}", h.n, h.k);
    }

    let mut points = PointSet::with_capacity(max_count.min(object.len()));
    for x in 1..=max_count as u64 {
        let key = x.to_string();
        let Some(value) = object.get(&key) else {
            debug!("Key \"{}\" absent, stopping after {} points", key, points.len());
            break;
        };

        let record = ShareRecord::from_value(&key, value)?;
        let point = record.to_point(&key, x)?;
        debug!(
            "Decoded record \"{}\" (base {}): {}",
            key, record.base, point
        );
        points.push(point);
    }

    info!("Loaded {} points", points.len());
    Ok(PointDocument { header, points })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interp_core::types::{BigInt, Point};

    const SAMPLE: &str = r#"{
        "keys": {"n": 4, "k": 3},
        "1": {"base": "10", "value": "4"},
        "2": {"base": "2", "value": "111"},
        "3": {"base": "10", "value": "12"},
        "6": {"base": "4", "value": "213"}
    }"#;

    #[test]
    fn test_parse_reads_first_three() {
        let points = parse_points(SAMPLE, DEFAULT_POINT_COUNT).unwrap();
        assert_eq!(
            points.as_slice(),
            &[
                Point::from_integers(1, 4),
                Point::from_integers(2, 7),
                Point::from_integers(3, 12),
            ]
        );
    }

    #[test]
    fn test_parse_respects_max_count() {
        assert_eq!(parse_points(SAMPLE, 1).unwrap().len(), 1);
        assert!(parse_points(SAMPLE, 0).unwrap().is_empty());
    }

    #[test]
    fn test_parse_stops_at_gap() {
        // "4" is missing, so "6" is never reached
        let points = parse_points(SAMPLE, 10).unwrap();
        assert_eq!(points.len(), 3);
    }

    #[test]
    fn test_parse_missing_second_key() {
        let json = r#"{"1": {"base": "10", "value": "9"}, "3": {"base": "10", "value": "1"}}"#;
        let points = parse_points(json, 3).unwrap();
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn test_parse_document_header() {
        let doc = parse_document(SAMPLE, 3).unwrap();
        assert_eq!(doc.header, Some(KeysHeader { n: 4, k: 3 }));
        assert_eq!(doc.points.len(), 3);
    }

    #[test]
    fn test_malformed_header_still_loads_points() {
        let json = r#"{
            "keys": {"n": "4", "k": "3"},
            "1": {"base": "10", "value": "5"},
            "2": {"base": "10", "value": "8"},
            "3": {"base": "10", "value": "13"}
        }"#;
        let doc = parse_document(json, 3).unwrap();
        assert_eq!(doc.header, None);
        assert_eq!(doc.points.len(), 3);
        assert_eq!(doc.points.as_slice()[2], Point::from_integers(3, 13));
    }

    #[test]
    fn test_parse_hex_and_binary() {
        let json = r#"{"1": {"base": "16", "value": "ff"}, "2": {"base": "2", "value": "101"}}"#;
        let points = parse_points(json, 3).unwrap();
        assert_eq!(points.as_slice()[0].y().to_integer(), BigInt::from(255));
        assert_eq!(points.as_slice()[1].y().to_integer(), BigInt::from(5));
    }

    #[test]
    fn test_parse_large_value() {
        let json = r#"{"1": {"base": "36", "value": "zzzzzzzzzzzzzzzzzzzzzzzzzzzzzz"}}"#;
        let points = parse_points(json, 3).unwrap();
        let expected = BigInt::from(36).pow(30) - 1;
        assert_eq!(points.as_slice()[0].y().to_integer(), expected);
    }

    #[test]
    fn test_parse_malformed_json() {
        let err = parse_points("{\"1\": ", 3).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_parse_non_object() {
        let err = parse_points("[1, 2, 3]", 3).unwrap_err();
        match err {
            LoadError::NotAnObject(kind) => assert_eq!(kind, "an array"),
            other => panic!("Expected NotAnObject error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_missing_field_aborts() {
        let json = r#"{"1": {"base": "10", "value": "1"}, "2": {"value": "2"}}"#;
        match parse_points(json, 3).unwrap_err() {
            LoadError::Record { key, message } => {
                assert_eq!(key, "2");
                assert!(message.contains("base"));
            }
            other => panic!("Expected Record error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_invalid_digit_aborts() {
        let json = r#"{"1": {"base": "2", "value": "12"}}"#;
        assert!(matches!(
            parse_points(json, 3).unwrap_err(),
            LoadError::Radix { .. }
        ));
    }

    #[test]
    fn test_bad_record_beyond_max_count_is_ignored() {
        let json = r#"{"1": {"base": "10", "value": "1"}, "2": {"base": "x", "value": "?"}}"#;
        assert_eq!(parse_points(json, 1).unwrap().len(), 1);
    }

    #[test]
    fn test_json_kind() {
        assert_eq!(json_kind(&Value::Null), "null");
        assert_eq!(json_kind(&serde_json::json!("s")), "a string");
    }
}

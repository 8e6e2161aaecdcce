//! Record types found in point files.

use interp_core::math::radix::parse_radix_str;
use interp_core::types::{BigInt, Point};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::LoadError;

/// Top-level key of the optional header object.
pub const KEYS_FIELD: &str = "keys";

/// One encoded sample: a value written in some base.
///
/// Both fields are strings in the file, e.g. `{"base": "16", "value": "ff"}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShareRecord {
    /// Radix as decimal text
    pub base: String,
    /// Digit string in `base`
    pub value: String,
}

impl ShareRecord {
    /// Deserialise the record stored under `key`.
    pub fn from_value(key: &str, value: &Value) -> Result<Self, LoadError> {
        Self::deserialize(value).map_err(|e| LoadError::record(key, e.to_string()))
    }

    /// Decode the value into an exact integer.
    pub fn decode(&self, key: &str) -> Result<BigInt, LoadError> {
        parse_radix_str(&self.value, &self.base).map_err(|source| LoadError::Radix {
            key: key.to_string(),
            source,
        })
    }

    /// Decode the value and pair it with abscissa `x`.
    pub fn to_point(&self, key: &str, x: u64) -> Result<Point, LoadError> {
        Ok(Point::from_integers(x, self.decode(key)?))
    }
}

/// Optional `"keys"` header describing the file.
///
/// `n` is the number of records supplied and `k` the number needed to
/// determine the polynomial (degree `k - 1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct KeysHeader {
    /// Records supplied
    pub n: u64,
    /// Records required
    pub k: u64,
}

impl KeysHeader {
    /// Degree of the polynomial the header describes.
    pub fn degree(&self) -> u64 {
        self.k.saturating_sub(1)
    }
}

/// Read the `"keys"` header from a parsed document, if present.
///
/// The header is informational. A malformed one is logged and treated as
/// absent so that the point records still load.
pub fn read_keys_header(doc: &Value) -> Option<KeysHeader> {
    let value = doc.get(KEYS_FIELD)?;
    match KeysHeader::deserialize(value) {
        Ok(header) => Some(header),
        Err(e) => {
            warn!("Ignoring malformed \"{}\" header: {}", KEYS_FIELD, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_share_record_decode() {
        let record = ShareRecord::from_value("1", &json!({"base": "16", "value": "ff"})).unwrap();
        assert_eq!(record.decode("1").unwrap(), BigInt::from(255));
        assert_eq!(record.to_point("1", 1).unwrap(), Point::from_integers(1, 255));
    }

    #[test]
    fn test_share_record_missing_field() {
        let err = ShareRecord::from_value("2", &json!({"base": "10"})).unwrap_err();
        match err {
            LoadError::Record { key, message } => {
                assert_eq!(key, "2");
                assert!(message.contains("value"));
            }
            other => panic!("Expected Record error, got {:?}", other),
        }
    }

    #[test]
    fn test_share_record_non_string_field() {
        let err = ShareRecord::from_value("1", &json!({"base": 10, "value": "7"})).unwrap_err();
        assert!(matches!(err, LoadError::Record { .. }));
    }

    #[test]
    fn test_share_record_extra_fields_ignored() {
        let record =
            ShareRecord::from_value("1", &json!({"base": "2", "value": "101", "note": 1})).unwrap();
        assert_eq!(record.decode("1").unwrap(), BigInt::from(5));
    }

    #[test]
    fn test_share_record_bad_digit() {
        let record = ShareRecord::from_value("3", &json!({"base": "8", "value": "19"})).unwrap();
        match record.decode("3").unwrap_err() {
            LoadError::Radix { key, .. } => assert_eq!(key, "3"),
            other => panic!("Expected Radix error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_keys_header() {
        let doc = json!({"keys": {"n": 4, "k": 3}, "1": {"base": "10", "value": "4"}});
        let header = read_keys_header(&doc).unwrap();
        assert_eq!(header, KeysHeader { n: 4, k: 3 });
        assert_eq!(header.degree(), 2);
    }

    #[test]
    fn test_read_keys_header_absent() {
        assert_eq!(read_keys_header(&json!({})), None);
    }

    #[test]
    fn test_read_keys_header_malformed_is_ignored() {
        assert_eq!(read_keys_header(&json!({"keys": {"n": "four"}})), None);
        assert_eq!(read_keys_header(&json!({"keys": {"n": "4", "k": "3"}})), None);
        assert_eq!(read_keys_header(&json!({"keys": [4, 3]})), None);
    }
}

//! # adapter_loader: Point File Input
//!
//! Reads JSON point files into [`PointSet`](interp_core::types::PointSet)s.
//!
//! ## File Format
//!
//! ```json
//! {
//!   "keys": {"n": 4, "k": 3},
//!   "1": {"base": "10", "value": "4"},
//!   "2": {"base": "2", "value": "111"},
//!   "3": {"base": "10", "value": "12"}
//! }
//! ```
//!
//! Record `"i"` becomes the point `(i, value decoded in base)`. Records are
//! read from `"1"` upwards and loading stops at the first missing key. The
//! `"keys"` header is optional and is returned separately by
//! [`load_document`].

pub mod error;
pub mod loader;
pub mod record;

pub use error::LoadError;
pub use loader::{
    document_from_value, load_document, load_points, parse_document, parse_points,
    PointDocument, DEFAULT_POINT_COUNT,
};
pub use record::{read_keys_header, KeysHeader, ShareRecord};

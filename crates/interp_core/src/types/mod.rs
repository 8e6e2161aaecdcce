//! Core sample and error types.
//!
//! This module provides:
//! - `point`: Exact (x, y) samples and ordered point sets
//! - `error`: Structured error types for radix decoding and interpolation
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Point`], [`PointSet`] from `point`
//! - [`RadixError`], [`InterpolationError`] from `error`
//! - [`BigInt`], [`BigRational`] from the num crates

pub mod error;
pub mod point;

// Re-export commonly used types at module level
pub use error::{InterpolationError, RadixError, MAX_RADIX, MIN_RADIX};
pub use num_bigint::BigInt;
pub use num_rational::BigRational;
pub use point::{Point, PointSet};

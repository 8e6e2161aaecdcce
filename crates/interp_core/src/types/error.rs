//! Structured error types for radix decoding and interpolation.
//!
//! This module provides:
//! - `RadixError`: Errors from decoding digit strings in a given base
//! - `InterpolationError`: Errors from building or evaluating interpolants

use thiserror::Error;

/// Smallest radix accepted by [`crate::math::radix::parse_radix`].
pub const MIN_RADIX: u32 = 2;

/// Largest radix accepted by [`crate::math::radix::parse_radix`].
pub const MAX_RADIX: u32 = 36;

/// Radix decoding errors.
///
/// # Examples
/// ```
/// use interp_core::types::RadixError;
///
/// let err = RadixError::InvalidDigit { digit: 'g', position: 1, radix: 16 };
/// assert_eq!(format!("{}", err), "Invalid digit 'g' at position 1 for base 16");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RadixError {
    /// Radix text is not a decimal integer.
    #[error("Invalid base '{0}': expected a decimal integer")]
    InvalidBase(String),

    /// Radix is outside the supported range.
    #[error("Unsupported base {0}: must be between 2 and 36")]
    UnsupportedRadix(u32),

    /// Digit string has no digits.
    #[error("Empty value: expected at least one digit")]
    Empty,

    /// Digit is not valid for the radix.
    #[error("Invalid digit '{digit}' at position {position} for base {radix}")]
    InvalidDigit {
        /// The offending character
        digit: char,
        /// Zero-based character position within the value
        position: usize,
        /// Radix the value was decoded in
        radix: u32,
    },
}

/// Interpolation errors.
///
/// # Variants
/// - `InsufficientData`: Fewer points than the interpolant needs
/// - `DuplicateAbscissa`: Two points share an x-coordinate (zero denominator)
///
/// # Examples
/// ```
/// use interp_core::types::InterpolationError;
///
/// let err = InterpolationError::InsufficientData { got: 1, need: 3 };
/// assert_eq!(
///     format!("{}", err),
///     "Insufficient data points: got 1, need at least 3"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpolationError {
    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Two points share an x-coordinate, making a basis denominator zero.
    #[error("Division by zero: points {first} and {second} share x = {x}")]
    DuplicateAbscissa {
        /// Index of the first point with this x
        first: usize,
        /// Index of the second point with this x
        second: usize,
        /// The repeated x-coordinate
        x: String,
    },
}

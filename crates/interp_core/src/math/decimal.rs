//! Decimal rendering of exact rationals.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

/// Render `value` with exactly `digits` fractional digits, truncated toward
/// zero.
///
/// With `digits == 0` the result equals the integer part, matching
/// [`BigRational::to_integer`].
///
/// # Example
///
/// ```
/// use interp_core::math::decimal::to_decimal_string;
/// use interp_core::types::{BigInt, BigRational};
///
/// let third = BigRational::new(BigInt::from(1), BigInt::from(3));
/// assert_eq!(to_decimal_string(&third, 5), "0.33333");
///
/// let neg = BigRational::new(BigInt::from(-7), BigInt::from(2));
/// assert_eq!(to_decimal_string(&neg, 2), "-3.50");
/// assert_eq!(to_decimal_string(&neg, 0), "-3");
/// ```
pub fn to_decimal_string(value: &BigRational, digits: u32) -> String {
    let negative = value.is_negative();
    let magnitude = value.abs();
    let numer = magnitude.numer();
    let denom = magnitude.denom();

    let whole = numer / denom;
    let remainder = numer % denom;
    let scale = BigInt::from(10u32).pow(digits);
    let fraction = (remainder * scale) / denom;

    let sign = if negative && !(whole.is_zero() && fraction.is_zero()) {
        "-"
    } else {
        ""
    };

    if digits == 0 {
        format!("{}{}", sign, whole)
    } else {
        format!(
            "{}{}.{:0>width$}",
            sign,
            whole,
            fraction.to_string(),
            width = digits as usize
        )
    }
}

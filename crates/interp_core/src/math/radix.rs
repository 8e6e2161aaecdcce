//! Arbitrary-radix integer decoding.
//!
//! Digit strings use `0-9` followed by `a-z` (case-insensitive), so bases
//! 2 through 36 are supported. Values are decoded into [`BigInt`] and may
//! exceed any native integer width.

use num_bigint::{BigInt, BigUint, Sign};

use crate::types::error::{RadixError, MAX_RADIX, MIN_RADIX};

/// Parse radix text such as `"16"` into a validated radix.
///
/// Surrounding whitespace is ignored.
///
/// # Example
///
/// ```
/// use interp_core::math::radix::parse_base;
///
/// assert_eq!(parse_base("16").unwrap(), 16);
/// assert!(parse_base("1").is_err());
/// assert!(parse_base("hex").is_err());
/// ```
pub fn parse_base(text: &str) -> Result<u32, RadixError> {
    let trimmed = text.trim();
    let radix: u32 = trimmed
        .parse()
        .map_err(|_| RadixError::InvalidBase(trimmed.to_string()))?;
    check_radix(radix)?;
    Ok(radix)
}

/// Decode `value` as an integer in `radix`.
///
/// A single leading `+` or `-` is accepted. Every remaining character must
/// be a digit valid for the radix; there is no whitespace or separator
/// handling.
///
/// # Returns
///
/// * `Ok(BigInt)` - The decoded value
/// * `Err(RadixError::UnsupportedRadix)` - Radix outside 2-36
/// * `Err(RadixError::Empty)` - No digits after the optional sign
/// * `Err(RadixError::InvalidDigit)` - A character is not a digit in `radix`
///
/// # Example
///
/// ```
/// use interp_core::math::radix::parse_radix;
/// use interp_core::types::BigInt;
///
/// assert_eq!(parse_radix("ff", 16).unwrap(), BigInt::from(255));
/// assert_eq!(parse_radix("FF", 16).unwrap(), BigInt::from(255));
/// assert_eq!(parse_radix("101", 2).unwrap(), BigInt::from(5));
/// assert_eq!(parse_radix("-z", 36).unwrap(), BigInt::from(-35));
/// assert!(parse_radix("102", 2).is_err());
/// ```
pub fn parse_radix(value: &str, radix: u32) -> Result<BigInt, RadixError> {
    check_radix(radix)?;

    let (sign, digits_text, offset) = match value.as_bytes().first() {
        Some(b'-') => (Sign::Minus, &value[1..], 1),
        Some(b'+') => (Sign::Plus, &value[1..], 1),
        _ => (Sign::Plus, value, 0),
    };

    if digits_text.is_empty() {
        return Err(RadixError::Empty);
    }

    let digits = digits_text
        .chars()
        .enumerate()
        .map(|(i, c)| {
            c.to_digit(radix)
                .map(|d| d as u8)
                .ok_or(RadixError::InvalidDigit {
                    digit: c,
                    position: i + offset,
                    radix,
                })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    let magnitude =
        BigUint::from_radix_be(&digits, radix).ok_or(RadixError::UnsupportedRadix(radix))?;

    Ok(BigInt::from_biguint(sign, magnitude))
}

/// Decode `value` in the radix given by the decimal text `base`.
///
/// Convenience wrapper combining [`parse_base`] and [`parse_radix`], matching
/// the shape of input records where both fields are strings.
pub fn parse_radix_str(value: &str, base: &str) -> Result<BigInt, RadixError> {
    parse_radix(value, parse_base(base)?)
}

fn check_radix(radix: u32) -> Result<(), RadixError> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(RadixError::UnsupportedRadix(radix))
    }
}

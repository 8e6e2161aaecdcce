//! Exact numerical routines.
//!
//! - `radix`: Arbitrary-precision integer decoding in bases 2-36
//! - `interpolators`: Lagrange interpolation over `BigRational` samples
//! - `decimal`: Fixed-digit decimal rendering of rationals

pub mod decimal;
pub mod interpolators;
pub mod radix;

//! # interp_core: Exact Interpolation Foundation
//!
//! ## Core Layer Role
//!
//! interp_core is the bottom layer of the workspace, providing:
//! - Sample point types: `Point`, `PointSet` (`types::point`)
//! - Arbitrary-radix integer decoding (`math::radix`)
//! - Lagrange interpolation over exact rationals (`math::interpolators`)
//! - Decimal rendering of rationals (`math::decimal`)
//! - Error types: `RadixError`, `InterpolationError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! This layer has no dependencies on other workspace crates, with minimal
//! external dependencies:
//! - num-bigint: Arbitrary-precision integers
//! - num-rational: Exact rational arithmetic (`BigRational`)
//! - num-traits: Numeric identity and sign traits
//! - thiserror: Error derivation
//!
//! ## Exactness
//!
//! Every sample is widened to a `BigRational` before any arithmetic takes
//! place, so division never rounds. The only lossy step is presentation:
//! truncating the result to an integer or to a fixed number of decimals.
//!
//! ## Usage Examples
//!
//! ```rust
//! use interp_core::math::interpolators::quadratic_constant_term;
//! use interp_core::math::radix::parse_radix;
//! use interp_core::types::{BigInt, Point};
//!
//! let points = [
//!     Point::from_integers(1, parse_radix("4", 10).unwrap()),
//!     Point::from_integers(2, parse_radix("111", 2).unwrap()),
//!     Point::from_integers(3, parse_radix("12", 10).unwrap()),
//! ];
//!
//! let c = quadratic_constant_term(&points).unwrap();
//! assert_eq!(c.to_integer(), BigInt::from(3));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;

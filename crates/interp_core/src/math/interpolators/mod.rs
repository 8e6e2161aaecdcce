//! Lagrange interpolation over exact rationals.
//!
//! ## Available Interpolators
//!
//! - [`QuadraticInterpolator`]: Closed-form three-point Lagrange interpolation
//! - [`LagrangeInterpolator`]: General n-point Lagrange interpolation
//!
//! ## Core Trait
//!
//! Both implement the [`Interpolator`] trait, which defines:
//! - `interpolate(x) -> BigRational`: Evaluate the interpolating polynomial
//! - `constant_term() -> BigRational`: Evaluate at x = 0
//! - `degree() -> usize`: Upper bound on the polynomial degree
//!
//! Construction validates the points (enough of them, pairwise-distinct x),
//! so evaluation itself cannot fail.
//!
//! ## Example
//!
//! ```
//! use interp_core::math::interpolators::{Interpolator, QuadraticInterpolator};
//! use interp_core::types::{BigInt, Point};
//!
//! // y = x^2 + 4
//! let points = [
//!     Point::from_integers(1, 5),
//!     Point::from_integers(2, 8),
//!     Point::from_integers(3, 13),
//! ];
//!
//! let interp = QuadraticInterpolator::new(&points).unwrap();
//! assert_eq!(interp.constant_term().to_integer(), BigInt::from(4));
//! ```

mod lagrange;
mod quadratic;
mod traits;

use num_rational::BigRational;

use crate::types::{InterpolationError, Point};

// Re-export public types at module level
pub use lagrange::LagrangeInterpolator;
pub use quadratic::QuadraticInterpolator;
pub use traits::Interpolator;

/// Constant term of the quadratic through the first three points.
///
/// Points beyond the third are ignored.
///
/// # Errors
///
/// * `InterpolationError::InsufficientData` - Fewer than three points
/// * `InterpolationError::DuplicateAbscissa` - Two of the first three share x
pub fn quadratic_constant_term(points: &[Point]) -> Result<BigRational, InterpolationError> {
    Ok(QuadraticInterpolator::new(points)?.constant_term())
}

/// Constant term of the polynomial through every given point.
///
/// # Errors
///
/// * `InterpolationError::InsufficientData` - No points
/// * `InterpolationError::DuplicateAbscissa` - Two points share x
pub fn lagrange_constant_term(points: &[Point]) -> Result<BigRational, InterpolationError> {
    Ok(LagrangeInterpolator::new(points)?.constant_term())
}

/// Reject point slices in which two x-coordinates coincide.
///
/// A repeated abscissa would put a zero in a basis denominator.
pub(crate) fn ensure_distinct_abscissae(points: &[Point]) -> Result<(), InterpolationError> {
    for (i, a) in points.iter().enumerate() {
        for (j, b) in points.iter().enumerate().skip(i + 1) {
            if a.x() == b.x() {
                return Err(InterpolationError::DuplicateAbscissa {
                    first: i,
                    second: j,
                    x: a.x().to_string(),
                });
            }
        }
    }
    Ok(())
}

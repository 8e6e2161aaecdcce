//! Common interface for exact interpolators.

use num_rational::BigRational;
use num_traits::Zero;

/// An interpolating polynomial over exact rational samples.
pub trait Interpolator {
    /// Evaluate the interpolating polynomial at `x`.
    ///
    /// Any rational `x` is accepted; there is no bounded domain.
    fn interpolate(&self, x: &BigRational) -> BigRational;

    /// Upper bound on the degree of the interpolating polynomial.
    fn degree(&self) -> usize;

    /// Value of the polynomial at x = 0.
    fn constant_term(&self) -> BigRational {
        self.interpolate(&BigRational::zero())
    }
}

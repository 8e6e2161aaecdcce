//! General n-point Lagrange interpolation.

use num_rational::BigRational;
use num_traits::{One, Zero};

use super::{ensure_distinct_abscissae, Interpolator};
use crate::types::{InterpolationError, Point};

/// Lagrange interpolator through any number of points.
///
/// Builds the unique polynomial of degree at most `n - 1` through `n`
/// points with pairwise-distinct x. Each basis weight
/// `w_j = y_j / prod_{m != j} (x_j - x_m)` is computed once at construction,
/// so evaluation is a sum of products with no further division.
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::{Interpolator, LagrangeInterpolator};
/// use interp_core::types::{BigInt, Point};
///
/// // y = x^3 - 2x + 7
/// let points: Vec<Point> = (1..=4)
///     .map(|x: i64| Point::from_integers(x, x * x * x - 2 * x + 7))
///     .collect();
///
/// let interp = LagrangeInterpolator::new(&points).unwrap();
/// assert_eq!(interp.degree(), 3);
/// assert_eq!(interp.constant_term().to_integer(), BigInt::from(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LagrangeInterpolator {
    points: Vec<Point>,
    weights: Vec<BigRational>,
}

impl LagrangeInterpolator {
    /// Construct from every point in `points`.
    ///
    /// # Returns
    ///
    /// * `Ok(LagrangeInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InsufficientData)` - No points
    /// * `Err(InterpolationError::DuplicateAbscissa)` - Repeated x
    pub fn new(points: &[Point]) -> Result<Self, InterpolationError> {
        if points.is_empty() {
            return Err(InterpolationError::InsufficientData { got: 0, need: 1 });
        }
        ensure_distinct_abscissae(points)?;

        let weights = points
            .iter()
            .enumerate()
            .map(|(j, pj)| {
                let denom = points
                    .iter()
                    .enumerate()
                    .filter(|&(m, _)| m != j)
                    .fold(BigRational::one(), |acc, (_, pm)| acc * (pj.x() - pm.x()));
                pj.y() / denom
            })
            .collect();

        Ok(Self {
            points: points.to_vec(),
            weights,
        })
    }

    /// Returns the interpolation points in input order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the interpolator has no points.
    /// Note: This is never true for a successfully constructed interpolator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Expand the interpolant into monomial coefficients.
    ///
    /// Index `k` of the result holds the coefficient of `x^k`, so index 0 is
    /// the constant term. The vector always has `len()` entries; leading
    /// coefficients may be zero when the points fit a lower degree.
    pub fn coefficients(&self) -> Vec<BigRational> {
        let n = self.points.len();
        let mut result = vec![BigRational::zero(); n];

        for (j, weight) in self.weights.iter().enumerate() {
            // Basis numerator prod_{m != j} (x - x_m), lowest degree first
            let mut basis = vec![BigRational::one()];
            for (m, pm) in self.points.iter().enumerate() {
                if m == j {
                    continue;
                }
                let mut next = vec![BigRational::zero(); basis.len() + 1];
                for (k, coeff) in basis.iter().enumerate() {
                    next[k] -= coeff * pm.x();
                    next[k + 1] += coeff;
                }
                basis = next;
            }

            for (acc, coeff) in result.iter_mut().zip(basis) {
                *acc += coeff * weight;
            }
        }

        result
    }
}

impl Interpolator for LagrangeInterpolator {
    fn interpolate(&self, x: &BigRational) -> BigRational {
        self.weights
            .iter()
            .enumerate()
            .map(|(j, weight)| {
                self.points
                    .iter()
                    .enumerate()
                    .filter(|&(m, _)| m != j)
                    .fold(weight.clone(), |acc, (_, pm)| acc * (x - pm.x()))
            })
            .fold(BigRational::zero(), |acc, term| acc + term)
    }

    fn degree(&self) -> usize {
        self.points.len() - 1
    }
}

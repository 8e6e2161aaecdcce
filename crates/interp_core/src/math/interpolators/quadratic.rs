//! Closed-form three-point Lagrange interpolation.

use num_rational::BigRational;

use super::{ensure_distinct_abscissae, Interpolator};
use crate::types::{InterpolationError, Point};

/// Number of points a quadratic interpolant consumes.
const QUADRATIC_POINTS: usize = 3;

/// Quadratic interpolator through three points.
///
/// Holds the first three points of its input; any further points are
/// ignored. The x-coordinates must be pairwise distinct.
///
/// # Formula
///
/// ```text
/// C = y0*x1*x2 / ((x0-x1)(x0-x2))
///   + y1*x0*x2 / ((x1-x0)(x1-x2))
///   + y2*x0*x1 / ((x2-x0)(x2-x1))
/// ```
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::{Interpolator, QuadraticInterpolator};
/// use interp_core::types::{BigInt, BigRational, Point};
///
/// // y = 10x^2
/// let points = [
///     Point::from_integers(1, 10),
///     Point::from_integers(2, 40),
///     Point::from_integers(3, 90),
/// ];
/// let interp = QuadraticInterpolator::new(&points).unwrap();
///
/// assert_eq!(interp.constant_term().to_integer(), BigInt::from(0));
/// let at_four = interp.interpolate(&BigRational::from_integer(BigInt::from(4)));
/// assert_eq!(at_four.to_integer(), BigInt::from(160));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuadraticInterpolator {
    points: [Point; QUADRATIC_POINTS],
}

impl QuadraticInterpolator {
    /// Construct from the first three of `points`.
    ///
    /// # Returns
    ///
    /// * `Ok(QuadraticInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 3 points
    /// * `Err(InterpolationError::DuplicateAbscissa)` - Repeated x among the three
    pub fn new(points: &[Point]) -> Result<Self, InterpolationError> {
        let [p0, p1, p2] = match points {
            [p0, p1, p2, ..] => [p0, p1, p2],
            _ => {
                return Err(InterpolationError::InsufficientData {
                    got: points.len(),
                    need: QUADRATIC_POINTS,
                })
            }
        };

        let points = [p0.clone(), p1.clone(), p2.clone()];
        ensure_distinct_abscissae(&points)?;

        Ok(Self { points })
    }

    /// Returns the three interpolation points.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl Interpolator for QuadraticInterpolator {
    fn interpolate(&self, x: &BigRational) -> BigRational {
        let [p0, p1, p2] = &self.points;
        let (x0, y0) = (p0.x(), p0.y());
        let (x1, y1) = (p1.x(), p1.y());
        let (x2, y2) = (p2.x(), p2.y());

        let term0 = y0 * (x - x1) * (x - x2) / ((x0 - x1) * (x0 - x2));
        let term1 = y1 * (x - x0) * (x - x2) / ((x1 - x0) * (x1 - x2));
        let term2 = y2 * (x - x0) * (x - x1) / ((x2 - x0) * (x2 - x1));

        term0 + term1 + term2
    }

    fn degree(&self) -> usize {
        QUADRATIC_POINTS - 1
    }

    fn constant_term(&self) -> BigRational {
        let [p0, p1, p2] = &self.points;
        let (x0, y0) = (p0.x(), p0.y());
        let (x1, y1) = (p1.x(), p1.y());
        let (x2, y2) = (p2.x(), p2.y());

        let term0 = y0 * x1 * x2 / ((x0 - x1) * (x0 - x2));
        let term1 = y1 * x0 * x2 / ((x1 - x0) * (x1 - x2));
        let term2 = y2 * x0 * x1 / ((x2 - x0) * (x2 - x1));

        term0 + term1 + term2
    }
}

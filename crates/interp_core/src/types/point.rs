//! Exact sample points.
//!
//! Both coordinates are held as [`BigRational`] so that interpolation never
//! leaves exact arithmetic.

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;

/// An immutable (x, y) sample.
///
/// # Example
///
/// ```
/// use interp_core::types::{BigInt, Point};
///
/// let p = Point::from_integers(2, 255);
/// assert_eq!(p.x().to_integer(), BigInt::from(2));
/// assert_eq!(p.to_string(), "Point(x=2, y=255)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    x: BigRational,
    y: BigRational,
}

impl Point {
    /// Construct a point from exact rational coordinates.
    pub fn new(x: BigRational, y: BigRational) -> Self {
        Self { x, y }
    }

    /// Construct a point from integer coordinates, widening both to rationals.
    pub fn from_integers(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: BigRational::from_integer(x.into()),
            y: BigRational::from_integer(y.into()),
        }
    }

    /// Returns the x-coordinate.
    #[inline]
    pub fn x(&self) -> &BigRational {
        &self.x
    }

    /// Returns the y-coordinate.
    #[inline]
    pub fn y(&self) -> &BigRational {
        &self.y
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point(x={}, y={})", self.x, self.y.to_integer())
    }
}

/// Ordered sequence of points.
///
/// Insertion order is significance order: interpolators consume a prefix of
/// the set, so the earliest points are the ones that count.
///
/// # Example
///
/// ```
/// use interp_core::types::{Point, PointSet};
///
/// let set: PointSet = (1..=4).map(|x| Point::from_integers(x, x * x)).collect();
/// assert_eq!(set.len(), 4);
/// assert_eq!(set.leading(3).len(), 3);
/// assert_eq!(set.leading(10).len(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Create an empty point set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty point set with room for `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Append a point, preserving input order.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the set holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns all points in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// Returns the first `count` points, or every point if fewer are held.
    pub fn leading(&self, count: usize) -> &[Point] {
        &self.points[..count.min(self.points.len())]
    }

    /// Iterate over points in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
}

impl From<Vec<Point>> for PointSet {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl IntoIterator for PointSet {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

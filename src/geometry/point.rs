//! A 2-dimensional point with NaN-aware equality and hashing.
//!
//! [`Point`] is the coordinate type used for sites, Voronoi nodes, and every
//! intermediate sweep computation. Equality is exact (bit-for-bit up to the
//! semantics of [`OrderedEq`]): the deduplication and degeneracy rules of the
//! tessellation builder rely on exact comparison rather than tolerances, so
//! `Point` deliberately does not implement an epsilon-based `PartialEq`.

use crate::geometry::traits::coordinate::{
    CoordinateScalar, CoordinateValidationError, FiniteCheck, HashCoordinate, OrderedEq,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A point in the Euclidean plane.
///
/// # Examples
///
/// ```
/// use voronoi::geometry::point::Point;
///
/// let p = Point::new(1.5, -2.0);
/// assert_eq!(p.x(), 1.5);
/// assert_eq!(p.y(), -2.0);
/// ```
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Point<T>
where
    T: CoordinateScalar,
{
    /// The x coordinate.
    x: T,
    /// The y coordinate.
    y: T,
}

impl<T> Point<T>
where
    T: CoordinateScalar,
{
    /// Creates a new point from its coordinates.
    #[inline]
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Returns the x coordinate.
    #[inline]
    #[must_use]
    pub const fn x(&self) -> T {
        self.x
    }

    /// Returns the y coordinate.
    #[inline]
    #[must_use]
    pub const fn y(&self) -> T {
        self.y
    }

    /// Validates that both coordinates are finite.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateValidationError::InvalidCoordinate`] naming the
    /// first non-finite coordinate.
    ///
    /// # Examples
    ///
    /// ```
    /// use voronoi::geometry::point::Point;
    ///
    /// assert!(Point::new(1.0, 2.0).validate().is_ok());
    /// assert!(Point::new(f64::NAN, 2.0).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), CoordinateValidationError> {
        for (index, value) in [self.x, self.y].into_iter().enumerate() {
            if !value.is_finite_generic() {
                return Err(CoordinateValidationError::InvalidCoordinate {
                    coordinate_index: index,
                    coordinate_value: format!("{value:?}"),
                });
            }
        }
        Ok(())
    }
}

impl<T> PartialEq for Point<T>
where
    T: CoordinateScalar,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.x.ordered_eq(&other.x) && self.y.ordered_eq(&other.y)
    }
}

impl<T> Eq for Point<T> where T: CoordinateScalar {}

impl<T> Hash for Point<T>
where
    T: CoordinateScalar,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash_scalar(state);
        self.y.hash_scalar(state);
    }
}

impl<T> fmt::Display for Point<T>
where
    T: CoordinateScalar + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T> From<(T, T)> for Point<T>
where
    T: CoordinateScalar,
{
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<[T; 2]> for Point<T>
where
    T: CoordinateScalar,
{
    #[inline]
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<Point<T>> for [T; 2]
where
    T: CoordinateScalar,
{
    #[inline]
    fn from(point: Point<T>) -> Self {
        [point.x, point.y]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn point_accessors() {
        let p = Point::new(3.0_f64, -4.5);
        assert_eq!(p.x(), 3.0);
        assert_eq!(p.y(), -4.5);
    }

    #[test]
    fn exact_equality_is_exact() {
        let a = Point::new(0.1_f64, 0.2);
        let b = Point::new(0.1_f64, 0.2);
        let c = Point::new(0.1_f64 + 1e-12, 0.2);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn nan_points_compare_and_hash_consistently() {
        let a = Point::new(f64::NAN, 1.0);
        let b = Point::new(f64::NAN, 1.0);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn validation_rejects_non_finite() {
        assert!(Point::new(1.0_f64, 1.0).validate().is_ok());

        let err = Point::new(1.0_f64, f64::INFINITY).validate().unwrap_err();
        assert!(matches!(
            err,
            CoordinateValidationError::InvalidCoordinate {
                coordinate_index: 1,
                ..
            }
        ));
    }

    #[test]
    fn conversions_roundtrip() {
        let p: Point<f64> = [1.0, 2.0].into();
        assert_eq!(p, Point::new(1.0, 2.0));
        let coords: [f64; 2] = p.into();
        assert_eq!(coords, [1.0, 2.0]);
        assert_eq!(Point::from((3.0, 4.0)), Point::new(3.0, 4.0));
    }

    #[test]
    fn serde_roundtrip() {
        let p = Point::new(1.25_f64, -7.5);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}

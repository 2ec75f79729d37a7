//! Geometric utility functions for planar calculations.
//!
//! Distances, midpoints, and random point-cloud generation (the latter is used
//! by benchmarks and property tests).

use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::CoordinateScalar;
use rand::Rng;
use rand::distributions::uniform::SampleUniform;

/// Computes the squared Euclidean distance between two points.
///
/// Cheaper than [`distance`] when only comparisons are needed.
#[inline]
#[must_use]
pub fn squared_distance<T>(a: &Point<T>, b: &Point<T>) -> T
where
    T: CoordinateScalar,
{
    let dx = a.x() - b.x();
    let dy = a.y() - b.y();
    dx * dx + dy * dy
}

/// Computes the Euclidean distance between two points.
///
/// Uses the hypot formulation for numerical stability near overflow and
/// underflow.
///
/// # Examples
///
/// ```
/// use voronoi::geometry::point::Point;
/// use voronoi::geometry::util::distance;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert_eq!(distance(&a, &b), 5.0);
/// ```
#[inline]
#[must_use]
pub fn distance<T>(a: &Point<T>, b: &Point<T>) -> T
where
    T: CoordinateScalar,
{
    (a.x() - b.x()).hypot(a.y() - b.y())
}

/// Returns the midpoint of two points.
///
/// # Examples
///
/// ```
/// use voronoi::geometry::point::Point;
/// use voronoi::geometry::util::midpoint;
///
/// let m = midpoint(&Point::new(0.0, 0.0), &Point::new(4.0, 2.0));
/// assert_eq!(m, Point::new(2.0, 1.0));
/// ```
#[inline]
#[must_use]
pub fn midpoint<T>(a: &Point<T>, b: &Point<T>) -> Point<T>
where
    T: CoordinateScalar,
{
    let two = T::one() + T::one();
    Point::new((a.x() + b.x()) / two, (a.y() + b.y()) / two)
}

/// Generates `count` uniformly distributed random points in
/// `[-range, range] x [-range, range]`.
///
/// Intended for benchmarks and property tests; duplicates are possible and
/// left to the tessellation builder's deduplication.
///
/// # Examples
///
/// ```
/// use voronoi::geometry::util::generate_random_points;
///
/// let points = generate_random_points::<f64>(100, 50.0);
/// assert_eq!(points.len(), 100);
/// assert!(points.iter().all(|p| p.x().abs() <= 50.0 && p.y().abs() <= 50.0));
/// ```
#[must_use]
pub fn generate_random_points<T>(count: usize, range: T) -> Vec<Point<T>>
where
    T: CoordinateScalar + SampleUniform,
{
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            let x = rng.gen_range(-range..=range);
            let y = rng.gen_range(-range..=range);
            Point::new(x, y)
        })
        .collect()
}

//! Geometric predicates for the plane.
//!
//! This module contains the sign and circumcircle computations the sweep
//! relies on: triple orientation, circumcenter, and circumradius.
//!
//! All sign tests use exact floating-point comparison. Collinear or coincident
//! inputs are reported as [`Orientation::DEGENERATE`] or
//! [`CircumcenterError::Degenerate`]; callers treat these as ordinary outcomes
//! (a degenerate triple simply cannot produce a circle event), never as
//! failures of the build.

use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::CoordinateScalar;
use crate::geometry::util::distance;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during circumcenter computation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CircumcenterError {
    /// The three points are collinear or not pairwise distinct, so no
    /// circumscribed circle exists.
    #[error("Degenerate point triple: {message}")]
    Degenerate {
        /// Description of the degeneracy.
        message: String,
    },
}

// =============================================================================
// ORIENTATION
// =============================================================================

/// Represents the orientation of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// The triple turns clockwise (negative cross product).
    NEGATIVE,
    /// The triple is collinear (zero cross product).
    DEGENERATE,
    /// The triple turns counter-clockwise (positive cross product).
    POSITIVE,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NEGATIVE => write!(f, "NEGATIVE"),
            Self::DEGENERATE => write!(f, "DEGENERATE"),
            Self::POSITIVE => write!(f, "POSITIVE"),
        }
    }
}

/// Determines the orientation of the ordered triple `(a, b, c)`.
///
/// Computes the sign of the cross product `(b - a) × (c - a)`. The comparison
/// against zero is exact; near-degenerate triples resolve to whichever side
/// the floating-point sign lands on, which keeps builds deterministic.
///
/// # Examples
///
/// ```
/// use voronoi::geometry::point::Point;
/// use voronoi::geometry::predicates::{Orientation, orientation};
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(1.0, 0.0);
/// let c = Point::new(0.0, 1.0);
/// assert_eq!(orientation(&a, &b, &c), Orientation::POSITIVE);
/// assert_eq!(orientation(&a, &c, &b), Orientation::NEGATIVE);
///
/// let mid = Point::new(0.5, 0.0);
/// assert_eq!(orientation(&a, &mid, &b), Orientation::DEGENERATE);
/// ```
#[must_use]
pub fn orientation<T>(a: &Point<T>, b: &Point<T>, c: &Point<T>) -> Orientation
where
    T: CoordinateScalar,
{
    let cross = (b.x() - a.x()) * (c.y() - a.y()) - (b.y() - a.y()) * (c.x() - a.x());
    if cross > T::zero() {
        Orientation::POSITIVE
    } else if cross < T::zero() {
        Orientation::NEGATIVE
    } else {
        Orientation::DEGENERATE
    }
}

// =============================================================================
// CIRCUMCIRCLE
// =============================================================================

/// Computes the circumcenter of three points.
///
/// The circumcenter is the unique point equidistant from all three inputs; it
/// exists iff the points are pairwise distinct and not collinear.
///
/// # Errors
///
/// Returns [`CircumcenterError::Degenerate`] if the points are collinear or
/// not pairwise distinct (the doubled signed area is exactly zero).
///
/// # Examples
///
/// ```
/// use voronoi::geometry::point::Point;
/// use voronoi::geometry::predicates::circumcenter;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(4.0, 0.0);
/// let c = Point::new(0.0, 4.0);
/// let center = circumcenter(&a, &b, &c).unwrap();
/// assert_eq!(center, Point::new(2.0, 2.0));
/// ```
pub fn circumcenter<T>(
    a: &Point<T>,
    b: &Point<T>,
    c: &Point<T>,
) -> Result<Point<T>, CircumcenterError>
where
    T: CoordinateScalar,
{
    let two = T::one() + T::one();
    let d = two * (a.x() * (b.y() - c.y()) + b.x() * (c.y() - a.y()) + c.x() * (a.y() - b.y()));
    if d == T::zero() {
        return Err(CircumcenterError::Degenerate {
            message: format!("collinear or coincident points {a:?}, {b:?}, {c:?}"),
        });
    }

    let a2 = a.x() * a.x() + a.y() * a.y();
    let b2 = b.x() * b.x() + b.y() * b.y();
    let c2 = c.x() * c.x() + c.y() * c.y();

    let ux = (a2 * (b.y() - c.y()) + b2 * (c.y() - a.y()) + c2 * (a.y() - b.y())) / d;
    let uy = (a2 * (c.x() - b.x()) + b2 * (a.x() - c.x()) + c2 * (b.x() - a.x())) / d;

    Ok(Point::new(ux, uy))
}

/// Computes the circumradius of three points.
///
/// # Errors
///
/// Returns [`CircumcenterError::Degenerate`] if the circumcenter does not
/// exist. See [`circumcenter`].
///
/// # Examples
///
/// ```
/// use approx::assert_relative_eq;
/// use voronoi::geometry::point::Point;
/// use voronoi::geometry::predicates::circumradius;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(2.0, 0.0);
/// let c = Point::new(0.0, 2.0);
/// assert_relative_eq!(circumradius(&a, &b, &c).unwrap(), 2.0_f64.sqrt());
/// ```
pub fn circumradius<T>(a: &Point<T>, b: &Point<T>, c: &Point<T>) -> Result<T, CircumcenterError>
where
    T: CoordinateScalar,
{
    let center = circumcenter(a, b, c)?;
    Ok(distance(&center, a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn orientation_sign_convention() {
        let a = Point::new(0.0_f64, 0.0);
        let b = Point::new(2.0, 4.0);
        let c = Point::new(4.0, 0.0);
        // Left-to-right below, apex in the middle: clockwise.
        assert_eq!(
            orientation(&Point::new(0.0, 0.0), &b, &Point::new(4.0, 0.0)),
            Orientation::NEGATIVE
        );
        assert_eq!(orientation(&a, &c, &b), Orientation::POSITIVE);
    }

    #[test]
    fn orientation_collinear_is_degenerate() {
        let a = Point::new(0.0_f64, 0.0);
        let b = Point::new(1.0, 1.0);
        let c = Point::new(5.0, 5.0);
        assert_eq!(orientation(&a, &b, &c), Orientation::DEGENERATE);
    }

    #[test]
    fn orientation_display() {
        assert_eq!(Orientation::POSITIVE.to_string(), "POSITIVE");
        assert_eq!(Orientation::NEGATIVE.to_string(), "NEGATIVE");
        assert_eq!(Orientation::DEGENERATE.to_string(), "DEGENERATE");
    }

    #[test]
    fn circumcenter_of_right_triangle() {
        // The circumcenter of a right triangle is the hypotenuse midpoint.
        let a = Point::new(0.0_f64, 0.0);
        let b = Point::new(6.0, 0.0);
        let c = Point::new(0.0, 8.0);
        let center = circumcenter(&a, &b, &c).unwrap();
        assert_relative_eq!(center.x(), 3.0);
        assert_relative_eq!(center.y(), 4.0);
    }

    #[test]
    fn circumcenter_is_equidistant() {
        let a = Point::new(1.0_f64, 2.0);
        let b = Point::new(5.0, -1.0);
        let c = Point::new(-2.0, 4.0);
        let center = circumcenter(&a, &b, &c).unwrap();
        let da = distance(&center, &a);
        let db = distance(&center, &b);
        let dc = distance(&center, &c);
        assert_relative_eq!(da, db, epsilon = 1e-12);
        assert_relative_eq!(da, dc, epsilon = 1e-12);
    }

    #[test]
    fn circumcenter_rejects_collinear() {
        let a = Point::new(0.0_f64, 0.0);
        let b = Point::new(1.0, 0.0);
        let c = Point::new(2.0, 0.0);
        assert!(matches!(
            circumcenter(&a, &b, &c),
            Err(CircumcenterError::Degenerate { .. })
        ));
    }

    #[test]
    fn circumcenter_rejects_coincident() {
        let a = Point::new(1.0_f64, 1.0);
        let b = Point::new(1.0, 1.0);
        let c = Point::new(2.0, 3.0);
        assert!(circumcenter(&a, &b, &c).is_err());
    }

    #[test]
    fn circumradius_known_value() {
        let a = Point::new(0.0_f64, 0.0);
        let b = Point::new(4.0, 0.0);
        let c = Point::new(2.0, 4.0);
        // Circumcenter (2, 1.5), radius 2.5.
        assert_relative_eq!(circumradius(&a, &b, &c).unwrap(), 2.5);
    }
}

//! Parabola evaluation for the beachline.
//!
//! Each beachline arc is a segment of the parabola equidistant from its focus
//! (a site) and the horizontal directrix (the sweep line). Two operations are
//! needed: evaluating an arc's height at an abscissa, and locating the
//! breakpoint where a left arc hands over to a right arc.
//!
//! The sweep moves toward decreasing y, so the directrix always lies at or
//! below every focus that owns an arc. A focus exactly on the directrix
//! degenerates to a vertical ray; both functions special-case it.

use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::CoordinateScalar;

/// Evaluates the parabola with the given focus and directrix at abscissa `x`.
///
/// For a focus `(fx, fy)` and directrix `y = d` with `fy > d`:
///
/// ```text
/// y(x) = (x - fx)^2 / (2 (fy - d)) + (fy + d) / 2
/// ```
///
/// If the focus lies exactly on the directrix the parabola collapses to a
/// vertical ray; the focus height is returned so callers get a finite anchor.
///
/// # Examples
///
/// ```
/// use voronoi::geometry::parabola::parabola_y;
/// use voronoi::geometry::point::Point;
///
/// let focus = Point::new(0.0, 2.0);
/// // The apex sits midway between focus and directrix.
/// assert_eq!(parabola_y(&focus, 0.0, 0.0), 1.0);
/// assert_eq!(parabola_y(&focus, 2.0, 0.0), 2.0);
/// ```
#[must_use]
pub fn parabola_y<T>(focus: &Point<T>, x: T, directrix: T) -> T
where
    T: CoordinateScalar,
{
    let two = T::one() + T::one();
    let dy = focus.y() - directrix;
    if dy == T::zero() {
        return focus.y();
    }
    let dx = x - focus.x();
    dx * dx / (two * dy) + (focus.y() + directrix) / two
}

/// Returns the abscissa of the breakpoint between a `left` arc and a `right`
/// arc at the given directrix.
///
/// The two parabolas generally intersect twice; the transition from the left
/// site's arc to the right site's arc is the root selected here. Writing
/// `dl = left.y - directrix` and `dr = right.y - directrix`, the breakpoint
/// solves
///
/// ```text
/// (1/dl - 1/dr) x^2 - 2 (lx/dl - rx/dr) x + (lx^2/dl - rx^2/dr - ry + ly) = 0
/// ```
///
/// and taking the `+sqrt` root of the quadratic picks the left-to-right
/// transition for either ordering of the focal heights. Special cases:
///
/// - a site exactly on the directrix owns a vertical zero-width arc, so the
///   breakpoint is pinned to that site's abscissa;
/// - equal focal heights reduce the quadratic to the bisector midpoint.
///
/// # Examples
///
/// ```
/// use voronoi::geometry::parabola::breakpoint_x;
/// use voronoi::geometry::point::Point;
///
/// let upper = Point::new(0.0, 2.0);
/// let lower = Point::new(0.0, 1.0);
/// // The newer (sharper) arc carves the interval (-sqrt 2, sqrt 2) out of
/// // the older one.
/// let xl = breakpoint_x(&upper, &lower, 0.0);
/// let xr = breakpoint_x(&lower, &upper, 0.0);
/// assert!((xl + 2.0_f64.sqrt()).abs() < 1e-12);
/// assert!((xr - 2.0_f64.sqrt()).abs() < 1e-12);
/// ```
#[must_use]
pub fn breakpoint_x<T>(left: &Point<T>, right: &Point<T>, directrix: T) -> T
where
    T: CoordinateScalar,
{
    let two = T::one() + T::one();
    let dl = left.y() - directrix;
    let dr = right.y() - directrix;

    if dl == T::zero() {
        return left.x();
    }
    if dr == T::zero() {
        return right.x();
    }
    if dl == dr {
        return (left.x() + right.x()) / two;
    }

    let a = dl.recip() - dr.recip();
    let b = -two * (left.x() / dl - right.x() / dr);
    let c = left.x() * left.x() / dl - right.x() * right.x() / dr - right.y() + left.y();

    let discriminant = b * b - two * two * a * c;
    // A negative discriminant would mean the parabolas do not intersect, which
    // cannot happen for distinct foci above the directrix; negative values
    // within rounding error of the subtraction are artifacts.
    debug_assert!(discriminant >= -(T::default_tolerance() * (T::one() + b * b)));
    let discriminant = if discriminant < T::zero() {
        T::zero()
    } else {
        discriminant
    };

    (-b + discriminant.sqrt()) / (two * a)
}

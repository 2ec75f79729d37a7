//! Input sites for tessellation construction.
//!
//! A [`Site`] pairs a 2-D point with optional caller data. Sites are the only
//! input to the builder; after construction each distinct site owns exactly
//! one [`VoronoiCell`](crate::core::cell::VoronoiCell), and its data travels
//! into that cell.
//!
//! # Examples
//!
//! ```
//! use voronoi::core::site::Site;
//! use voronoi::site;
//!
//! // A site without data
//! let plain: Site<f64, ()> = site!([1.0, 2.0]);
//!
//! // A site with data
//! let tagged: Site<f64, u32> = site!([1.0, 2.0], 7u32);
//! assert_eq!(tagged.data, Some(7));
//! ```

use crate::core::traits::data_type::DataType;
use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::{CoordinateScalar, CoordinateValidationError};
use serde::{Deserialize, Serialize};

/// Convenience macro for creating sites with less boilerplate.
///
/// Uses the [`SiteBuilder`] pattern internally and unwraps the result; the
/// builder only fails when no point is supplied, which the macro rules out.
///
/// # Usage
///
/// ```
/// use voronoi::core::site::Site;
/// use voronoi::site;
///
/// let s1: Site<f64, ()> = site!([0.0, 1.0]);
/// let s2: Site<f64, i32> = site!([0.0, 1.0], 42);
/// ```
#[macro_export]
macro_rules! site {
    ($coords:expr) => {
        $crate::core::site::SiteBuilder::<_, ()>::default()
            .point($crate::geometry::point::Point::from($coords))
            .build()
            .expect("Failed to build site: builder configuration error")
    };

    ($coords:expr, $data:expr) => {
        $crate::core::site::SiteBuilder::default()
            .point($crate::geometry::point::Point::from($coords))
            .data($data)
            .build()
            .expect("Failed to build site: builder configuration error")
    };
}

// Re-export the macro at the crate level for convenience
pub use crate::site;

/// An input site: a point in the plane plus optional caller data.
///
/// # Generic Parameters
///
/// * `T` - The scalar coordinate type (`f32` or `f64`)
/// * `U` - Caller data type implementing [`DataType`] (use `()` for no data)
#[derive(Builder, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Site<T, U>
where
    T: CoordinateScalar,
    U: DataType,
{
    /// The location of the site.
    point: Point<T>,
    /// Optional data associated with the site; copied into the site's cell
    /// during construction.
    #[builder(setter(into, strip_option), default)]
    pub data: Option<U>,
}

impl<T, U> Site<T, U>
where
    T: CoordinateScalar,
    U: DataType,
{
    /// Creates a site from a point, without data.
    #[inline]
    #[must_use]
    pub const fn from_point(point: Point<T>) -> Self {
        Self { point, data: None }
    }

    /// Returns the site's location.
    #[inline]
    #[must_use]
    pub const fn point(&self) -> Point<T> {
        self.point
    }

    /// Validates the site's coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateValidationError`] if either coordinate is NaN or
    /// infinite.
    pub fn validate(&self) -> Result<(), CoordinateValidationError> {
        self.point.validate()
    }
}

impl<T, U> From<Point<T>> for Site<T, U>
where
    T: CoordinateScalar,
    U: DataType,
{
    #[inline]
    fn from(point: Point<T>) -> Self {
        Self::from_point(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_macro_without_data() {
        let s: Site<f64, ()> = site!([1.0, 2.0]);
        assert_eq!(s.point(), Point::new(1.0, 2.0));
        assert_eq!(s.data, None);
    }

    #[test]
    fn site_macro_with_data() {
        let s: Site<f64, u32> = site!([0.5, -0.5], 11u32);
        assert_eq!(s.point(), Point::new(0.5, -0.5));
        assert_eq!(s.data, Some(11));
    }

    #[test]
    fn site_builder_requires_point() {
        let result = SiteBuilder::<f64, ()>::default().build();
        assert!(result.is_err());
    }

    #[test]
    fn site_from_point() {
        let s: Site<f64, ()> = Point::new(4.0, 5.0).into();
        assert_eq!(s.point(), Point::new(4.0, 5.0));
        assert!(s.validate().is_ok());
    }

    #[test]
    fn site_validation_rejects_nan() {
        let s: Site<f64, ()> = Site::from_point(Point::new(f64::NAN, 0.0));
        assert!(s.validate().is_err());
    }

    #[test]
    fn site_serde_roundtrip() {
        let s: Site<f64, u8> = site!([2.0, 3.0], 9);
        let json = serde_json::to_string(&s).unwrap();
        let back: Site<f64, u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}

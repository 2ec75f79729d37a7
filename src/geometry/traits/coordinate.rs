//! Coordinate abstractions for 2-dimensional geometry.
//!
//! This module contains the [`CoordinateScalar`] trait that bounds the scalar
//! type used throughout the crate, along with supporting traits for validation
//! ([`FiniteCheck`]), NaN-aware equality ([`OrderedEq`]), and hashing
//! ([`HashCoordinate`]) of floating-point coordinate values.
//!
//! The sweep-line algorithm orders events and compares breakpoints with plain
//! floating-point comparisons, so every coordinate entering a build is
//! validated to be finite up front; [`CoordinateValidationError`] reports the
//! offending value.

use num_traits::Float;
use serde::{Serialize, de::DeserializeOwned};
use std::fmt::Debug;
use std::hash::Hasher;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during coordinate validation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CoordinateValidationError {
    /// A coordinate value is invalid (NaN or infinite).
    #[error("Invalid coordinate at index {coordinate_index}: {coordinate_value}")]
    InvalidCoordinate {
        /// Index of the invalid coordinate (0 for x, 1 for y).
        coordinate_index: usize,
        /// Value of the invalid coordinate, as a string.
        coordinate_value: String,
    },
}

/// Default tolerance for f32 floating-point comparisons.
pub const DEFAULT_TOLERANCE_F32: f32 = 1e-6;

/// Default tolerance for f64 floating-point comparisons.
pub const DEFAULT_TOLERANCE_F64: f64 = 1e-15;

// =============================================================================
// SUPPORTING TRAITS
// =============================================================================

/// Helper trait for checking finiteness of coordinates.
///
/// # Examples
///
/// ```
/// use voronoi::geometry::traits::coordinate::FiniteCheck;
///
/// assert!(3.14f64.is_finite_generic());
/// assert!(!f64::NAN.is_finite_generic());
/// assert!(!f64::INFINITY.is_finite_generic());
/// ```
pub trait FiniteCheck {
    /// Returns true if the value is finite (not NaN or infinite).
    fn is_finite_generic(&self) -> bool;
}

macro_rules! impl_finite_check {
    ($($t:ty),*) => {
        $(
            impl FiniteCheck for $t {
                #[inline(always)]
                fn is_finite_generic(&self) -> bool {
                    self.is_finite()
                }
            }
        )*
    };
}

impl_finite_check!(f32, f64);

/// Helper trait for equality comparison that handles NaN properly.
///
/// Unlike the default floating-point equality where `NaN != NaN`, ordered
/// equality treats NaN values as equal to themselves, which keeps point
/// deduplication and hashing consistent.
///
/// # Examples
///
/// ```
/// use voronoi::geometry::traits::coordinate::OrderedEq;
///
/// assert!(1.0f64.ordered_eq(&1.0f64));
/// assert!(!1.0f64.ordered_eq(&2.0f64));
/// assert!(f64::NAN.ordered_eq(&f64::NAN));
/// assert!(0.0f64.ordered_eq(&(-0.0f64)));
/// ```
pub trait OrderedEq {
    /// Compares two values for equality using ordered comparison semantics.
    fn ordered_eq(&self, other: &Self) -> bool;
}

macro_rules! impl_ordered_eq {
    ($($t:ty),*) => {
        $(
            impl OrderedEq for $t {
                #[inline(always)]
                fn ordered_eq(&self, other: &Self) -> bool {
                    (self.is_nan() && other.is_nan()) || self == other
                }
            }
        )*
    };
}

impl_ordered_eq!(f32, f64);

/// Helper trait for hashing individual coordinates of non-hashable types like
/// f32 and f64.
///
/// Hashing is consistent with [`OrderedEq`]: all NaN payloads hash alike, and
/// `0.0` and `-0.0` hash alike.
///
/// # Examples
///
/// ```
/// use voronoi::geometry::traits::coordinate::HashCoordinate;
/// use std::collections::hash_map::DefaultHasher;
/// use std::hash::Hasher;
///
/// let mut h1 = DefaultHasher::new();
/// let mut h2 = DefaultHasher::new();
/// 0.0f64.hash_scalar(&mut h1);
/// (-0.0f64).hash_scalar(&mut h2);
/// assert_eq!(h1.finish(), h2.finish());
/// ```
pub trait HashCoordinate {
    /// Hashes a single coordinate value using the provided hasher.
    fn hash_scalar<H: Hasher>(&self, state: &mut H);
}

macro_rules! impl_hash_coordinate {
    ($($t:ty),*) => {
        $(
            impl HashCoordinate for $t {
                #[inline(always)]
                fn hash_scalar<H: Hasher>(&self, state: &mut H) {
                    // Canonicalize NaN and signed zero so hashing agrees with
                    // ordered equality.
                    let canonical = if self.is_nan() {
                        <$t>::NAN
                    } else if *self == 0.0 {
                        0.0
                    } else {
                        *self
                    };
                    state.write(&canonical.to_bits().to_le_bytes());
                }
            }
        )*
    };
}

impl_hash_coordinate!(f32, f64);

// =============================================================================
// COORDINATE SCALAR
// =============================================================================

/// The scalar type used for coordinates throughout the crate.
///
/// This trait collects the floating-point, validation, equality, hashing, and
/// serialization bounds the sweep requires, so generic code can take a single
/// `T: CoordinateScalar` bound. Implemented for `f32` and `f64`.
///
/// # Examples
///
/// ```
/// use voronoi::geometry::traits::coordinate::CoordinateScalar;
///
/// fn compare_with_tolerance<T: CoordinateScalar>(a: T, b: T) -> bool {
///     (a - b).abs() < T::default_tolerance()
/// }
///
/// assert!(compare_with_tolerance(1.0f64, 1.0 + 1e-16));
/// assert_eq!(f32::default_tolerance(), 1e-6_f32);
/// ```
pub trait CoordinateScalar:
    Float + OrderedEq + HashCoordinate + FiniteCheck + Default + Debug + Serialize + DeserializeOwned
{
    /// Returns the appropriate default tolerance for this coordinate scalar
    /// type: `1e-6` for `f32`, `1e-15` for `f64`.
    fn default_tolerance() -> Self;
}

impl CoordinateScalar for f32 {
    fn default_tolerance() -> Self {
        DEFAULT_TOLERANCE_F32
    }
}

impl CoordinateScalar for f64 {
    fn default_tolerance() -> Self {
        DEFAULT_TOLERANCE_F64
    }
}

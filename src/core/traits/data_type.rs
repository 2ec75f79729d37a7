//! Data type traits for tessellation structures.
//!
//! Trait definitions for the caller-supplied data that can be attached to
//! sites, cells, edges, nodes, and triangles.

use serde::{Serialize, de::DeserializeOwned};
use std::{fmt::Debug, hash::Hash};

/// Trait alias for data types attachable to tessellation entities.
///
/// Data must be `Copy` so entities stay cheaply clonable and the builder can
/// move sites around during normalization without ownership complications.
/// Use `()` when no data is needed.
///
/// # Examples
///
/// ```
/// use voronoi::core::traits::data_type::DataType;
///
/// fn accepts_data<D: DataType>(_data: D) {}
///
/// accepts_data(42_u32);
/// accepts_data(());
/// accepts_data('x');
/// ```
///
/// `String` does not qualify (not `Copy`); use numeric identifiers with an
/// external lookup table for string-like payloads.
pub trait DataType:
    Copy + Eq + Hash + Ord + PartialEq + PartialOrd + Debug + Serialize + DeserializeOwned
{
}

impl<T> DataType for T where
    T: Copy + Eq + Hash + Ord + PartialEq + PartialOrd + Debug + Serialize + DeserializeOwned
{
}

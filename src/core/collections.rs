//! Collection types used by the tessellation data structures.
//!
//! Thin aliases so call sites say what they mean instead of naming concrete
//! hasher or storage types.

use rustc_hash::{FxHashMap, FxHashSet};
use slotmap::SlotMap;
use smallvec::SmallVec;

/// Internal storage backend for tessellation entities.
///
/// Keys are generated with `slotmap::new_key_type!` and remain stable for the
/// lifetime of the tessellation.
pub type StorageMap<K, V> = SlotMap<K, V>;

/// Optimized `HashMap` for performance-critical bookkeeping.
///
/// Uses the FxHash algorithm, which is faster than the default SipHash when
/// HashDoS resistance is not required (keys here are arena keys, not
/// attacker-controlled data).
pub type FastHashMap<K, V> = FxHashMap<K, V>;

/// Optimized `HashSet` counterpart of [`FastHashMap`].
pub type FastHashSet<T> = FxHashSet<T>;

/// A stack-allocated buffer that spills to the heap past `N` elements.
///
/// Voronoi cells touch about six edges on average (and rarely more than
/// eight), so per-cell edge lists almost never allocate.
pub type SmallBuffer<T, const N: usize> = SmallVec<[T; N]>;

/// Inline capacity for a cell's incident-edge list.
pub const CELL_EDGE_INLINE_CAPACITY: usize = 8;

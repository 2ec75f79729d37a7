//! Delaunay triangles, the dual of circle events.
//!
//! Each processed circle event corresponds to one triangle whose vertices are
//! the three sites whose arcs met at the event's circumcenter. Triangles are
//! only collected when triangulation output is requested.

use crate::core::tessellation::CellKey;
use crate::core::traits::data_type::DataType;
use serde::{Deserialize, Serialize};

/// One Delaunay triangle, referencing the three cells whose sites are its
/// vertices.
///
/// # Generic Parameters
///
/// * `V` - Caller data type for post-build annotation
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Triangle<V>
where
    V: DataType,
{
    /// The three cells, in beachline order (left, middle, right) at the
    /// moment the circle event was scheduled.
    cells: [CellKey; 3],
    /// Optional caller-assigned data.
    pub data: Option<V>,
}

impl<V> Triangle<V>
where
    V: DataType,
{
    pub(crate) fn new(cells: [CellKey; 3]) -> Self {
        debug_assert!(
            cells[0] != cells[1] && cells[1] != cells[2] && cells[0] != cells[2],
            "triangle vertices must be distinct cells"
        );
        Self { cells, data: None }
    }

    /// Returns the key of the first vertex cell.
    #[inline]
    #[must_use]
    pub const fn cell1(&self) -> CellKey {
        self.cells[0]
    }

    /// Returns the key of the second vertex cell.
    #[inline]
    #[must_use]
    pub const fn cell2(&self) -> CellKey {
        self.cells[1]
    }

    /// Returns the key of the third vertex cell.
    #[inline]
    #[must_use]
    pub const fn cell3(&self) -> CellKey {
        self.cells[2]
    }

    /// Returns the three vertex cells as an array.
    #[inline]
    #[must_use]
    pub const fn cells(&self) -> [CellKey; 3] {
        self.cells
    }

    /// Returns `true` if `cell` is one of this triangle's vertices.
    #[must_use]
    pub fn has_vertex(&self, cell: CellKey) -> bool {
        self.cells.contains(&cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn triangle_accessors() {
        let mut cells: SlotMap<CellKey, ()> = SlotMap::with_key();
        let (a, b, c, d) = (
            cells.insert(()),
            cells.insert(()),
            cells.insert(()),
            cells.insert(()),
        );

        let tri: Triangle<()> = Triangle::new([a, b, c]);
        assert_eq!(tri.cell1(), a);
        assert_eq!(tri.cell2(), b);
        assert_eq!(tri.cell3(), c);
        assert_eq!(tri.cells(), [a, b, c]);
        assert!(tri.has_vertex(b));
        assert!(!tri.has_vertex(d));
    }
}

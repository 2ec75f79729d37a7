//! Data and operations on Voronoi cells.
//!
//! A [`VoronoiCell`] is the region of the plane closer to its site than to any
//! other site. Cells are created once per distinct input site before the sweep
//! begins; the only mutation they ever see is edge attachment (during the
//! sweep) and detachment (degenerate-edge cleanup), after which the
//! tessellation is immutable.

use crate::core::collections::{CELL_EDGE_INLINE_CAPACITY, SmallBuffer};
use crate::core::tessellation::EdgeKey;
use crate::core::traits::data_type::DataType;
use crate::core::util::make_uuid;
use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::CoordinateScalar;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One Voronoi region, owned by a single site.
///
/// # Generic Parameters
///
/// * `T` - The scalar coordinate type
/// * `U` - Caller data type (flows in from the originating
///   [`Site`](crate::core::site::Site))
///
/// # Invariants
///
/// Every edge key in the cell's edge list references an edge that names this
/// cell as one of its two sides; the
/// [`Tessellation::validate_edge_sharing`](crate::core::tessellation::Tessellation::validate_edge_sharing)
/// helper checks this.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct VoronoiCell<T, U>
where
    T: CoordinateScalar,
    U: DataType,
{
    /// The site this cell belongs to.
    point: Point<T>,
    /// A universally unique identifier for the cell, stable across
    /// serialization round-trips (arena keys are not).
    uuid: Uuid,
    /// Keys of the edges bounding this cell, in creation order.
    edges: SmallBuffer<EdgeKey, CELL_EDGE_INLINE_CAPACITY>,
    /// Optional data carried over from the input site.
    pub data: Option<U>,
}

impl<T, U> VoronoiCell<T, U>
where
    T: CoordinateScalar,
    U: DataType,
{
    /// Creates a cell for a site with no incident edges yet.
    pub(crate) fn new(point: Point<T>, data: Option<U>) -> Self {
        Self {
            point,
            uuid: make_uuid(),
            edges: SmallBuffer::new(),
            data,
        }
    }

    /// Returns the data point (site) that owns this cell.
    #[inline]
    #[must_use]
    pub const fn point(&self) -> Point<T> {
        self.point
    }

    /// Returns the cell's UUID.
    #[inline]
    #[must_use]
    pub const fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Returns the keys of the edges bounding this cell.
    #[inline]
    #[must_use]
    pub fn edges(&self) -> &[EdgeKey] {
        &self.edges
    }

    /// Attaches an edge to this cell.
    pub(crate) fn attach_edge(&mut self, edge: EdgeKey) {
        self.edges.push(edge);
    }

    /// Detaches an edge from this cell, if present.
    pub(crate) fn detach_edge(&mut self, edge: EdgeKey) {
        self.edges.retain(|&mut e| e != edge);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn new_cell_has_no_edges_and_valid_uuid() {
        let cell: VoronoiCell<f64, ()> = VoronoiCell::new(Point::new(1.0, 2.0), None);
        assert!(cell.edges().is_empty());
        assert_eq!(cell.point(), Point::new(1.0, 2.0));
        assert!(crate::core::util::validate_uuid(&cell.uuid()).is_ok());
    }

    #[test]
    fn attach_and_detach_edges() {
        let mut slots: SlotMap<EdgeKey, ()> = SlotMap::with_key();
        let e1 = slots.insert(());
        let e2 = slots.insert(());

        let mut cell: VoronoiCell<f64, u32> = VoronoiCell::new(Point::new(0.0, 0.0), Some(5));
        cell.attach_edge(e1);
        cell.attach_edge(e2);
        assert_eq!(cell.edges(), &[e1, e2]);

        cell.detach_edge(e1);
        assert_eq!(cell.edges(), &[e2]);

        // Detaching an absent edge is a no-op.
        cell.detach_edge(e1);
        assert_eq!(cell.edges(), &[e2]);
    }

    #[test]
    fn cell_data_flows_from_site() {
        let cell: VoronoiCell<f64, char> = VoronoiCell::new(Point::new(3.0, 4.0), Some('a'));
        assert_eq!(cell.data, Some('a'));
    }
}

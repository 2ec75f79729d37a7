//! Data and operations on Voronoi edges.
//!
//! A [`VoronoiEdge`] is a segment of the perpendicular bisector between two
//! sites, bounded by two [`VoronoiNode`](crate::core::node::VoronoiNode)s.
//! Both endpoints of a finite edge lie on that bisector; an edge is infinite
//! iff either of its nodes is an open ray endpoint, a predicate derived via
//! [`Tessellation::is_edge_infinite`](crate::core::tessellation::Tessellation::is_edge_infinite).

use crate::core::tessellation::{CellKey, NodeKey};
use crate::core::traits::data_type::DataType;
use serde::{Deserialize, Serialize};

/// A bisector segment between exactly two cells.
///
/// # Generic Parameters
///
/// * `V` - Caller data type for post-build annotation
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct VoronoiEdge<V>
where
    V: DataType,
{
    /// The cell on one side of the bisector.
    cell1: CellKey,
    /// The cell on the other side; always distinct from `cell1`.
    cell2: CellKey,
    /// First endpoint.
    node1: NodeKey,
    /// Second endpoint.
    node2: NodeKey,
    /// Optional caller-assigned data.
    pub data: Option<V>,
}

impl<V> VoronoiEdge<V>
where
    V: DataType,
{
    pub(crate) fn new(cell1: CellKey, cell2: CellKey, node1: NodeKey, node2: NodeKey) -> Self {
        debug_assert_ne!(cell1, cell2, "an edge must separate two distinct cells");
        Self {
            cell1,
            cell2,
            node1,
            node2,
            data: None,
        }
    }

    /// Returns the key of the first adjacent cell.
    #[inline]
    #[must_use]
    pub const fn cell1(&self) -> CellKey {
        self.cell1
    }

    /// Returns the key of the second adjacent cell.
    #[inline]
    #[must_use]
    pub const fn cell2(&self) -> CellKey {
        self.cell2
    }

    /// Returns the key of the first endpoint node.
    #[inline]
    #[must_use]
    pub const fn node1(&self) -> NodeKey {
        self.node1
    }

    /// Returns the key of the second endpoint node.
    #[inline]
    #[must_use]
    pub const fn node2(&self) -> NodeKey {
        self.node2
    }

    /// Returns `true` if `cell` is one of this edge's two sides.
    #[inline]
    #[must_use]
    pub fn touches_cell(&self, cell: CellKey) -> bool {
        self.cell1 == cell || self.cell2 == cell
    }

    /// Returns the cell opposite to `cell` across this edge, or `None` if the
    /// edge does not touch `cell`.
    #[must_use]
    pub fn opposite_cell(&self, cell: CellKey) -> Option<CellKey> {
        if cell == self.cell1 {
            Some(self.cell2)
        } else if cell == self.cell2 {
            Some(self.cell1)
        } else {
            None
        }
    }
}

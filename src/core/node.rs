//! Data and operations on Voronoi nodes.
//!
//! A [`VoronoiNode`] is an edge endpoint. Nodes start life as infinite
//! placeholders while their breakpoint is still being traced by the sweep;
//! a circle event pins a node to the circumcenter and clears the infinite
//! flag, after which the position never changes. Nodes that are never pinned
//! remain infinite: finalization assigns them a concrete far point along the
//! open ray (well outside the data's bounding box), but `is_infinite()` stays
//! `true` so consumers can distinguish rays from true vertices.

use crate::core::traits::data_type::DataType;
use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::CoordinateScalar;
use serde::{Deserialize, Serialize};

/// An endpoint of a Voronoi edge.
///
/// # Generic Parameters
///
/// * `T` - The scalar coordinate type
/// * `V` - Caller data type for post-build annotation
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct VoronoiNode<T, V>
where
    T: CoordinateScalar,
    V: DataType,
{
    /// The node's position: a true vertex for finite nodes, the finalized far
    /// point for rays.
    position: Point<T>,
    /// Whether this node is the open end of a ray.
    infinite: bool,
    /// Optional caller-assigned data.
    pub data: Option<V>,
}

impl<T, V> VoronoiNode<T, V>
where
    T: CoordinateScalar,
    V: DataType,
{
    /// Creates an infinite placeholder node anchored at `position`.
    pub(crate) fn open(position: Point<T>) -> Self {
        Self {
            position,
            infinite: true,
            data: None,
        }
    }

    /// Creates a finite node at `position`.
    pub(crate) fn fixed(position: Point<T>) -> Self {
        Self {
            position,
            infinite: false,
            data: None,
        }
    }

    /// Pins the node to a circle-event circumcenter, making it finite.
    pub(crate) fn pin(&mut self, position: Point<T>) {
        debug_assert!(self.infinite, "a finite node must never move");
        self.position = position;
        self.infinite = false;
    }

    /// Moves a still-open ray endpoint to its finalized far point.
    pub(crate) fn set_far_point(&mut self, position: Point<T>) {
        debug_assert!(self.infinite, "only open rays receive far points");
        self.position = position;
    }

    /// Returns the node's position.
    ///
    /// Always valid: for a still-open ray this is the finalized far point,
    /// not a mathematical infinity.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Point<T> {
        self.position
    }

    /// Returns `true` if this node is the open end of a ray.
    #[inline]
    #[must_use]
    pub const fn is_infinite(&self) -> bool {
        self.infinite
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_node_reports_infinite() {
        let node: VoronoiNode<f64, ()> = VoronoiNode::open(Point::new(1.0, 1.0));
        assert!(node.is_infinite());
        assert_eq!(node.position(), Point::new(1.0, 1.0));
    }

    #[test]
    fn pinning_fixes_position_and_flag() {
        let mut node: VoronoiNode<f64, ()> = VoronoiNode::open(Point::new(0.0, 0.0));
        node.pin(Point::new(2.0, 3.0));
        assert!(!node.is_infinite());
        assert_eq!(node.position(), Point::new(2.0, 3.0));
    }

    #[test]
    fn far_point_keeps_infinite_flag() {
        let mut node: VoronoiNode<f64, ()> = VoronoiNode::open(Point::new(5.0, 5.0));
        node.set_far_point(Point::new(5.0, -100.0));
        assert!(node.is_infinite());
        assert_eq!(node.position(), Point::new(5.0, -100.0));
    }

    #[test]
    fn fixed_node_is_finite() {
        let node: VoronoiNode<f64, u8> = VoronoiNode::fixed(Point::new(-1.0, 4.0));
        assert!(!node.is_infinite());
    }
}

//! The tessellation data structure: the permanent, queryable result of a
//! build.
//!
//! A [`Tessellation`] owns arenas of [`VoronoiCell`]s, [`VoronoiEdge`]s, and
//! [`VoronoiNode`]s, plus the ordered list of Delaunay [`Triangle`]s when
//! triangulation output was requested. Entities reference each other through
//! stable arena keys ([`CellKey`], [`EdgeKey`], [`NodeKey`]); cells carry a
//! UUID for identity that survives serialization.
//!
//! After construction the graph is immutable except for the caller-assigned
//! `data` payloads reachable through the `*_mut` accessors.
//!
//! # Examples
//!
//! ```
//! use voronoi::prelude::*;
//!
//! let sites: Vec<Site<f64, ()>> = vec![
//!     site!([0.0, 0.0]),
//!     site!([4.0, 0.0]),
//!     site!([2.0, 4.0]),
//! ];
//! let tessellation: Tessellation<f64, (), ()> =
//!     Tessellation::with_triangles(&sites).unwrap();
//!
//! assert_eq!(tessellation.number_of_cells(), 3);
//! assert_eq!(tessellation.number_of_edges(), 3);
//! assert_eq!(tessellation.triangles().len(), 1);
//! assert!(tessellation.is_valid().is_ok());
//! ```

use crate::core::builder::FortuneSweep;
use crate::core::cell::VoronoiCell;
use crate::core::collections::{FastHashMap, StorageMap};
use crate::core::edge::VoronoiEdge;
use crate::core::node::VoronoiNode;
use crate::core::site::Site;
use crate::core::traits::data_type::DataType;
use crate::core::triangle::Triangle;
use crate::geometry::point::Point;
use crate::geometry::predicates::{CircumcenterError, circumcenter};
use crate::geometry::traits::coordinate::{CoordinateScalar, CoordinateValidationError};
use crate::geometry::util::distance;
use serde::{Deserialize, Serialize};
use slotmap::new_key_type;
use thiserror::Error;

// =============================================================================
// KEY TYPES
// =============================================================================

new_key_type! {
    /// Key type for accessing cells in the storage map.
    pub struct CellKey;
}

new_key_type! {
    /// Key type for accessing edges in the storage map.
    pub struct EdgeKey;
}

new_key_type! {
    /// Key type for accessing nodes in the storage map.
    pub struct NodeKey;
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during tessellation construction.
///
/// Construction either succeeds completely or fails with one of these; no
/// partial result is ever returned.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TessellationConstructionError {
    /// Fewer than 3 distinct sites remained after deduplication. A Voronoi
    /// diagram over 0-2 sites is not defined in this design.
    #[error("Insufficient distinct sites for a tessellation: need at least 3, found {found}")]
    InsufficientPoints {
        /// The number of distinct sites found.
        found: usize,
    },
    /// An input site has a NaN or infinite coordinate.
    #[error("Invalid site at input index {index}: {source}")]
    InvalidSite {
        /// The index of the offending site in the input sequence.
        index: usize,
        /// The underlying coordinate validation error.
        source: CoordinateValidationError,
    },
}

/// Errors that can occur during tessellation validation (post-construction).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TessellationValidationError {
    /// An entity references a key that does not resolve in its arena.
    #[error("Mapping inconsistency: {message}")]
    MappingInconsistency {
        /// Description of the dangling reference.
        message: String,
    },
    /// An edge violates the two-distinct-cells / exactly-two-owners rule.
    #[error("Edge sharing violation: {message}")]
    EdgeSharingViolation {
        /// Description of the sharing failure.
        message: String,
    },
    /// A finite edge node is not equidistant from the edge's two sites.
    #[error("Bisector violation: {message}")]
    BisectorViolation {
        /// Description of the equidistance failure.
        message: String,
    },
    /// A triangle's circumcircle strictly contains another site.
    #[error("Delaunay violation: {message}")]
    DelaunayViolation {
        /// Description of the empty-circle failure.
        message: String,
    },
    /// A triangle references collinear or coincident sites.
    #[error("Degenerate triangle: {source}")]
    DegenerateTriangle {
        /// The underlying circumcenter error.
        #[from]
        source: CircumcenterError,
    },
}

// =============================================================================
// TESSELLATION
// =============================================================================

/// An immutable Voronoi tessellation with optional Delaunay triangulation.
///
/// # Generic Parameters
///
/// * `T` - The scalar coordinate type (`f32` or `f64`)
/// * `U` - Data type attached to sites/cells (use `()` for none)
/// * `V` - Data type attachable to edges, nodes, and triangles
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Tessellation<T, U, V>
where
    T: CoordinateScalar,
    U: DataType,
    V: DataType,
{
    cells: StorageMap<CellKey, VoronoiCell<T, U>>,
    edges: StorageMap<EdgeKey, VoronoiEdge<V>>,
    nodes: StorageMap<NodeKey, VoronoiNode<T, V>>,
    triangles: Vec<Triangle<V>>,
    bounds: (Point<T>, Point<T>),
}

impl<T, U, V> Tessellation<T, U, V>
where
    T: CoordinateScalar,
    U: DataType,
    V: DataType,
{
    /// Builds the Voronoi tessellation of the given sites.
    ///
    /// Sites are deduplicated with exact equality; each distinct site yields
    /// exactly one cell. Delaunay triangles are not collected; use
    /// [`Tessellation::with_triangles`] for the dual triangulation.
    ///
    /// # Errors
    ///
    /// - [`TessellationConstructionError::InvalidSite`] if a coordinate is
    ///   NaN or infinite.
    /// - [`TessellationConstructionError::InsufficientPoints`] if fewer than
    ///   3 distinct sites remain after deduplication.
    ///
    /// # Examples
    ///
    /// ```
    /// use voronoi::prelude::*;
    ///
    /// let sites: Vec<Site<f64, ()>> =
    ///     vec![site!([0.0, 0.0]), site!([1.0, 0.0]), site!([0.0, 1.0])];
    /// let tessellation: Tessellation<f64, (), ()> = Tessellation::new(&sites).unwrap();
    /// assert_eq!(tessellation.number_of_cells(), 3);
    /// assert!(tessellation.triangles().is_empty());
    /// ```
    pub fn new(sites: &[Site<T, U>]) -> Result<Self, TessellationConstructionError> {
        FortuneSweep::run(sites, false)
    }

    /// Builds the Voronoi tessellation and collects the dual Delaunay
    /// triangulation.
    ///
    /// # Errors
    ///
    /// Same as [`Tessellation::new`].
    pub fn with_triangles(sites: &[Site<T, U>]) -> Result<Self, TessellationConstructionError> {
        FortuneSweep::run(sites, true)
    }

    /// Builds a tessellation from bare points (no site data).
    ///
    /// # Errors
    ///
    /// Same as [`Tessellation::new`].
    pub fn from_points(points: &[Point<T>]) -> Result<Self, TessellationConstructionError> {
        let sites: Vec<Site<T, U>> = points.iter().map(|&p| Site::from_point(p)).collect();
        Self::new(&sites)
    }

    pub(crate) fn from_parts(
        cells: StorageMap<CellKey, VoronoiCell<T, U>>,
        edges: StorageMap<EdgeKey, VoronoiEdge<V>>,
        nodes: StorageMap<NodeKey, VoronoiNode<T, V>>,
        triangles: Vec<Triangle<V>>,
        bounds: (Point<T>, Point<T>),
    ) -> Self {
        Self {
            cells,
            edges,
            nodes,
            triangles,
            bounds,
        }
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Iterates over all cells with their keys.
    pub fn cells(&self) -> impl Iterator<Item = (CellKey, &VoronoiCell<T, U>)> {
        self.cells.iter()
    }

    /// Iterates over all edges with their keys.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeKey, &VoronoiEdge<V>)> {
        self.edges.iter()
    }

    /// Iterates over all nodes with their keys.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeKey, &VoronoiNode<T, V>)> {
        self.nodes.iter()
    }

    /// The Delaunay triangles, in circle-event processing order.
    ///
    /// Empty unless the tessellation was built with
    /// [`Tessellation::with_triangles`].
    #[must_use]
    pub fn triangles(&self) -> &[Triangle<V>] {
        &self.triangles
    }

    /// Looks up a cell by key.
    #[must_use]
    pub fn cell(&self, key: CellKey) -> Option<&VoronoiCell<T, U>> {
        self.cells.get(key)
    }

    /// Looks up an edge by key.
    #[must_use]
    pub fn edge(&self, key: EdgeKey) -> Option<&VoronoiEdge<V>> {
        self.edges.get(key)
    }

    /// Looks up a node by key.
    #[must_use]
    pub fn node(&self, key: NodeKey) -> Option<&VoronoiNode<T, V>> {
        self.nodes.get(key)
    }

    /// Mutable cell access, for attaching caller data.
    #[must_use]
    pub fn cell_mut(&mut self, key: CellKey) -> Option<&mut VoronoiCell<T, U>> {
        self.cells.get_mut(key)
    }

    /// Mutable edge access, for attaching caller data.
    #[must_use]
    pub fn edge_mut(&mut self, key: EdgeKey) -> Option<&mut VoronoiEdge<V>> {
        self.edges.get_mut(key)
    }

    /// Mutable node access, for attaching caller data.
    #[must_use]
    pub fn node_mut(&mut self, key: NodeKey) -> Option<&mut VoronoiNode<T, V>> {
        self.nodes.get_mut(key)
    }

    /// Mutable triangle access, for attaching caller data.
    #[must_use]
    pub fn triangle_mut(&mut self, index: usize) -> Option<&mut Triangle<V>> {
        self.triangles.get_mut(index)
    }

    /// The number of cells (equals the number of distinct input sites).
    #[must_use]
    pub fn number_of_cells(&self) -> usize {
        self.cells.len()
    }

    /// The number of edges.
    #[must_use]
    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    /// The number of nodes.
    #[must_use]
    pub fn number_of_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// The axis-aligned bounding box of the distinct input sites, as
    /// `(min_corner, max_corner)`.
    #[must_use]
    pub const fn bounding_box(&self) -> (Point<T>, Point<T>) {
        self.bounds
    }

    // =========================================================================
    // DERIVED PREDICATES
    // =========================================================================

    /// Returns `true` if the edge has at least one open (ray) endpoint.
    ///
    /// Derived, not stored. Returns `false` for a key that does not resolve.
    #[must_use]
    pub fn is_edge_infinite(&self, key: EdgeKey) -> bool {
        self.edges.get(key).is_some_and(|edge| {
            [edge.node1(), edge.node2()]
                .into_iter()
                .any(|n| self.nodes.get(n).is_some_and(VoronoiNode::is_infinite))
        })
    }

    /// Returns `true` if the cell touches the unbounded exterior, i.e. any of
    /// its edges is infinite.
    #[must_use]
    pub fn is_cell_infinite(&self, key: CellKey) -> bool {
        self.cells.get(key).is_some_and(|cell| {
            cell.edges()
                .iter()
                .any(|&edge| self.is_edge_infinite(edge))
        })
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// Runs the structural validation helpers, returning the first failure.
    ///
    /// Checks key-mapping consistency, edge sharing, and the bisector
    /// property (with a tolerance of `default_tolerance().sqrt()` relative to
    /// the distances involved). The empty-circumcircle invariant is more
    /// expensive and input-dependent; run
    /// [`Tessellation::validate_empty_circumcircle`] explicitly when needed.
    ///
    /// # Errors
    ///
    /// Returns the first [`TessellationValidationError`] encountered.
    pub fn is_valid(&self) -> Result<(), TessellationValidationError> {
        self.validate_edge_sharing()?;
        self.validate_bisector_property(T::default_tolerance().sqrt())?;
        Ok(())
    }

    /// Validates that every edge separates two distinct cells and appears in
    /// exactly the edge lists of those two cells, and that all keys resolve.
    ///
    /// # Errors
    ///
    /// Returns [`TessellationValidationError::MappingInconsistency`] or
    /// [`TessellationValidationError::EdgeSharingViolation`].
    pub fn validate_edge_sharing(&self) -> Result<(), TessellationValidationError> {
        // Count how many cell edge-lists mention each edge.
        let mut owner_counts: FastHashMap<EdgeKey, usize> = FastHashMap::default();
        for (cell_key, cell) in &self.cells {
            for &edge_key in cell.edges() {
                let Some(edge) = self.edges.get(edge_key) else {
                    return Err(TessellationValidationError::MappingInconsistency {
                        message: format!(
                            "cell {:?} references missing edge {edge_key:?}",
                            cell.uuid()
                        ),
                    });
                };
                if !edge.touches_cell(cell_key) {
                    return Err(TessellationValidationError::EdgeSharingViolation {
                        message: format!(
                            "edge {edge_key:?} is listed by cell {:?} but does not reference it",
                            cell.uuid()
                        ),
                    });
                }
                *owner_counts.entry(edge_key).or_insert(0) += 1;
            }
        }

        for (edge_key, edge) in &self.edges {
            if edge.cell1() == edge.cell2() {
                return Err(TessellationValidationError::EdgeSharingViolation {
                    message: format!("edge {edge_key:?} has identical cells on both sides"),
                });
            }
            for cell_key in [edge.cell1(), edge.cell2()] {
                if !self.cells.contains_key(cell_key) {
                    return Err(TessellationValidationError::MappingInconsistency {
                        message: format!("edge {edge_key:?} references missing cell"),
                    });
                }
            }
            for node_key in [edge.node1(), edge.node2()] {
                if !self.nodes.contains_key(node_key) {
                    return Err(TessellationValidationError::MappingInconsistency {
                        message: format!("edge {edge_key:?} references missing node"),
                    });
                }
            }
            if owner_counts.get(&edge_key).copied().unwrap_or(0) != 2 {
                return Err(TessellationValidationError::EdgeSharingViolation {
                    message: format!(
                        "edge {edge_key:?} appears in {} cell edge lists, expected 2",
                        owner_counts.get(&edge_key).copied().unwrap_or(0)
                    ),
                });
            }
        }
        Ok(())
    }

    /// Validates that every finite edge node is equidistant from the edge's
    /// two sites, within `tolerance` relative to the distances involved.
    ///
    /// # Errors
    ///
    /// Returns [`TessellationValidationError::BisectorViolation`] on the
    /// first failing node.
    pub fn validate_bisector_property(
        &self,
        tolerance: T,
    ) -> Result<(), TessellationValidationError> {
        for (edge_key, edge) in &self.edges {
            let (Some(cell1), Some(cell2)) =
                (self.cells.get(edge.cell1()), self.cells.get(edge.cell2()))
            else {
                continue; // reported by validate_edge_sharing
            };
            for node_key in [edge.node1(), edge.node2()] {
                let Some(node) = self.nodes.get(node_key) else {
                    continue;
                };
                if node.is_infinite() {
                    continue;
                }
                let d1 = distance(&node.position(), &cell1.point());
                let d2 = distance(&node.position(), &cell2.point());
                let scale = T::one() + d1.max(d2);
                if (d1 - d2).abs() > tolerance * scale {
                    return Err(TessellationValidationError::BisectorViolation {
                        message: format!(
                            "node of edge {edge_key:?} at {:?} has distances {d1:?} and {d2:?}",
                            node.position()
                        ),
                    });
                }
            }
        }
        Ok(())
    }

    /// Validates the empty-circle property: no site lies strictly inside the
    /// circumcircle of any returned triangle (brute force over all sites).
    ///
    /// Vacuously succeeds when no triangles were collected.
    ///
    /// # Errors
    ///
    /// Returns [`TessellationValidationError::DelaunayViolation`] on the
    /// first offending (triangle, site) pair, or
    /// [`TessellationValidationError::DegenerateTriangle`] if a triangle's
    /// circumcircle does not exist.
    pub fn validate_empty_circumcircle(&self) -> Result<(), TessellationValidationError> {
        let tolerance = T::default_tolerance().sqrt();
        for (index, triangle) in self.triangles.iter().enumerate() {
            let mut points = [Point::<T>::default(); 3];
            for (slot, cell_key) in triangle.cells().into_iter().enumerate() {
                let Some(cell) = self.cells.get(cell_key) else {
                    return Err(TessellationValidationError::MappingInconsistency {
                        message: format!("triangle {index} references missing cell"),
                    });
                };
                points[slot] = cell.point();
            }
            let center = circumcenter(&points[0], &points[1], &points[2])?;
            let radius = distance(&center, &points[0]);
            let limit = radius - tolerance * (T::one() + radius);

            for (_, cell) in &self.cells {
                let site = cell.point();
                if points.contains(&site) {
                    continue;
                }
                if distance(&center, &site) < limit {
                    return Err(TessellationValidationError::DelaunayViolation {
                        message: format!(
                            "site {site:?} lies strictly inside the circumcircle of triangle {index}"
                        ),
                    });
                }
            }
        }
        Ok(())
    }
}

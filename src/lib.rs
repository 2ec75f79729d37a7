//! # voronoi
//!
//! This is a library for computing the Voronoi tessellation and the dual
//! Delaunay triangulation of a set of 2-dimensional points using
//! [Fortune's sweep-line algorithm](https://en.wikipedia.org/wiki/Fortune%27s_algorithm).
//!
//! # Features
//!
//! - Voronoi cells, edges, and nodes as a queryable, immutable graph
//! - Optional Delaunay triangulation (one triangle per circle event)
//! - Generic floating-point coordinate types (`f32`, `f64`, or any type
//!   implementing [`CoordinateScalar`](geometry::traits::coordinate::CoordinateScalar))
//! - Copy-able data types attachable to sites/cells and to edges, nodes, and
//!   triangles (see [`DataType`](core::traits::data_type::DataType))
//! - Serialization/deserialization of the result with [serde](https://serde.rs)
//! - Arena-based storage with stable, generation-checked keys ([slotmap](https://docs.rs/slotmap))
//!
//! # Basic Usage
//!
//! ```rust
//! use voronoi::prelude::*;
//!
//! let sites: Vec<Site<f64, ()>> = vec![
//!     site!([0.0, 0.0]),
//!     site!([4.0, 0.0]),
//!     site!([2.0, 4.0]),
//!     site!([6.0, 5.0]),
//! ];
//!
//! let tessellation: Tessellation<f64, (), ()> =
//!     Tessellation::with_triangles(&sites).unwrap();
//!
//! assert_eq!(tessellation.number_of_cells(), 4);
//! assert!(!tessellation.triangles().is_empty());
//!
//! // Every edge separates two distinct cells and lies on their bisector.
//! assert!(tessellation.is_valid().is_ok());
//!
//! // The dual triangulation satisfies the empty-circle property.
//! assert!(tessellation.validate_empty_circumcircle().is_ok());
//! ```
//!
//! # The algorithm
//!
//! A horizontal sweep line moves from the maximum input y to the minimum. The
//! *beachline* — the lower envelope of parabolas equidistant from each site
//! and the sweep line — partitions the already-swept half-plane; where two
//! arcs meet, their breakpoint traces out a Voronoi edge. Two event kinds
//! drive the sweep:
//!
//! - **Site events** (the line reaches a new input point) split the arc above
//!   the point and start a new bisector edge.
//! - **Circle events** (three adjacent arcs' breakpoints converge) remove the
//!   middle arc, pin the converging edge endpoints to the circumcenter, and
//!   — when triangulation output is requested — emit the Delaunay triangle of
//!   the three sites involved.
//!
//! Events are processed in strictly decreasing y, so the construction is a
//! single deterministic pass; shuffling the input does not change the result.
//!
//! # Input requirements and degeneracies
//!
//! - Coordinates must be finite; NaN or infinite input fails construction
//!   with [`TessellationConstructionError::InvalidSite`](core::tessellation::TessellationConstructionError).
//! - Duplicate points are removed with exact equality before the sweep; at
//!   least 3 distinct sites must remain or construction fails with
//!   [`TessellationConstructionError::InsufficientPoints`](core::tessellation::TessellationConstructionError).
//! - Collinear triples and cocircular degeneracies are not errors: they
//!   simply produce no circle event (collinear) or a collapsed,
//!   automatically-stripped zero-length edge (cocircular).
//!
//! ```rust
//! use voronoi::prelude::*;
//!
//! // Five collinear sites: a valid tessellation of parallel strips with no
//! // triangles.
//! let collinear: Vec<Site<f64, ()>> = (0..5).map(|i| site!([i as f64, 0.0])).collect();
//! let tessellation: Tessellation<f64, (), ()> =
//!     Tessellation::with_triangles(&collinear).unwrap();
//! assert_eq!(tessellation.number_of_cells(), 5);
//! assert!(tessellation.triangles().is_empty());
//!
//! // Two distinct sites are not enough.
//! let too_few: Vec<Site<f64, ()>> = vec![site!([0.0, 0.0]), site!([1.0, 1.0])];
//! assert!(Tessellation::<f64, (), ()>::new(&too_few).is_err());
//! ```
//!
//! # Concurrency
//!
//! A build is strictly single-threaded: every event's outcome depends on the
//! exact current beachline and queue state. All sweep state is privately
//! owned by one `build` call, so independent builds on independent point sets
//! are freely parallelizable by the caller.

// Forbid unsafe code throughout the entire crate
#![forbid(unsafe_code)]

#[macro_use]
extern crate derive_builder;

/// The `core` module contains the primary data structures and algorithms for
/// building and querying Voronoi tessellations.
///
/// It includes the `Tessellation` struct, which represents the finished
/// diagram, the output entity types (`VoronoiCell`, `VoronoiEdge`,
/// `VoronoiNode`, `Triangle`), the `Site` input type, and the internal
/// sweep machinery (event queue, beachline, builder).
pub mod core {
    /// The beachline: a binary search tree of parabolic arcs (sweep-internal).
    pub(crate) mod beachline;
    /// Fortune's sweep driver (sweep-internal).
    pub(crate) mod builder;
    pub mod cell;
    /// Collection aliases used by the tessellation data structures.
    pub mod collections;
    pub mod edge;
    /// The sweep-line event queue (sweep-internal).
    pub(crate) mod event_queue;
    pub mod node;
    pub mod site;
    pub mod tessellation;
    pub mod triangle;
    pub mod util;
    /// Traits for tessellation data structures.
    pub mod traits {
        pub mod data_type;
        pub use data_type::*;
    }
    // Re-export the `core` modules.
    pub use cell::*;
    pub use edge::*;
    pub use node::*;
    pub use site::*;
    pub use tessellation::*;
    pub use traits::*;
    pub use triangle::*;
    pub use util::*;
}

/// Contains geometric types including the `Point` struct and the predicates
/// the sweep is built on.
///
/// The geometry module provides a coordinate abstraction through the
/// `CoordinateScalar` trait, the planar `Point` type with proper NaN
/// handling, validation and hashing, exact-sign orientation and circumcircle
/// predicates, and the parabola/breakpoint evaluation used by the beachline.
pub mod geometry {
    /// Parabola evaluation for the beachline.
    pub mod parabola;
    pub mod point;
    pub mod predicates;
    /// Geometric utility functions (distances, midpoints, point generation).
    pub mod util;
    /// Traits module containing coordinate abstractions.
    pub mod traits {
        pub mod coordinate;
        pub use coordinate::*;
    }
    pub use parabola::*;
    pub use point::*;
    pub use predicates::*;
    pub use traits::*;
    pub use util::*;
}

/// A prelude module that re-exports commonly used types and macros.
///
/// ```rust
/// use voronoi::prelude::*;
///
/// let sites: Vec<Site<f64, ()>> =
///     vec![site!([0.0, 0.0]), site!([1.0, 0.0]), site!([0.5, 1.0])];
/// let tessellation: Tessellation<f64, (), ()> = Tessellation::new(&sites).unwrap();
/// assert_eq!(tessellation.number_of_cells(), 3);
/// ```
pub mod prelude {
    pub use crate::core::{
        cell::VoronoiCell,
        edge::VoronoiEdge,
        node::VoronoiNode,
        site::{Site, SiteBuilder},
        tessellation::{
            CellKey, EdgeKey, NodeKey, Tessellation, TessellationConstructionError,
            TessellationValidationError,
        },
        traits::data_type::DataType,
        triangle::Triangle,
        util::{make_uuid, validate_uuid},
    };
    pub use crate::geometry::{
        parabola::{breakpoint_x, parabola_y},
        point::Point,
        predicates::{CircumcenterError, Orientation, circumcenter, circumradius, orientation},
        traits::coordinate::{CoordinateScalar, CoordinateValidationError},
        util::{distance, generate_random_points, midpoint, squared_distance},
    };
    pub use crate::site;
}

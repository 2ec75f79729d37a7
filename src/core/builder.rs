//! Fortune's sweep-line construction.
//!
//! The builder owns the event queue and the beachline, runs the event loop,
//! and assembles the output graph. A sweep is a single synchronous, CPU-bound
//! pass: a horizontal line moves from the maximum to the minimum input y, and
//! every state transition is driven by one of two event kinds popped in
//! descending-y order:
//!
//! - a **site event** splits the arc above the new site and installs a fresh
//!   bisector edge whose endpoints will be traced by the two new breakpoints;
//! - a **circle event** removes the arc whose breakpoints converged, pins the
//!   converging edge endpoints to the circumcenter, and starts one new edge
//!   between the arcs that became adjacent.
//!
//! Circle events are predictions: inserting a site onto a predicted arc, or
//! removing one of its neighbors, invalidates the prediction and cancels the
//! queued event through the handle stored on the arc.
//!
//! After the queue drains, edges still owning an open endpoint get a concrete
//! far point (the breakpoint evaluated far below the data), and edges whose
//! endpoints coincide exactly (circle events sharing one circumcenter) are
//! stripped.
//!
//! All sweep state is scoped to one `run` call; nothing here survives into
//! the returned [`Tessellation`].

use crate::core::beachline::{ArcKey, Beachline};
use crate::core::cell::VoronoiCell;
use crate::core::collections::StorageMap;
use crate::core::edge::VoronoiEdge;
use crate::core::event_queue::{EventKind, EventQueue};
use crate::core::node::VoronoiNode;
use crate::core::site::Site;
use crate::core::tessellation::{
    CellKey, EdgeKey, NodeKey, Tessellation, TessellationConstructionError,
};
use crate::core::traits::data_type::DataType;
use crate::core::triangle::Triangle;
use crate::geometry::parabola::{breakpoint_x, parabola_y};
use crate::geometry::point::Point;
use crate::geometry::predicates::{Orientation, circumcenter, orientation};
use crate::geometry::traits::coordinate::CoordinateScalar;
use crate::geometry::util::{distance, midpoint};
use std::cmp::Ordering;

/// One in-flight sweep. Created fresh per build; holds no state across calls.
pub(crate) struct FortuneSweep<T, U, V>
where
    T: CoordinateScalar,
    U: DataType,
    V: DataType,
{
    cells: StorageMap<CellKey, VoronoiCell<T, U>>,
    edges: StorageMap<EdgeKey, VoronoiEdge<V>>,
    nodes: StorageMap<NodeKey, VoronoiNode<T, V>>,
    triangles: Vec<Triangle<V>>,
    queue: EventQueue<T>,
    beachline: Beachline<T>,
    /// North endpoints of the vertical edges pre-built between maximum-y
    /// sites; they never meet a circle event and get their far point at
    /// finalization.
    north_rays: Vec<NodeKey>,
    bounds: (Point<T>, Point<T>),
    build_triangles: bool,
}

impl<T, U, V> FortuneSweep<T, U, V>
where
    T: CoordinateScalar,
    U: DataType,
    V: DataType,
{
    /// Runs a complete build over `sites`.
    pub fn run(
        sites: &[Site<T, U>],
        build_triangles: bool,
    ) -> Result<Tessellation<T, U, V>, TessellationConstructionError> {
        for (index, site) in sites.iter().enumerate() {
            site.validate()
                .map_err(|source| TessellationConstructionError::InvalidSite { index, source })?;
        }

        let normalized = normalize_sites(sites);
        if normalized.len() < 3 {
            return Err(TessellationConstructionError::InsufficientPoints {
                found: normalized.len(),
            });
        }

        let mut sweep = Self {
            cells: StorageMap::with_key(),
            edges: StorageMap::with_key(),
            nodes: StorageMap::with_key(),
            triangles: Vec::new(),
            queue: EventQueue::new(),
            beachline: Beachline::new(),
            north_rays: Vec::new(),
            bounds: bounding_box(&normalized),
            build_triangles,
        };

        let seeded: Vec<(CellKey, Point<T>)> = normalized
            .iter()
            .map(|site| {
                let point = site.point();
                (
                    sweep.cells.insert(VoronoiCell::new(point, site.data)),
                    point,
                )
            })
            .collect();

        sweep.seed(&seeded);
        while let Some(event) = sweep.queue.pop() {
            match event.kind {
                EventKind::Site { cell } => sweep.handle_site_event(cell),
                EventKind::Circle {
                    arc,
                    center,
                    triangle,
                } => sweep.handle_circle_event(arc, center, triangle),
            }
        }
        sweep.finalize_open_rays();
        sweep.strip_degenerate_edges();

        Ok(Tessellation::from_parts(
            sweep.cells,
            sweep.edges,
            sweep.nodes,
            sweep.triangles,
            sweep.bounds,
        ))
    }

    /// Installs the initial beachline and queues the remaining site events.
    ///
    /// Sites sharing the global maximum y cannot generate circle events
    /// relative to each other, and the general site handler cannot place them
    /// (there is no arc above a site on the sweep line). They are inserted
    /// directly as a left-to-right chain of arcs joined by half-infinite
    /// vertical edges.
    fn seed(&mut self, sites: &[(CellKey, Point<T>)]) {
        let top_y = sites[0].1.y();
        let run_length = sites.iter().take_while(|(_, p)| p.y() == top_y).count();

        let mut previous: Option<(ArcKey, CellKey, Point<T>)> = None;
        for &(cell, point) in &sites[..run_length] {
            let arc = self.beachline.push_rightmost(cell, point);
            if let Some((left_arc, left_cell, left_point)) = previous {
                let anchor = midpoint(&left_point, &point);
                let north = self.nodes.insert(VoronoiNode::open(anchor));
                let south = self.nodes.insert(VoronoiNode::open(anchor));
                let edge = self
                    .edges
                    .insert(VoronoiEdge::new(left_cell, cell, north, south));
                self.cells[left_cell].attach_edge(edge);
                self.cells[cell].attach_edge(edge);
                // The south end is the breakpoint traced as the sweep
                // descends; the north end stays open forever.
                self.beachline.arc_mut(left_arc).right_node = Some(south);
                self.beachline.arc_mut(arc).left_node = Some(south);
                self.north_rays.push(north);
            }
            previous = Some((arc, cell, point));
        }

        for &(cell, point) in &sites[run_length..] {
            self.queue.insert(point.y(), EventKind::Site { cell });
        }
    }

    /// Handles a site event: the sweep line reached a new input point.
    fn handle_site_event(&mut self, cell: CellKey) {
        let site = self.cells[cell].point();
        if self.beachline.is_empty() {
            self.beachline.push_rightmost(cell, site);
            return;
        }
        let Some(above) = self.beachline.find_arc(site.x(), site.y()) else {
            return;
        };

        // The arc above predicted a disappearance that the new site now
        // prevents.
        if let Some(stale) = self.beachline.arc_mut(above).circle_event.take() {
            self.queue.remove(stale);
        }

        let above_cell = self.beachline.arc(above).cell;
        let above_site = self.beachline.arc(above).site;

        // The fresh bisector edge starts as two coincident open endpoints
        // anchored vertically below the site on the split parabola.
        let anchor = Point::new(site.x(), parabola_y(&above_site, site.x(), site.y()));
        let node1 = self.nodes.insert(VoronoiNode::open(anchor));
        let node2 = self.nodes.insert(VoronoiNode::open(anchor));
        let edge = self
            .edges
            .insert(VoronoiEdge::new(above_cell, cell, node1, node2));
        self.cells[above_cell].attach_edge(edge);
        self.cells[cell].attach_edge(edge);

        let (new_arc, right_copy) = self.beachline.split_arc(above, site, cell);
        self.beachline.arc_mut(above).right_node = Some(node1);
        self.beachline.arc_mut(new_arc).left_node = Some(node1);
        self.beachline.arc_mut(new_arc).right_node = Some(node2);
        self.beachline.arc_mut(right_copy).left_node = Some(node2);

        if let Some(outer) = self.beachline.prev(above) {
            self.try_schedule_circle_event(outer, above, new_arc);
        }
        if let Some(outer) = self.beachline.next(right_copy) {
            self.try_schedule_circle_event(new_arc, right_copy, outer);
        }
    }

    /// Handles a circle event: the arc `middle` vanishes at `center`.
    fn handle_circle_event(
        &mut self,
        middle: ArcKey,
        center: Point<T>,
        triangle: Option<[CellKey; 3]>,
    ) {
        self.beachline.arc_mut(middle).circle_event = None;
        let (Some(left), Some(right)) = (self.beachline.prev(middle), self.beachline.next(middle))
        else {
            debug_assert!(false, "a circle event's arc always has two neighbors");
            return;
        };

        // The removal changes both neighbor triples, so their predictions
        // are stale.
        for neighbor in [left, right] {
            if let Some(stale) = self.beachline.arc_mut(neighbor).circle_event.take() {
                self.queue.remove(stale);
            }
        }

        let Some(removed) = self.beachline.remove_arc(middle) else {
            return;
        };

        // The two breakpoints bounding the vanished arc met at the center;
        // their nodes become finite Voronoi vertices.
        for node_key in [removed.left_node, removed.right_node]
            .into_iter()
            .flatten()
        {
            self.nodes[node_key].pin(center);
        }

        let left_cell = self.beachline.arc(left).cell;
        let left_site = self.beachline.arc(left).site;
        let right_cell = self.beachline.arc(right).cell;
        let right_site = self.beachline.arc(right).site;

        // The now-adjacent arcs trace a new bisector, starting at the center
        // and still open on the other end.
        let center_node = self.nodes.insert(VoronoiNode::fixed(center));
        let ray_node = self
            .nodes
            .insert(VoronoiNode::open(midpoint(&left_site, &right_site)));
        let edge = self
            .edges
            .insert(VoronoiEdge::new(left_cell, right_cell, center_node, ray_node));
        self.cells[left_cell].attach_edge(edge);
        self.cells[right_cell].attach_edge(edge);
        self.beachline.arc_mut(left).right_node = Some(ray_node);
        self.beachline.arc_mut(right).left_node = Some(ray_node);

        if let Some(cells) = triangle {
            self.triangles.push(Triangle::new(cells));
        }

        if let Some(outer) = self.beachline.prev(left) {
            self.try_schedule_circle_event(outer, left, right);
        }
        if let Some(outer) = self.beachline.next(right) {
            self.try_schedule_circle_event(left, right, outer);
        }
    }

    /// Schedules a circle event for the ordered arc triple `(left, middle,
    /// right)` if the middle arc can actually vanish.
    ///
    /// The triple is rejected when any two sites coincide (adjacent arcs of
    /// the same cell), when the sites are collinear, or when the turn
    /// left→middle→right is counter-clockwise: then the two breakpoints
    /// diverge instead of converging. The event fires at the bottom of the
    /// circumcircle, the sweep position at which the shrinking arc
    /// disappears.
    fn try_schedule_circle_event(&mut self, left: ArcKey, middle: ArcKey, right: ArcKey) {
        let (left_cell, left_site) = {
            let arc = self.beachline.arc(left);
            (arc.cell, arc.site)
        };
        let (middle_cell, middle_site) = {
            let arc = self.beachline.arc(middle);
            (arc.cell, arc.site)
        };
        let (right_cell, right_site) = {
            let arc = self.beachline.arc(right);
            (arc.cell, arc.site)
        };

        if left_cell == middle_cell || middle_cell == right_cell || left_cell == right_cell {
            return;
        }
        if orientation(&left_site, &middle_site, &right_site) != Orientation::NEGATIVE {
            return;
        }
        let Ok(center) = circumcenter(&left_site, &middle_site, &right_site) else {
            return;
        };

        let radius = distance(&center, &middle_site);
        let trigger_y = center.y() - radius;
        let triangle = self
            .build_triangles
            .then_some([left_cell, middle_cell, right_cell]);

        debug_assert!(
            self.beachline.arc(middle).circle_event.is_none(),
            "stale prediction must be cancelled before a new one is recorded"
        );
        let event = self.queue.insert(
            trigger_y,
            EventKind::Circle {
                arc: middle,
                center,
                triangle,
            },
        );
        self.beachline.arc_mut(middle).circle_event = Some(event);
    }

    /// Assigns a concrete far point to every edge endpoint still open after
    /// the queue drained.
    ///
    /// Walks the final beachline left to right; each adjacent arc pair's
    /// breakpoint is evaluated at a directrix two bounding-box spans below
    /// the data. The north seed rays get a point straight above their anchor,
    /// one span beyond the box.
    fn finalize_open_rays(&mut self) {
        let (min, max) = self.bounds;
        let span = (max.x() - min.x()) + (max.y() - min.y());
        let pad = if span > T::zero() { span } else { T::one() };
        let far_directrix = min.y() - (pad + pad);
        let north_y = max.y() + pad;

        let order = self.beachline.in_order();
        for pair in order.windows(2) {
            let (left, right) = (pair[0], pair[1]);
            let left_site = self.beachline.arc(left).site;
            let right_site = self.beachline.arc(right).site;
            debug_assert_eq!(
                self.beachline.arc(left).right_node,
                self.beachline.arc(right).left_node,
                "adjacent arcs must share their breakpoint node"
            );
            if let Some(node_key) = self.beachline.arc(left).right_node {
                if self.nodes[node_key].is_infinite() {
                    let x = breakpoint_x(&left_site, &right_site, far_directrix);
                    let y = parabola_y(&left_site, x, far_directrix);
                    self.nodes[node_key].set_far_point(Point::new(x, y));
                }
            }
        }

        let rays: Vec<NodeKey> = self.north_rays.drain(..).collect();
        for node_key in rays {
            let anchor = self.nodes[node_key].position();
            self.nodes[node_key].set_far_point(Point::new(anchor.x(), north_y));
        }
    }

    /// Removes edges whose two finalized endpoints coincide exactly.
    ///
    /// Cocircular site configurations fire several circle events at one
    /// circumcenter; the edge created between the first two leftover arcs
    /// then collapses to a point when the next event pins its other end to
    /// the same center.
    fn strip_degenerate_edges(&mut self) {
        let degenerate: Vec<EdgeKey> = self
            .edges
            .iter()
            .filter(|(_, edge)| {
                self.nodes[edge.node1()].position() == self.nodes[edge.node2()].position()
            })
            .map(|(key, _)| key)
            .collect();

        for key in degenerate {
            if let Some(edge) = self.edges.remove(key) {
                self.cells[edge.cell1()].detach_edge(key);
                self.cells[edge.cell2()].detach_edge(key);
                self.nodes.remove(edge.node1());
                self.nodes.remove(edge.node2());
            }
        }
    }
}

/// Sorts by descending y then ascending x and drops exact duplicates
/// (keeping each point's first occurrence in input order).
fn normalize_sites<T, U>(sites: &[Site<T, U>]) -> Vec<Site<T, U>>
where
    T: CoordinateScalar,
    U: DataType,
{
    let mut normalized = sites.to_vec();
    normalized.sort_by(|a, b| {
        b.point()
            .y()
            .partial_cmp(&a.point().y())
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                a.point()
                    .x()
                    .partial_cmp(&b.point().x())
                    .unwrap_or(Ordering::Equal)
            })
    });
    normalized.dedup_by(|a, b| a.point() == b.point());
    normalized
}

fn bounding_box<T, U>(sites: &[Site<T, U>]) -> (Point<T>, Point<T>)
where
    T: CoordinateScalar,
    U: DataType,
{
    let first = sites[0].point();
    let (mut min_x, mut min_y) = (first.x(), first.y());
    let (mut max_x, mut max_y) = (first.x(), first.y());
    for site in &sites[1..] {
        let p = site.point();
        min_x = min_x.min(p.x());
        min_y = min_y.min(p.y());
        max_x = max_x.max(p.x());
        max_y = max_y.max(p.y());
    }
    (Point::new(min_x, min_y), Point::new(max_x, max_y))
}

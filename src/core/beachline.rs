//! The beachline: a binary search tree of parabolic arcs.
//!
//! At any sweep position the beachline is the left-to-right sequence of
//! parabola arcs closest to the sweep line. The tree's in-order traversal
//! yields that sequence; no key is stored, because an arc's extent changes as
//! the sweep advances. Ordering queries recompute the breakpoints between
//! in-order-adjacent arcs at the query's own sweep y.
//!
//! Arcs live in a slotmap arena and reference each other by [`ArcKey`];
//! `parent`/`left`/`right` links are keys, so removing an arc can never leave
//! a dangling pointer, only a key that fails to resolve (which would be a
//! logic error caught by the arena lookup).

use crate::core::event_queue::EventKey;
use crate::core::tessellation::{CellKey, NodeKey};
use crate::geometry::parabola::breakpoint_x;
use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::CoordinateScalar;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Handle to a beachline arc.
    pub(crate) struct ArcKey;
}

/// One parabola segment of the beachline, owned by a single site.
///
/// Arcs are transient: created when a site event inserts or splits, destroyed
/// when a circle event removes them; none survive into the returned
/// tessellation.
#[derive(Clone, Debug)]
pub(crate) struct Arc<T>
where
    T: CoordinateScalar,
{
    /// The cell of the site owning this arc.
    pub cell: CellKey,
    /// The owning site's location (copied out of the cell for breakpoint
    /// math without arena lookups).
    pub site: Point<T>,
    parent: Option<ArcKey>,
    left: Option<ArcKey>,
    right: Option<ArcKey>,
    /// The edge endpoint traced by this arc's left breakpoint.
    pub left_node: Option<NodeKey>,
    /// The edge endpoint traced by this arc's right breakpoint.
    pub right_node: Option<NodeKey>,
    /// Pending circle event predicting this arc's disappearance, if any.
    pub circle_event: Option<EventKey>,
}

impl<T> Arc<T>
where
    T: CoordinateScalar,
{
    fn leaf(cell: CellKey, site: Point<T>) -> Self {
        Self {
            cell,
            site,
            parent: None,
            left: None,
            right: None,
            left_node: None,
            right_node: None,
            circle_event: None,
        }
    }
}

/// The beachline tree.
#[derive(Debug)]
pub(crate) struct Beachline<T>
where
    T: CoordinateScalar,
{
    arcs: SlotMap<ArcKey, Arc<T>>,
    root: Option<ArcKey>,
}

impl<T> Beachline<T>
where
    T: CoordinateScalar,
{
    pub fn new() -> Self {
        Self {
            arcs: SlotMap::with_key(),
            root: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    pub fn arc(&self, key: ArcKey) -> &Arc<T> {
        &self.arcs[key]
    }

    pub fn arc_mut(&mut self, key: ArcKey) -> &mut Arc<T> {
        &mut self.arcs[key]
    }

    /// Appends an arc at the right end of the beachline.
    ///
    /// Used for the initial maximum-y seeding chain and for the very first
    /// arc of an ordinary build.
    pub fn push_rightmost(&mut self, cell: CellKey, site: Point<T>) -> ArcKey {
        let key = self.arcs.insert(Arc::leaf(cell, site));
        match self.root {
            None => self.root = Some(key),
            Some(root) => {
                let rightmost = self.rightmost_of(root);
                self.arcs[rightmost].right = Some(key);
                self.arcs[key].parent = Some(rightmost);
            }
        }
        key
    }

    /// Returns the arc whose parabola covers abscissa `x` when the sweep line
    /// sits at `y`, or `None` on an empty beachline.
    ///
    /// Descends from the root: at each arc the breakpoints with its in-order
    /// neighbors are evaluated at the query y, steering the descent toward
    /// the side containing `x`.
    pub fn find_arc(&self, x: T, y: T) -> Option<ArcKey> {
        let mut current = self.root?;
        loop {
            if let Some(pred) = self.prev(current) {
                let left_bound =
                    breakpoint_x(&self.arcs[pred].site, &self.arcs[current].site, y);
                if x < left_bound {
                    if let Some(left) = self.arcs[current].left {
                        current = left;
                        continue;
                    }
                    return Some(current);
                }
            }
            if let Some(succ) = self.next(current) {
                let right_bound =
                    breakpoint_x(&self.arcs[current].site, &self.arcs[succ].site, y);
                if x > right_bound {
                    if let Some(right) = self.arcs[current].right {
                        current = right;
                        continue;
                    }
                    return Some(current);
                }
            }
            return Some(current);
        }
    }

    /// Replaces `arc` with the in-order triple (`arc`, new site's arc, copy
    /// of `arc`), returning `(new_arc, right_copy)`.
    ///
    /// The left copy is `arc` itself, keeping its left-node reference; the
    /// right copy inherits the old right-node reference. The caller wires the
    /// two fresh breakpoint nodes afterwards.
    pub fn split_arc(&mut self, arc: ArcKey, site: Point<T>, cell: CellKey) -> (ArcKey, ArcKey) {
        let split_cell = self.arcs[arc].cell;
        let split_site = self.arcs[arc].site;
        let old_right_node = self.arcs[arc].right_node;

        let new_arc = self.arcs.insert(Arc::leaf(cell, site));
        let mut right_copy_arc = Arc::leaf(split_cell, split_site);
        right_copy_arc.right_node = old_right_node;
        let right_copy = self.arcs.insert(right_copy_arc);

        // Place the new arc at the in-order position immediately after `arc`,
        // then hang the right copy immediately after the new arc. Both are
        // fresh leaves, so in-order positions of all other arcs are
        // preserved.
        match self.arcs[arc].right {
            None => {
                self.arcs[arc].right = Some(new_arc);
                self.arcs[new_arc].parent = Some(arc);
            }
            Some(right_subtree) => {
                let leftmost = self.leftmost_of(right_subtree);
                self.arcs[leftmost].left = Some(new_arc);
                self.arcs[new_arc].parent = Some(leftmost);
            }
        }
        self.arcs[new_arc].right = Some(right_copy);
        self.arcs[right_copy].parent = Some(new_arc);

        (new_arc, right_copy)
    }

    /// Removes `arc` from the tree, preserving the order of the remaining
    /// arcs, and returns its record.
    pub fn remove_arc(&mut self, arc: ArcKey) -> Option<Arc<T>> {
        let left = self.arcs.get(arc)?.left;
        let right = self.arcs[arc].right;
        let parent = self.arcs[arc].parent;

        let replacement = match (left, right) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left_child), Some(right_child)) => {
                // Splice in the right subtree's leftmost node.
                let successor = self.leftmost_of(right_child);
                if successor != right_child {
                    let successor_right = self.arcs[successor].right;
                    let successor_parent = self.arcs[successor].parent;
                    if let Some(sp) = successor_parent {
                        self.arcs[sp].left = successor_right;
                    }
                    if let Some(sr) = successor_right {
                        self.arcs[sr].parent = successor_parent;
                    }
                    self.arcs[successor].right = Some(right_child);
                    self.arcs[right_child].parent = Some(successor);
                }
                self.arcs[successor].left = Some(left_child);
                self.arcs[left_child].parent = Some(successor);
                Some(successor)
            }
        };

        if let Some(rep) = replacement {
            self.arcs[rep].parent = parent;
        }
        match parent {
            None => self.root = replacement,
            Some(p) => {
                if self.arcs[p].left == Some(arc) {
                    self.arcs[p].left = replacement;
                } else {
                    self.arcs[p].right = replacement;
                }
            }
        }

        self.arcs.remove(arc)
    }

    /// In-order predecessor: the arc immediately to the left.
    pub fn prev(&self, arc: ArcKey) -> Option<ArcKey> {
        if let Some(left) = self.arcs[arc].left {
            return Some(self.rightmost_of(left));
        }
        let mut current = arc;
        while let Some(parent) = self.arcs[current].parent {
            if self.arcs[parent].right == Some(current) {
                return Some(parent);
            }
            current = parent;
        }
        None
    }

    /// In-order successor: the arc immediately to the right.
    pub fn next(&self, arc: ArcKey) -> Option<ArcKey> {
        if let Some(right) = self.arcs[arc].right {
            return Some(self.leftmost_of(right));
        }
        let mut current = arc;
        while let Some(parent) = self.arcs[current].parent {
            if self.arcs[parent].left == Some(current) {
                return Some(parent);
            }
            current = parent;
        }
        None
    }

    /// The leftmost arc of the whole beachline.
    pub fn leftmost(&self) -> Option<ArcKey> {
        self.root.map(|root| self.leftmost_of(root))
    }

    fn leftmost_of(&self, mut current: ArcKey) -> ArcKey {
        while let Some(left) = self.arcs[current].left {
            current = left;
        }
        current
    }

    fn rightmost_of(&self, mut current: ArcKey) -> ArcKey {
        while let Some(right) = self.arcs[current].right {
            current = right;
        }
        current
    }

    /// In-order arc sequence; test and finalization helper.
    pub fn in_order(&self) -> Vec<ArcKey> {
        let mut order = Vec::with_capacity(self.arcs.len());
        let mut current = self.leftmost();
        while let Some(key) = current {
            order.push(key);
            current = self.next(key);
        }
        order
    }
}

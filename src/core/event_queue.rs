//! The sweep-line event queue.
//!
//! Events are the unit of work for the sweep: *site events* activate a new
//! input point, *circle events* predict that an arc is about to vanish. The
//! queue delivers events in order of decreasing y; events at equal y fire in
//! insertion order, which is fixed at seeding time for site events and is
//! irrelevant-but-deterministic for circle events.
//!
//! Circle events are predictions and get invalidated when a new site lands on
//! the arc that owns them, so the queue also supports removing an arbitrary
//! pending event through the [`EventKey`] handle the owning arc holds. The
//! implementation is an indexed binary heap: a slotmap arena of events, each
//! recording its current heap slot, giving O(log n) insert, pop, and remove.

use crate::core::beachline::ArcKey;
use crate::core::tessellation::CellKey;
use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::CoordinateScalar;
use slotmap::{SlotMap, new_key_type};
use std::cmp::Ordering;

new_key_type! {
    /// Handle to a pending event.
    ///
    /// Arcs store the key of their pending circle event so the prediction can
    /// be cancelled when it becomes stale; the event stores the owning arc's
    /// key. Plain keys in both directions, no ownership cycle.
    pub(crate) struct EventKey;
}

/// What a pending event will do when it fires.
#[derive(Clone, Debug)]
pub(crate) enum EventKind<T>
where
    T: CoordinateScalar,
{
    /// A new data point becomes active and splits the arc above it.
    Site {
        /// The cell created for the site before the sweep started.
        cell: CellKey,
    },
    /// Three neighboring arcs' breakpoints converge and the middle arc
    /// vanishes.
    Circle {
        /// The arc that will vanish.
        arc: ArcKey,
        /// The circumcenter of the three sites involved.
        center: Point<T>,
        /// The dual Delaunay triangle, pre-built when triangulation output
        /// was requested.
        triangle: Option<[CellKey; 3]>,
    },
}

/// A pending work item, alive only while queued.
#[derive(Clone, Debug)]
pub(crate) struct SweepEvent<T>
where
    T: CoordinateScalar,
{
    /// The sweep-line y coordinate at which this event fires.
    pub y: T,
    /// The event payload.
    pub kind: EventKind<T>,
    /// Insertion sequence number, the tie-break for equal y.
    seq: u64,
    /// Current slot in the heap vector.
    heap_pos: usize,
}

/// Priority queue of pending events, ordered by decreasing y with stable
/// insertion-order tie-break.
#[derive(Debug)]
pub(crate) struct EventQueue<T>
where
    T: CoordinateScalar,
{
    events: SlotMap<EventKey, SweepEvent<T>>,
    heap: Vec<EventKey>,
    next_seq: u64,
}

impl<T> EventQueue<T>
where
    T: CoordinateScalar,
{
    pub fn new() -> Self {
        Self {
            events: SlotMap::with_key(),
            heap: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Queues an event, returning the handle for later cancellation.
    pub fn insert(&mut self, y: T, kind: EventKind<T>) -> EventKey {
        let seq = self.next_seq;
        self.next_seq += 1;
        let key = self.events.insert(SweepEvent {
            y,
            kind,
            seq,
            heap_pos: usize::MAX,
        });
        let pos = self.heap.len();
        self.heap.push(key);
        self.events[key].heap_pos = pos;
        self.sift_up(pos);
        key
    }

    /// Removes and returns the event with the largest y (ties: earliest
    /// inserted), or `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<SweepEvent<T>> {
        let top = *self.heap.first()?;
        self.remove(top)
    }

    /// Removes a specific pending event.
    ///
    /// Returns `None` if the handle no longer refers to a queued event.
    pub fn remove(&mut self, key: EventKey) -> Option<SweepEvent<T>> {
        let event = self.events.remove(key)?;
        let pos = event.heap_pos;
        self.heap.swap_remove(pos);
        if pos < self.heap.len() {
            let moved = self.heap[pos];
            self.events[moved].heap_pos = pos;
            // The element swapped into `pos` came from the heap's tail and
            // may violate the heap property in either direction.
            self.sift_down(pos);
            self.sift_up(self.events[moved].heap_pos);
        }
        Some(event)
    }

    /// Returns `true` if the event at heap slot `a` fires before the one at
    /// slot `b`.
    fn fires_before(&self, a: EventKey, b: EventKey) -> bool {
        let ea = &self.events[a];
        let eb = &self.events[b];
        match ea.y.partial_cmp(&eb.y) {
            Some(Ordering::Greater) => true,
            Some(Ordering::Less) => false,
            _ => ea.seq < eb.seq,
        }
    }

    fn swap_slots(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.events[self.heap[i]].heap_pos = i;
        self.events[self.heap[j]].heap_pos = j;
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.fires_before(self.heap[pos], self.heap[parent]) {
                self.swap_slots(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        loop {
            let mut first = pos;
            for child in [2 * pos + 1, 2 * pos + 2] {
                if child < self.heap.len() && self.fires_before(self.heap[child], self.heap[first])
                {
                    first = child;
                }
            }
            if first == pos {
                break;
            }
            self.swap_slots(pos, first);
            pos = first;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn cell_keys(count: usize) -> Vec<CellKey> {
        let mut cells: SlotMap<CellKey, ()> = SlotMap::with_key();
        (0..count).map(|_| cells.insert(())).collect()
    }

    fn site_cell(event: &SweepEvent<f64>) -> CellKey {
        match event.kind {
            EventKind::Site { cell } => cell,
            EventKind::Circle { .. } => panic!("expected a site event"),
        }
    }

    #[test]
    fn pops_in_descending_y_order() {
        let cells = cell_keys(4);
        let mut queue: EventQueue<f64> = EventQueue::new();
        queue.insert(1.0, EventKind::Site { cell: cells[0] });
        queue.insert(5.0, EventKind::Site { cell: cells[1] });
        queue.insert(-2.0, EventKind::Site { cell: cells[2] });
        queue.insert(3.0, EventKind::Site { cell: cells[3] });

        let ys: Vec<f64> = std::iter::from_fn(|| queue.pop().map(|e| e.y)).collect();
        assert_eq!(ys, vec![5.0, 3.0, 1.0, -2.0]);
        assert!(queue.is_empty());
    }

    #[test]
    fn equal_y_ties_fire_in_insertion_order() {
        let cells = cell_keys(3);
        let mut queue: EventQueue<f64> = EventQueue::new();
        queue.insert(2.0, EventKind::Site { cell: cells[0] });
        queue.insert(2.0, EventKind::Site { cell: cells[1] });
        queue.insert(2.0, EventKind::Site { cell: cells[2] });

        let order: Vec<CellKey> =
            std::iter::from_fn(|| queue.pop().map(|e| site_cell(&e))).collect();
        assert_eq!(order, cells);
    }

    #[test]
    fn remove_cancels_a_pending_event() {
        let cells = cell_keys(3);
        let mut queue: EventQueue<f64> = EventQueue::new();
        queue.insert(1.0, EventKind::Site { cell: cells[0] });
        let stale = queue.insert(3.0, EventKind::Site { cell: cells[1] });
        queue.insert(2.0, EventKind::Site { cell: cells[2] });

        let removed = queue.remove(stale).unwrap();
        assert_eq!(removed.y, 3.0);
        assert_eq!(queue.len(), 2);

        // Removing twice is a no-op.
        assert!(queue.remove(stale).is_none());

        let order: Vec<CellKey> =
            std::iter::from_fn(|| queue.pop().map(|e| site_cell(&e))).collect();
        assert_eq!(order, vec![cells[2], cells[0]]);
    }

    #[test]
    fn interleaved_inserts_and_removals_keep_order() {
        let cells = cell_keys(1);
        let mut queue: EventQueue<f64> = EventQueue::new();
        let mut handles = Vec::new();
        for i in 0..32 {
            let y = f64::from((i * 7) % 13);
            handles.push(queue.insert(y, EventKind::Site { cell: cells[0] }));
        }
        // Remove every third event.
        for handle in handles.iter().step_by(3) {
            queue.remove(*handle);
        }

        let mut previous = f64::INFINITY;
        while let Some(event) = queue.pop() {
            assert!(event.y <= previous);
            previous = event.y;
        }
    }

    #[test]
    fn pop_on_empty_returns_none() {
        let mut queue: EventQueue<f64> = EventQueue::new();
        assert!(queue.pop().is_none());
    }
}

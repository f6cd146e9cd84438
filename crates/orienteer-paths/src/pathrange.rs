use std::cmp::Ordering;

use orienteer_core::{Point, Range};

/// A position with an associated cost, returned from Dijkstra map queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathNode {
    pub pos: Point,
    pub cost: f64,
}

/// Counters for the most recent A* search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped from the frontier and expanded.
    pub expanded: usize,
    /// Entries pushed onto the frontier, the start included.
    pub pushed: usize,
}

// ---------------------------------------------------------------------------
// Internal node for A*/Dijkstra priority-queue searches
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: f64,
    pub(crate) f: f64,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0.0,
            f: 0.0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node array, ordered for use in `BinaryHeap`.
///
/// Smallest `f` pops first; among equal `f` the entry pushed first (lowest
/// `seq`) wins.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: f64,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

/// Sentinel value meaning "unreachable" in Dijkstra maps.
pub const UNREACHABLE: f64 = f64::INFINITY;

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Central coordinator for pathfinding on a grid rectangle.
///
/// `PathRange` owns all internal caches (node arrays, cost maps, neighbor
/// buffer) so that repeated queries incur no allocations after the first use.
pub struct PathRange {
    pub(crate) rng: Range,
    // A* caches
    pub(crate) astar_nodes: Vec<Node>,
    pub(crate) astar_generation: u32,
    pub(crate) astar_stats: SearchStats,
    // Dijkstra caches
    pub(crate) dijkstra_nodes: Vec<Node>,
    pub(crate) dijkstra_generation: u32,
    pub(crate) dijkstra_results: Vec<PathNode>,
    pub(crate) dijkstra_map: Vec<f64>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            rng,
            astar_nodes: vec![Node::default(); len],
            astar_generation: 0,
            astar_stats: SearchStats::default(),
            dijkstra_nodes: vec![Node::default(); len],
            dijkstra_generation: 0,
            dijkstra_results: Vec::new(),
            dijkstra_map: vec![UNREACHABLE; len],
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Counters of the last [`astar_path`](PathRange::astar_path) call.
    #[inline]
    pub fn last_stats(&self) -> SearchStats {
        self.astar_stats
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        self.rng.index(p)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        self.rng.point(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn heap_pops_lowest_f_first() {
        let mut heap = BinaryHeap::new();
        heap.push(NodeRef { idx: 0, f: 3.0, seq: 0 });
        heap.push(NodeRef { idx: 1, f: 1.5, seq: 1 });
        heap.push(NodeRef { idx: 2, f: 2.0, seq: 2 });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|n| n.idx)).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn heap_breaks_ties_first_in_first_out() {
        let mut heap = BinaryHeap::new();
        for (seq, idx) in [7usize, 3, 9, 1].into_iter().enumerate() {
            heap.push(NodeRef {
                idx,
                f: 4.0,
                seq: seq as u64,
            });
        }
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|n| n.idx)).collect();
        assert_eq!(order, vec![7, 3, 9, 1]);
    }

    #[test]
    fn caches_sized_to_range() {
        let pr = PathRange::new(Range::sized(7, 5));
        assert_eq!(pr.astar_nodes.len(), 35);
        assert_eq!(pr.dijkstra_map.len(), 35);
        assert_eq!(pr.idx(Point::new(6, 4)), Some(34));
        assert_eq!(pr.point(34), Point::new(6, 4));
        assert_eq!(pr.idx(Point::new(7, 0)), None);
    }
}

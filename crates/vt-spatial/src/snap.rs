//! Point snapping: arbitrary coordinate → nearest graph node.
//!
//! [`RoadGraph::snap_to_node`] is a full scan over every node key, comparing
//! the query with each key's decoded cell centre.  O(nodes) per call, which
//! is fine for the two snaps a route request needs.  There is no maximum
//! snapping distance: a non-empty graph always yields a node.
//!
//! Callers that snap many points against the same graph can build a
//! [`SnapIndex`] (R-tree via `rstar`) once and query it instead.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use vt_core::{Coordinate, NodeKey};

use crate::RoadGraph;

// ── Full scan ─────────────────────────────────────────────────────────────────

impl RoadGraph {
    /// Nearest node to `pos` by planar distance.
    ///
    /// Returns `None` only if the graph has no nodes.  Among equidistant
    /// nodes the winner is unspecified.
    pub fn snap_to_node(&self, pos: Coordinate) -> Option<NodeKey> {
        self.snap_with_distance(pos).map(|(key, _)| key)
    }

    /// Like [`snap_to_node`](Self::snap_to_node) but also returns the planar
    /// distance from `pos` to the chosen node's centre.
    pub fn snap_with_distance(&self, pos: Coordinate) -> Option<(NodeKey, f64)> {
        let q = *self.quantizer();

        #[cfg(not(feature = "parallel"))]
        let best = self
            .adjacency
            .keys()
            .map(|&k| (k, q.center(k).distance_2(pos)))
            .min_by(|a, b| a.1.total_cmp(&b.1));

        #[cfg(feature = "parallel")]
        let best = {
            use rayon::prelude::*;
            self.adjacency
                .par_iter()
                .map(|(&k, _)| (k, q.center(k).distance_2(pos)))
                .min_by(|a, b| a.1.total_cmp(&b.1))
        };

        best.map(|(k, d2)| (k, d2.sqrt()))
    }
}

// ── R-tree index ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a node key's cell centre plus the key.
#[derive(Clone)]
struct NodeEntry {
    point: [f64; 2],
    key:   NodeKey,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

/// Bulk-loaded R-tree over a graph's node centres.
///
/// Snapshot of the graph at construction time; the graph is immutable so the
/// index never goes stale.
pub struct SnapIndex {
    tree: RTree<NodeEntry>,
}

impl SnapIndex {
    /// Bulk-load every node of `graph`.  O(N log N).
    pub fn new(graph: &RoadGraph) -> Self {
        let entries: Vec<NodeEntry> = graph
            .nodes()
            .map(|key| {
                let c = graph.center(key);
                NodeEntry { point: [c.x, c.y], key }
            })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Nearest node to `pos`; `None` only for an empty graph.
    pub fn nearest(&self, pos: Coordinate) -> Option<NodeKey> {
        self.tree.nearest_neighbor(&[pos.x, pos.y]).map(|e| e.key)
    }

    /// Up to `k` nearest nodes, sorted by ascending distance.
    pub fn k_nearest(&self, pos: Coordinate, k: usize) -> Vec<NodeKey> {
        self.tree
            .nearest_neighbor_iter(&[pos.x, pos.y])
            .take(k)
            .map(|e| e.key)
            .collect()
    }
}

//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! Sessions call routing via the [`Router`] trait, so applications can swap
//! in A* or a contraction hierarchy without touching the traversal code.
//!
//! # Non-guarantees
//!
//! - When several paths share the minimal cost, which one is returned is
//!   implementation-defined.  The heap orders by cost only and neighbour
//!   iteration follows hash-map order, so the choice may change between
//!   graph builds.
//! - Duplicate input segments resolve last-write-wins in the builder; the
//!   planner sees whichever weight survived.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::collections::hash_map::Entry;

use vt_core::{Coordinate, NodeKey};

use crate::graph::KeyMap;
use crate::{RoadGraph, SpatialError, SpatialResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: node keys from source to destination
/// (both inclusive) and the summed planar edge weight.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Nodes to visit in order.  Consecutive entries are adjacent.
    pub nodes: Vec<NodeKey>,
    /// Sum of edge weights along `nodes`, in planar frame units.
    pub total_weight: f64,
}

impl Route {
    /// `true` if source and destination are the same node (one entry, no
    /// segments).
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() < 2
    }

    /// Number of edges traversed.
    pub fn segment_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<NodeKey> {
        self.nodes.first().copied()
    }

    pub fn end(&self) -> Option<NodeKey> {
        self.nodes.last().copied()
    }

    /// Decode every node to its planar cell centre.
    pub fn coordinates(&self, graph: &RoadGraph) -> Vec<Coordinate> {
        self.nodes.iter().map(|&k| graph.center(k)).collect()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// Implementations must be `Send + Sync` so planning can be moved onto a
/// worker thread and the finished [`Route`] handed back.
pub trait Router: Send + Sync {
    /// Compute a route from `from` to `to`.
    ///
    /// `from == to` yields a trivial single-node route.  Missing endpoints
    /// give [`SpatialError::NodeNotFound`], unreachable ones
    /// [`SpatialError::NoRoute`].
    fn route(&self, graph: &RoadGraph, from: NodeKey, to: NodeKey) -> SpatialResult<Route>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra over the adjacency map, stopping as soon as the
/// destination is settled.  Zero-weight edges are traversed like any other.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(&self, graph: &RoadGraph, from: NodeKey, to: NodeKey) -> SpatialResult<Route> {
        dijkstra(graph, from, to)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

#[derive(Copy, Clone)]
struct State {
    cost: f64,
    node: NodeKey,
}

// Min-heap by cost (reversed from standard Rust BinaryHeap).
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.total_cmp(&self.cost)
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

fn dijkstra(graph: &RoadGraph, from: NodeKey, to: NodeKey) -> SpatialResult<Route> {
    for key in [from, to] {
        if !graph.contains(key) {
            return Err(SpatialError::NodeNotFound(key));
        }
    }
    if from == to {
        return Ok(Route { nodes: vec![from], total_weight: 0.0 });
    }

    // dist[v] = best known cost to reach v; prev[v] = predecessor on that path.
    let mut dist: KeyMap<f64> = KeyMap::default();
    let mut prev: KeyMap<NodeKey> = KeyMap::default();
    let mut heap = BinaryHeap::new();

    dist.insert(from, 0.0);
    heap.push(State { cost: 0.0, node: from });

    while let Some(State { cost, node }) = heap.pop() {
        if node == to {
            let route = reconstruct(&prev, from, to, cost);
            log::debug!(
                "route {from} -> {to}: {} nodes, weight {:.2}",
                route.nodes.len(),
                route.total_weight
            );
            return Ok(route);
        }

        // Skip stale heap entries.
        if dist.get(&node).is_some_and(|&best| cost > best) {
            continue;
        }

        for (next, weight) in graph.neighbors(node) {
            let next_cost = cost + weight;
            match dist.entry(next) {
                Entry::Vacant(e) => {
                    e.insert(next_cost);
                    prev.insert(next, node);
                    heap.push(State { cost: next_cost, node: next });
                }
                Entry::Occupied(mut e) => {
                    if next_cost < *e.get() {
                        *e.get_mut() = next_cost;
                        prev.insert(next, node);
                        heap.push(State { cost: next_cost, node: next });
                    }
                }
            }
        }
    }

    Err(SpatialError::NoRoute { from, to })
}

fn reconstruct(prev: &KeyMap<NodeKey>, from: NodeKey, to: NodeKey, total: f64) -> Route {
    let mut nodes = vec![to];
    let mut cur = to;
    while cur != from {
        match prev.get(&cur) {
            Some(&p) => {
                nodes.push(p);
                cur = p;
            }
            None => break,
        }
    }
    nodes.reverse();
    Route { nodes, total_weight: total }
}

//! Road graph representation and builder.
//!
//! # Data layout
//!
//! The graph is an undirected adjacency map keyed by quantized coordinates:
//!
//! ```text
//! NodeKey → { neighbour NodeKey → planar edge length }
//! ```
//!
//! Every edge is stored twice (once per direction) with the same weight, so
//! `weight(a, b) == weight(b, a)` always holds.  Node keys come from a
//! [`Quantizer`]; endpoints of independent polylines that fall into the same
//! cell become one junction.
//!
//! # Lifecycle
//!
//! Built once per geometry load with [`RoadGraphBuilder`], then immutable.
//! Snapping and routing take `&RoadGraph`, so a built graph can be shared
//! freely (including across threads).

use vt_core::{Coordinate, NodeKey, Quantizer};

// ── Hash map selection ────────────────────────────────────────────────────────

#[cfg(feature = "fx-hash")]
pub(crate) type KeyMap<V> = rustc_hash::FxHashMap<NodeKey, V>;

#[cfg(not(feature = "fx-hash"))]
pub(crate) type KeyMap<V> = std::collections::HashMap<NodeKey, V>;

// ── RoadGraph ─────────────────────────────────────────────────────────────────

/// Undirected, weighted road graph over [`NodeKey`]s.
///
/// Do not construct directly; use [`RoadGraphBuilder`] or
/// [`RoadGraph::from_polylines`].
#[derive(Clone, Debug)]
pub struct RoadGraph {
    quantizer: Quantizer,
    pub(crate) adjacency: KeyMap<KeyMap<f64>>,
    edge_count: usize,
}

impl RoadGraph {
    /// An empty graph.  Snapping returns `None` and routing reports
    /// [`SpatialError::NodeNotFound`][crate::SpatialError::NodeNotFound].
    pub fn empty() -> Self {
        RoadGraphBuilder::new().build()
    }

    /// Build a graph from `polylines` in one call.
    pub fn from_polylines<I, P>(quantizer: Quantizer, polylines: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[Coordinate]>,
    {
        let mut b = RoadGraphBuilder::with_quantizer(quantizer);
        b.add_polylines(polylines);
        b.build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    #[inline]
    pub fn quantizer(&self) -> &Quantizer {
        &self.quantizer
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    #[inline]
    pub fn contains(&self, key: NodeKey) -> bool {
        self.adjacency.contains_key(&key)
    }

    /// All node keys, in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeKey> + '_ {
        self.adjacency.keys().copied()
    }

    /// Neighbours of `key` with their edge weights.  Empty for unknown keys.
    #[inline]
    pub fn neighbors(&self, key: NodeKey) -> impl Iterator<Item = (NodeKey, f64)> + '_ {
        self.adjacency
            .get(&key)
            .into_iter()
            .flat_map(|n| n.iter().map(|(&k, &w)| (k, w)))
    }

    pub fn degree(&self, key: NodeKey) -> usize {
        self.adjacency.get(&key).map_or(0, |n| n.len())
    }

    /// Weight of the edge `a`–`b`, if it exists.
    pub fn weight(&self, a: NodeKey, b: NodeKey) -> Option<f64> {
        self.adjacency.get(&a)?.get(&b).copied()
    }

    /// Approximate planar position of `key` (its quantization cell centre).
    #[inline]
    pub fn center(&self, key: NodeKey) -> Coordinate {
        self.quantizer.center(key)
    }
}

// ── RoadGraphBuilder ──────────────────────────────────────────────────────────

/// Construct a [`RoadGraph`] from polylines, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use vt_core::Coordinate;
/// use vt_spatial::RoadGraphBuilder;
///
/// let mut b = RoadGraphBuilder::new();
/// b.add_polyline(&[Coordinate::new(0.0, 0.0), Coordinate::new(10.0, 0.0)]);
/// b.add_polyline(&[Coordinate::new(10.0, 0.0), Coordinate::new(10.0, 10.0)]);
/// let graph = b.build();
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// ```
pub struct RoadGraphBuilder {
    quantizer: Quantizer,
    adjacency: KeyMap<KeyMap<f64>>,
    segments:  usize,
    collapsed: usize,
    skipped:   usize,
}

impl RoadGraphBuilder {
    /// Builder using the default two-digit quantizer.
    pub fn new() -> Self {
        Self::with_quantizer(Quantizer::default())
    }

    pub fn with_quantizer(quantizer: Quantizer) -> Self {
        Self {
            quantizer,
            adjacency: KeyMap::default(),
            segments:  0,
            collapsed: 0,
            skipped:   0,
        }
    }

    /// Add every consecutive segment of `coords`.  Fewer than two
    /// coordinates add nothing.
    pub fn add_polyline(&mut self, coords: &[Coordinate]) {
        for pair in coords.windows(2) {
            self.add_segment(pair[0], pair[1]);
        }
    }

    pub fn add_polylines<I, P>(&mut self, polylines: I)
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[Coordinate]>,
    {
        for line in polylines {
            self.add_polyline(line.as_ref());
        }
    }

    /// Add one undirected segment `a`–`b`.
    ///
    /// - Weight is the planar distance between the raw coordinates.
    /// - A repeated edge overwrites the earlier weight (last write wins).
    /// - If both endpoints fall into the same key the node is registered but
    ///   no self-loop is stored.
    /// - Segments with a non-finite endpoint are dropped.
    pub fn add_segment(&mut self, a: Coordinate, b: Coordinate) {
        if !(a.is_finite() && b.is_finite()) {
            self.skipped += 1;
            log::trace!("dropping segment with non-finite endpoint {a} -> {b}");
            return;
        }
        self.segments += 1;

        let key_a = self.quantizer.key(a);
        let key_b = self.quantizer.key(b);
        self.adjacency.entry(key_a).or_default();
        self.adjacency.entry(key_b).or_default();

        if key_a == key_b {
            self.collapsed += 1;
            log::trace!("segment {a} -> {b} collapses to node {key_a}");
            return;
        }

        let weight = a.distance(b);
        if let Some(n) = self.adjacency.get_mut(&key_a) {
            n.insert(key_b, weight);
        }
        if let Some(n) = self.adjacency.get_mut(&key_b) {
            n.insert(key_a, weight);
        }
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Segments accepted so far (including collapsed ones).
    pub fn segment_count(&self) -> usize {
        self.segments
    }

    /// Consume the builder and produce an immutable [`RoadGraph`].
    pub fn build(self) -> RoadGraph {
        let directed: usize = self.adjacency.values().map(|n| n.len()).sum();
        debug_assert_eq!(directed % 2, 0, "adjacency must be symmetric");
        let edge_count = directed / 2;

        log::debug!(
            "built road graph: {} nodes, {} edges from {} segments ({} collapsed, {} dropped)",
            self.adjacency.len(),
            edge_count,
            self.segments,
            self.collapsed,
            self.skipped,
        );

        RoadGraph {
            quantizer: self.quantizer,
            adjacency: self.adjacency,
            edge_count,
        }
    }
}

impl Default for RoadGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

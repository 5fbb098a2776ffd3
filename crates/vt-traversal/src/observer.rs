//! Traversal observer trait for rendering hooks and data collection.

use vt_core::{Coordinate, GeoPoint, Tick};

use crate::TraversalStatus;

// ── Events ────────────────────────────────────────────────────────────────────

/// Everything a renderer needs after one advancing tick.
#[derive(Debug, Clone, Copy)]
pub struct TickEvent<'a> {
    /// Ticks processed so far, including this one.
    pub tick: Tick,
    /// Simulated milliseconds since the traversal started.
    pub elapsed_ms: u64,
    /// Index of the route coordinate now occupied.
    pub step: usize,
    /// Entity position: exactly one route coordinate.
    pub position: Coordinate,
    pub geo_position: GeoPoint,
    /// Great-circle length of the segment just travelled.
    pub segment_m: f64,
    /// Cumulative distance in metres.
    pub distance_m: f64,
    pub pulse_radius: f64,
    /// Path travelled so far, for drawing a growing trace.
    pub traveled: &'a [Coordinate],
}

/// Final figures reported when a traversal stops.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraversalSummary {
    pub status:     TraversalStatus,
    pub ticks:      Tick,
    pub step:       usize,
    pub distance_m: f64,
}

// ── Observer trait ────────────────────────────────────────────────────────────

/// Callbacks invoked by [`Traversal::tick`][crate::Traversal::tick].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: distance printer
///
/// ```rust,ignore
/// struct Odometer;
///
/// impl TraversalObserver for Odometer {
///     fn on_tick(&mut self, event: &TickEvent<'_>) {
///         println!("{}: {:.2} km", event.tick, event.distance_m / 1000.0);
///     }
/// }
/// ```
pub trait TraversalObserver {
    /// Called after every tick that moved the entity.
    fn on_tick(&mut self, _event: &TickEvent<'_>) {}

    /// Called once, right after the tick that reached the last node.
    ///
    /// Not called for a single-node route: [`Traversal::start`] returns it
    /// already finished and no tick ever runs.  Check
    /// [`Traversal::status`] after starting to catch that case.
    ///
    /// [`Traversal::start`]: crate::Traversal::start
    /// [`Traversal::status`]: crate::Traversal::status
    fn on_finished(&mut self, _summary: &TraversalSummary) {}

    /// Called once when a running traversal is cancelled from inside
    /// `tick` (road layer hidden).
    fn on_cancelled(&mut self, _summary: &TraversalSummary) {}
}

/// A [`TraversalObserver`] that does nothing.
pub struct NoopObserver;

impl TraversalObserver for NoopObserver {}

// ── TraceRecorder ─────────────────────────────────────────────────────────────

/// Owned copy of a [`TickEvent`] without the borrowed trace.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickRecord {
    pub tick:         Tick,
    pub elapsed_ms:   u64,
    pub step:         usize,
    pub position:     Coordinate,
    pub geo_position: GeoPoint,
    pub segment_m:    f64,
    pub distance_m:   f64,
    pub pulse_radius: f64,
}

/// Collects every tick plus the final summary.  Used by tests and the
/// trace exporter.
#[derive(Debug, Default, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TraceRecorder {
    pub ticks:   Vec<TickRecord>,
    /// Full travelled path as of the last recorded tick.
    pub trace:   Vec<Coordinate>,
    pub summary: Option<TraversalSummary>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cumulative distance at the last recorded tick.
    pub fn last_distance_m(&self) -> Option<f64> {
        self.ticks.last().map(|t| t.distance_m)
    }
}

impl TraversalObserver for TraceRecorder {
    fn on_tick(&mut self, e: &TickEvent<'_>) {
        self.ticks.push(TickRecord {
            tick:         e.tick,
            elapsed_ms:   e.elapsed_ms,
            step:         e.step,
            position:     e.position,
            geo_position: e.geo_position,
            segment_m:    e.segment_m,
            distance_m:   e.distance_m,
            pulse_radius: e.pulse_radius,
        });
        // The trace only ever grows by one point per tick.
        if self.trace.is_empty() {
            self.trace.extend_from_slice(e.traveled);
        } else {
            self.trace.push(e.position);
        }
    }

    fn on_finished(&mut self, summary: &TraversalSummary) {
        self.summary = Some(*summary);
    }

    fn on_cancelled(&mut self, summary: &TraversalSummary) {
        self.summary = Some(*summary);
    }
}

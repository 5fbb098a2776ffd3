//! Per-traversal mutable state.

use vt_core::{Coordinate, PulseConfig};

// ── Pulse ─────────────────────────────────────────────────────────────────────

/// Oscillating marker radius used only for visual feedback.
///
/// Starts at `min_radius`, grows by `step` each advance until it reaches
/// `max_radius`, then shrinks back, forever.  Always within
/// `[min_radius, max_radius]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pulse {
    pub radius:  f64,
    pub growing: bool,
    config:      PulseConfig,
}

impl Pulse {
    pub fn new(config: PulseConfig) -> Self {
        Self { radius: config.min_radius, growing: true, config }
    }

    /// Move one step and return the new radius.
    pub fn advance(&mut self) -> f64 {
        let c = &self.config;
        if self.growing {
            self.radius += c.step;
        } else {
            self.radius -= c.step;
        }
        if self.radius >= c.max_radius {
            self.growing = false;
        }
        if self.radius <= c.min_radius {
            self.growing = true;
        }
        self.radius = self.radius.clamp(c.min_radius, c.max_radius);
        self.radius
    }

    #[inline]
    pub fn config(&self) -> &PulseConfig {
        &self.config
    }
}

// ── TraversalStatus ───────────────────────────────────────────────────────────

/// Lifecycle of a [`Traversal`][crate::Traversal].
///
/// ```text
/// Idle ──start──▶ Running ──last step──▶ Finished
///                    │
///                    └──cancel / layer hidden──▶ Cancelled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TraversalStatus {
    Idle,
    Running,
    Finished,
    Cancelled,
}

impl TraversalStatus {
    /// `true` for `Finished` and `Cancelled`; no further updates happen.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Finished | Self::Cancelled)
    }
}

// ── TraversalState ────────────────────────────────────────────────────────────

/// Position, odometer and visuals of one traversal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraversalState {
    /// Index of the route coordinate the entity currently sits on.
    pub step: usize,

    /// Cumulative great-circle distance in metres.  Never decreases.
    pub distance_m: f64,

    /// Marker pulse.
    pub pulse: Pulse,

    /// Route coordinates visited so far, starting with the first one.
    pub traveled: Vec<Coordinate>,
}

impl TraversalState {
    /// State at the start of `route`, continuing from `carried_distance_m`.
    pub fn at_start(route: &[Coordinate], carried_distance_m: f64, pulse: PulseConfig) -> Self {
        Self {
            step:       0,
            distance_m: carried_distance_m.max(0.0),
            pulse:      Pulse::new(pulse),
            traveled:   route.first().copied().into_iter().collect(),
        }
    }
}

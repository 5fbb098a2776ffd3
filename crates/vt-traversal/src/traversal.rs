//! The traversal handle: walks a route one node per tick.

use vt_core::{Cadence, Coordinate, Projection, Tick, TraceConfig};
use vt_spatial::{RoadGraph, Route};

use crate::{
    TickEvent, TraversalError, TraversalObserver, TraversalResult, TraversalState,
    TraversalStatus, TraversalSummary,
};

/// Result of one call to [`Traversal::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The entity moved one node and more nodes remain.
    Advanced,
    /// The entity moved onto the last node; the traversal is now finished.
    Finished,
    /// The road layer was hidden; the traversal stopped without moving.
    Cancelled,
    /// Nothing happened: the traversal was not running.
    Inactive,
}

/// Owned handle for one route animation.
///
/// Replaces an ambient "current timer" with an explicit value: whoever holds
/// the handle drives it with [`tick`](Self::tick) and stops it with
/// [`cancel`](Self::cancel).  Dropping the handle stops it too.
///
/// # Type parameter
///
/// `P` converts planar route coordinates to lon/lat for great-circle
/// distance (e.g. [`vt_core::WebMercator`]).
pub struct Traversal<P: Projection> {
    projection: P,
    cadence:    Cadence,
    route:      Vec<Coordinate>,
    state:      TraversalState,
    status:     TraversalStatus,
    ticks:      Tick,
    carried_m:  f64,
}

impl<P: Projection> Traversal<P> {
    /// A handle with no route.  Every tick is [`TickOutcome::Inactive`].
    pub fn idle(projection: P, config: &TraceConfig) -> Self {
        Self {
            projection,
            cadence:   config.cadence(),
            route:     Vec::new(),
            state:     TraversalState::at_start(&[], 0.0, config.pulse),
            status:    TraversalStatus::Idle,
            ticks:     Tick::ZERO,
            carried_m: 0.0,
        }
    }

    /// Start walking `route` (planar coordinates, one per node).
    ///
    /// The odometer continues from `carried_distance_m`.  A single-node
    /// route is finished immediately.
    ///
    /// # Errors
    ///
    /// [`TraversalError::EmptyRoute`] for an empty coordinate list and
    /// [`TraversalError::Config`] for an invalid configuration.
    pub fn start(
        route:              Vec<Coordinate>,
        projection:         P,
        config:             &TraceConfig,
        carried_distance_m: f64,
    ) -> TraversalResult<Self> {
        config.validate()?;
        if route.is_empty() {
            return Err(TraversalError::EmptyRoute);
        }

        let state = TraversalState::at_start(&route, carried_distance_m, config.pulse);
        let status = if route.len() < 2 {
            TraversalStatus::Finished
        } else {
            TraversalStatus::Running
        };
        log::info!(
            "traversal started: {} nodes, {} ms/tick, odometer {:.1} m",
            route.len(),
            config.tick_interval_ms,
            state.distance_m
        );

        Ok(Self {
            projection,
            cadence: config.cadence(),
            carried_m: state.distance_m,
            route,
            state,
            status,
            ticks: Tick::ZERO,
        })
    }

    /// Convenience: decode `route` against `graph` and [`start`](Self::start).
    pub fn for_route(
        route:              &Route,
        graph:              &RoadGraph,
        projection:         P,
        config:             &TraceConfig,
        carried_distance_m: f64,
    ) -> TraversalResult<Self> {
        Self::start(route.coordinates(graph), projection, config, carried_distance_m)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn status(&self) -> TraversalStatus {
        self.status
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.status == TraversalStatus::Running
    }

    #[inline]
    pub fn state(&self) -> &TraversalState {
        &self.state
    }

    pub fn route(&self) -> &[Coordinate] {
        &self.route
    }

    /// Current entity position; `None` only for an idle handle.
    pub fn position(&self) -> Option<Coordinate> {
        self.route.get(self.state.step).copied()
    }

    /// Cumulative distance including whatever was carried in at start.
    #[inline]
    pub fn distance_m(&self) -> f64 {
        self.state.distance_m
    }

    /// Distance covered by this traversal alone.
    #[inline]
    pub fn episode_distance_m(&self) -> f64 {
        self.state.distance_m - self.carried_m
    }

    /// Number of advancing ticks so far.
    #[inline]
    pub fn ticks(&self) -> Tick {
        self.ticks
    }

    /// Segments still to travel.
    pub fn remaining_steps(&self) -> usize {
        self.route.len().saturating_sub(1).saturating_sub(self.state.step)
    }

    #[inline]
    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    pub fn summary(&self) -> TraversalSummary {
        TraversalSummary {
            status:     self.status,
            ticks:      self.ticks,
            step:       self.state.step,
            distance_m: self.state.distance_m,
        }
    }

    // ── Control ───────────────────────────────────────────────────────────

    /// Stop a running traversal where it stands.  The odometer keeps its
    /// value.  Returns `false` if the traversal was not running.
    pub fn cancel(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.status = TraversalStatus::Cancelled;
        log::info!(
            "traversal cancelled at step {}/{}, {:.1} m",
            self.state.step,
            self.route.len().saturating_sub(1),
            self.state.distance_m
        );
        true
    }

    /// Zero the odometer between episodes.
    ///
    /// Refused while running, since distance never decreases within one
    /// episode.  Returns `true` if the odometer was reset.
    pub fn reset_odometer(&mut self) -> bool {
        if self.is_running() {
            log::debug!("odometer reset refused: traversal is running");
            return false;
        }
        self.state.distance_m = 0.0;
        self.carried_m = 0.0;
        true
    }

    /// Process one tick.
    ///
    /// `layer_visible` is the road-layer visibility signal; when it is
    /// `false` the traversal is cancelled instead of advancing.
    pub fn tick<O: TraversalObserver>(
        &mut self,
        layer_visible: bool,
        observer:      &mut O,
    ) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Inactive;
        }
        if !layer_visible {
            self.cancel();
            observer.on_cancelled(&self.summary());
            return TickOutcome::Cancelled;
        }

        let step = self.state.step;
        let from = self.route[step];
        let to = self.route[step + 1];

        let geo_from = self.projection.to_geo(from);
        let geo_to = self.projection.to_geo(to);
        // `max` also maps a NaN segment to zero, keeping the odometer monotone.
        let segment_m = geo_from.distance_m(geo_to).max(0.0);

        self.state.distance_m += segment_m;
        let pulse_radius = self.state.pulse.advance();
        self.state.traveled.push(to);
        self.state.step = step + 1;
        self.ticks = self.ticks.next();

        let finished = self.state.step + 1 >= self.route.len();
        if finished {
            self.status = TraversalStatus::Finished;
        }

        log::trace!(
            "{}: step {} at {to}, +{segment_m:.2} m, total {:.2} m",
            self.ticks,
            self.state.step,
            self.state.distance_m
        );

        observer.on_tick(&TickEvent {
            tick:         self.ticks,
            elapsed_ms:   self.cadence.elapsed_ms(self.ticks),
            step:         self.state.step,
            position:     to,
            geo_position: geo_to,
            segment_m,
            distance_m:   self.state.distance_m,
            pulse_radius,
            traveled:     &self.state.traveled,
        });

        if finished {
            log::info!(
                "traversal finished after {} ticks, {:.1} m",
                self.ticks.0,
                self.state.distance_m
            );
            observer.on_finished(&self.summary());
            TickOutcome::Finished
        } else {
            TickOutcome::Advanced
        }
    }
}

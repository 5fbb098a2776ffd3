//! The `Session` struct: point selection and plan-and-drive.

use vt_core::{Coordinate, Projection, Tick, TraceConfig, WebMercator};
use vt_spatial::{DijkstraRouter, RoadGraph, Route, Router};
use vt_traversal::{TickOutcome, TickSource, Traversal, TraversalObserver, run_to_end};

use crate::Advisory;

/// What a map click did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Click {
    /// First point of a new pair.
    Start,
    /// Second point; the pair is complete.
    End,
    /// A pair was already complete: it was replaced by this single point and
    /// any running traversal was cancelled.
    Restart,
    /// Point adding is switched off; nothing changed.
    Ignored,
}

/// One interactive routing session over a fixed road graph.
///
/// Holds the graph, the clicked points, the last planned route, the current
/// [`Traversal`] handle and the road-layer visibility signal.  Owns exactly
/// one traversal at a time: planning a new route cancels the old one before
/// the new one starts.
///
/// Create via [`SessionBuilder`][crate::SessionBuilder].
pub struct Session<R: Router = DijkstraRouter, P: Projection + Clone = WebMercator> {
    config:        TraceConfig,
    graph:         RoadGraph,
    router:        R,
    projection:    P,
    layer_visible: bool,
    adding_points: bool,
    selection:     Vec<Coordinate>,
    route:         Option<Route>,
    traversal:     Traversal<P>,
    vehicle:       Option<Coordinate>,
}

impl<R: Router, P: Projection + Clone> Session<R, P> {
    pub(crate) fn new(
        config:        TraceConfig,
        graph:         RoadGraph,
        router:        R,
        projection:    P,
        layer_visible: bool,
        adding_points: bool,
    ) -> Self {
        let traversal = Traversal::idle(projection.clone(), &config);
        Self {
            config,
            graph,
            router,
            projection,
            layer_visible,
            adding_points,
            selection: Vec::with_capacity(2),
            route: None,
            traversal,
            vehicle: None,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    pub fn graph(&self) -> &RoadGraph {
        &self.graph
    }

    /// The last successfully planned route.
    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    pub fn traversal(&self) -> &Traversal<P> {
        &self.traversal
    }

    /// Clicked points: empty, `[start]`, or `[start, end]`.
    pub fn selection(&self) -> &[Coordinate] {
        &self.selection
    }

    /// Where the vehicle marker is drawn, if it has been placed.
    pub fn vehicle_position(&self) -> Option<Coordinate> {
        self.vehicle
    }

    pub fn road_layer_visible(&self) -> bool {
        self.layer_visible
    }

    pub fn adding_points(&self) -> bool {
        self.adding_points
    }

    /// Cumulative distance in metres across all drives since the last
    /// [`reset_distance`](Self::reset_distance).
    pub fn distance_m(&self) -> f64 {
        self.traversal.distance_m()
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_m() / 1000.0
    }

    /// Odometer text as displayed, e.g. `"1.25 km"`.
    pub fn distance_label(&self) -> String {
        format!("{:.2} km", self.distance_km())
    }

    // ── Controls ──────────────────────────────────────────────────────────

    /// Show or hide the road layer.  Hiding it stops a running traversal at
    /// its next tick.
    pub fn set_road_layer_visible(&mut self, visible: bool) {
        self.layer_visible = visible;
    }

    /// Switch click-to-select on or off.
    pub fn set_adding_points(&mut self, enabled: bool) {
        self.adding_points = enabled;
    }

    /// Forget the clicked points.  The route and traversal are kept.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Zero the odometer.  Only acts while no traversal is running; returns
    /// `false` and leaves the distance alone otherwise.
    pub fn reset_distance(&mut self) -> bool {
        self.traversal.reset_odometer()
    }

    /// Handle a map click at `coord`.
    ///
    /// # Errors
    ///
    /// [`Advisory::EnableRoadLayer`] when the road layer is hidden; the
    /// click is dropped.
    pub fn select_point(&mut self, coord: Coordinate) -> Result<Click, Advisory> {
        if !self.layer_visible {
            return Err(advise(Advisory::EnableRoadLayer));
        }
        if !self.adding_points {
            return Ok(Click::Ignored);
        }

        let click = match self.selection.len() {
            0 => Click::Start,
            1 => Click::End,
            _ => {
                self.selection.clear();
                self.traversal.cancel();
                self.vehicle = Some(coord);
                Click::Restart
            }
        };
        self.selection.push(coord);
        log::debug!("selected point {} at {coord}", self.selection.len());
        Ok(click)
    }

    /// Plan a route between the two selected points and start driving it.
    ///
    /// Both points are snapped to their nearest graph node.  On success any
    /// previous traversal is cancelled and a new one starts, continuing the
    /// odometer.
    ///
    /// # Errors
    ///
    /// | Advisory          | When                                           |
    /// |-------------------|------------------------------------------------|
    /// | `EnableRoadLayer` | road layer hidden                              |
    /// | `SelectTwoPoints` | fewer than two points selected                 |
    /// | `NoPathFound`     | graph empty, or no path between the two nodes  |
    ///
    /// On error the previous route, traversal and odometer are untouched.
    pub fn start_driving(&mut self) -> Result<&Route, Advisory> {
        if !self.layer_visible {
            return Err(advise(Advisory::EnableRoadLayer));
        }
        let (start, end) = match self.selection[..] {
            [start, end] => (start, end),
            _ => return Err(advise(Advisory::SelectTwoPoints)),
        };

        let (Some(from), Some(to)) = (self.graph.snap_to_node(start), self.graph.snap_to_node(end))
        else {
            return Err(advise(Advisory::NoPathFound));
        };

        let route = self.router.route(&self.graph, from, to).map_err(|e| {
            log::debug!("planning failed: {e}");
            advise(Advisory::NoPathFound)
        })?;

        let coords = route.coordinates(&self.graph);
        let carried = self.traversal.distance_m();
        let next = Traversal::start(coords, self.projection.clone(), &self.config, carried)
            .map_err(|e| {
                log::error!("could not start traversal: {e}");
                Advisory::NoPathFound
            })?;
        self.traversal.cancel();
        self.traversal = next;
        self.vehicle = self.traversal.position();

        Ok(&*self.route.insert(route))
    }

    /// Forward one tick to the current traversal with the current layer
    /// visibility.
    pub fn tick<O: TraversalObserver>(&mut self, observer: &mut O) -> TickOutcome {
        let outcome = self.traversal.tick(self.layer_visible, observer);
        if outcome != TickOutcome::Inactive {
            self.vehicle = self.traversal.position();
        }
        outcome
    }

    /// Drive the current traversal until it stops, one tick per `source`
    /// wait.  Returns the traversal's tick count.
    pub fn run<S, O>(&mut self, source: &mut S, observer: &mut O) -> Tick
    where
        S: TickSource,
        O: TraversalObserver,
    {
        if !self.traversal.is_running() {
            return self.traversal.ticks();
        }
        let visible = self.layer_visible;
        let ticks = run_to_end(&mut self.traversal, source, || visible, observer);
        self.vehicle = self.traversal.position();
        ticks
    }
}

fn advise(advisory: Advisory) -> Advisory {
    log::warn!("{advisory}");
    advisory
}

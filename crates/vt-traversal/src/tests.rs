//! Unit tests for vt-traversal.

use vt_core::{Coordinate, GeoPoint, LonLat, Projection, PulseConfig, TraceConfig, WebMercator};

use crate::{
    ManualTicker, NoopObserver, Pulse, TickOutcome, TraceRecorder, Traversal, TraversalError,
    TraversalStatus, run_to_end,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn c(x: f64, y: f64) -> Coordinate {
    Coordinate::new(x, y)
}

/// Three lon/lat nodes: north one degree, then east one degree.
fn lon_lat_route() -> Vec<Coordinate> {
    vec![c(0.0, 0.0), c(0.0, 1.0), c(1.0, 1.0)]
}

/// Five Web-Mercator nodes around Tamale, ~100–300 m apart.
fn mercator_route() -> Vec<Coordinate> {
    [
        (-0.8393, 9.4008),
        (-0.8380, 9.4008),
        (-0.8380, 9.4030),
        (-0.8355, 9.4031),
        (-0.8350, 9.4050),
    ]
    .into_iter()
    .map(|(lon, lat)| WebMercator::from_geo(GeoPoint::new(lon, lat)))
    .collect()
}

fn segment_m<P: Projection>(p: &P, a: Coordinate, b: Coordinate) -> f64 {
    p.to_geo(a).distance_m(p.to_geo(b))
}

fn start<P: Projection>(route: Vec<Coordinate>, p: P) -> Traversal<P> {
    Traversal::start(route, p, &TraceConfig::default(), 0.0).unwrap()
}

// ── Pulse ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod pulse {
    use super::*;

    #[test]
    fn grows_then_turns_at_max() {
        let mut p = Pulse::new(PulseConfig::default());
        assert_eq!(p.radius, 8.0);
        assert!(p.growing);
        for _ in 0..14 {
            p.advance();
        }
        assert_eq!(p.radius, 15.0);
        assert!(!p.growing);
        assert_eq!(p.advance(), 14.5);
    }

    #[test]
    fn stays_within_bounds() {
        let cfg = PulseConfig { min_radius: 2.0, max_radius: 3.3, step: 0.7 };
        let mut p = Pulse::new(cfg);
        for _ in 0..1_000 {
            let r = p.advance();
            assert!((cfg.min_radius..=cfg.max_radius).contains(&r), "radius {r}");
        }
    }
}

// ── Lifecycle ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod lifecycle {
    use super::*;

    #[test]
    fn idle_does_nothing() {
        let mut t = Traversal::idle(WebMercator, &TraceConfig::default());
        assert_eq!(t.status(), TraversalStatus::Idle);
        assert!(t.position().is_none());
        assert_eq!(t.tick(true, &mut NoopObserver), TickOutcome::Inactive);
        assert!(!t.cancel());
    }

    #[test]
    fn empty_route_rejected() {
        let r = Traversal::start(vec![], WebMercator, &TraceConfig::default(), 0.0);
        assert!(matches!(r, Err(TraversalError::EmptyRoute)));
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = TraceConfig { tick_interval_ms: 0, ..TraceConfig::default() };
        let r = Traversal::start(lon_lat_route(), LonLat, &cfg, 0.0);
        assert!(matches!(r, Err(TraversalError::Config(_))));
    }

    #[test]
    fn single_node_finishes_immediately() {
        let mut t = Traversal::start(vec![c(5.0, 5.0)], LonLat, &TraceConfig::default(), 42.0).unwrap();
        assert_eq!(t.status(), TraversalStatus::Finished);
        assert_eq!(t.position(), Some(c(5.0, 5.0)));
        assert_eq!(t.tick(true, &mut NoopObserver), TickOutcome::Inactive);
        assert_eq!(t.distance_m(), 42.0);
    }

    #[test]
    fn single_node_reports_no_terminal_event() {
        let mut t = Traversal::start(vec![c(1.0, 1.0)], LonLat, &TraceConfig::default(), 0.0).unwrap();
        let mut rec = TraceRecorder::new();
        assert_eq!(t.tick(true, &mut rec), TickOutcome::Inactive);
        assert!(rec.summary.is_none());
        assert_eq!(t.summary().status, TraversalStatus::Finished);
        assert_eq!(t.summary().ticks.0, 0);
    }

    #[test]
    fn finishes_on_last_node_then_goes_quiet() {
        let mut t = start(lon_lat_route(), LonLat);
        let mut rec = TraceRecorder::new();
        assert_eq!(t.status(), TraversalStatus::Running);
        assert_eq!(t.remaining_steps(), 2);

        assert_eq!(t.tick(true, &mut rec), TickOutcome::Advanced);
        assert_eq!(t.tick(true, &mut rec), TickOutcome::Finished);
        assert_eq!(t.status(), TraversalStatus::Finished);
        assert_eq!(t.remaining_steps(), 0);

        let d = t.distance_m();
        for _ in 0..5 {
            assert_eq!(t.tick(true, &mut rec), TickOutcome::Inactive);
        }
        assert_eq!(t.distance_m(), d);
        assert_eq!(rec.ticks.len(), 2);
        let summary = rec.summary.unwrap();
        assert_eq!(summary.status, TraversalStatus::Finished);
        assert_eq!(summary.ticks.0, 2);
        assert_eq!(summary.step, 2);
    }
}

// ── Distance & position ───────────────────────────────────────────────────────

#[cfg(test)]
mod distance {
    use super::*;

    #[test]
    fn cumulative_equals_sum_of_segments() {
        let route = mercator_route();
        let mut t = start(route.clone(), WebMercator);
        let mut expected = 0.0;
        for n in 0..route.len() - 1 {
            t.tick(true, &mut NoopObserver);
            expected += segment_m(&WebMercator, route[n], route[n + 1]);
            assert!((t.distance_m() - expected).abs() < 1e-6, "after {} ticks", n + 1);
        }
        assert_eq!(t.status(), TraversalStatus::Finished);
    }

    #[test]
    fn monotonically_non_decreasing() {
        let mut route = mercator_route();
        // A repeated node is a zero-length hop.
        route.insert(2, route[1]);
        let mut t = start(route, WebMercator);
        let mut rec = TraceRecorder::new();
        let mut last = t.distance_m();
        while t.is_running() {
            t.tick(true, &mut rec);
            assert!(t.distance_m() >= last);
            last = t.distance_m();
        }
        assert_eq!(rec.ticks[1].segment_m, 0.0);
    }

    #[test]
    fn great_circle_not_planar() {
        let route = lon_lat_route();
        let mut t = start(route, LonLat);
        t.tick(true, &mut NoopObserver);
        // One degree of latitude, not one planar unit.
        assert!((t.distance_m() - 111_195.08).abs() < 1.0, "got {}", t.distance_m());
    }

    #[test]
    fn position_is_always_a_route_node() {
        let route = mercator_route();
        let mut t = start(route.clone(), WebMercator);
        let mut rec = TraceRecorder::new();
        while t.is_running() {
            t.tick(true, &mut rec);
            assert_eq!(t.position(), Some(route[t.state().step]));
        }
        for r in &rec.ticks {
            assert_eq!(r.position, route[r.step]);
        }
    }

    #[test]
    fn traveled_path_grows_by_one_node() {
        let route = mercator_route();
        let mut t = start(route.clone(), WebMercator);
        assert_eq!(t.state().traveled, route[..1].to_vec());
        for k in 1..route.len() {
            t.tick(true, &mut NoopObserver);
            assert_eq!(t.state().traveled, route[..=k].to_vec());
        }
        let mut rec = TraceRecorder::new();
        let mut t = start(route.clone(), WebMercator);
        while t.is_running() {
            t.tick(true, &mut rec);
        }
        assert_eq!(rec.trace, route);
    }

    #[test]
    fn carried_distance_continues() {
        let route = lon_lat_route();
        let seg = segment_m(&LonLat, route[0], route[1]);
        let mut t = Traversal::start(route, LonLat, &TraceConfig::default(), 100.0).unwrap();
        t.tick(true, &mut NoopObserver);
        assert!((t.distance_m() - (100.0 + seg)).abs() < 1e-6);
        assert!((t.episode_distance_m() - seg).abs() < 1e-6);
    }

    #[test]
    fn odometer_reset_only_between_episodes() {
        let mut t = start(mercator_route(), WebMercator);
        t.tick(true, &mut NoopObserver);
        let d = t.distance_m();
        assert!(!t.reset_odometer());
        assert_eq!(t.distance_m(), d);

        assert!(t.cancel());
        assert!(t.reset_odometer());
        assert_eq!(t.distance_m(), 0.0);
        assert_eq!(t.episode_distance_m(), 0.0);
    }

    #[test]
    fn elapsed_follows_cadence() {
        let cfg = TraceConfig { tick_interval_ms: 250, ..TraceConfig::default() };
        let mut t = Traversal::start(mercator_route(), WebMercator, &cfg, 0.0).unwrap();
        let mut rec = TraceRecorder::new();
        while t.is_running() {
            t.tick(true, &mut rec);
        }
        let elapsed: Vec<u64> = rec.ticks.iter().map(|r| r.elapsed_ms).collect();
        assert_eq!(elapsed, vec![250, 500, 750, 1_000]);
    }

    #[test]
    fn pulse_reported_each_tick() {
        let mut t = start(mercator_route(), WebMercator);
        let mut rec = TraceRecorder::new();
        while t.is_running() {
            t.tick(true, &mut rec);
        }
        let radii: Vec<f64> = rec.ticks.iter().map(|r| r.pulse_radius).collect();
        assert_eq!(radii, vec![8.5, 9.0, 9.5, 10.0]);
    }
}

// ── Cancellation ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod cancellation {
    use super::*;

    #[test]
    fn hidden_layer_cancels_without_moving() {
        let mut t = start(mercator_route(), WebMercator);
        let mut rec = TraceRecorder::new();
        t.tick(true, &mut rec);
        let d = t.distance_m();
        let pos = t.position();

        assert_eq!(t.tick(false, &mut rec), TickOutcome::Cancelled);
        assert_eq!(t.status(), TraversalStatus::Cancelled);
        assert_eq!(t.distance_m(), d);
        assert_eq!(t.position(), pos);
        assert_eq!(rec.summary.unwrap().status, TraversalStatus::Cancelled);

        // Showing the layer again does not resume.
        assert_eq!(t.tick(true, &mut rec), TickOutcome::Inactive);
        assert_eq!(rec.ticks.len(), 1);
    }

    #[test]
    fn explicit_cancel_keeps_distance() {
        let mut t = start(mercator_route(), WebMercator);
        t.tick(true, &mut NoopObserver);
        t.tick(true, &mut NoopObserver);
        let d = t.distance_m();
        assert!(t.cancel());
        assert!(!t.cancel());
        assert_eq!(t.distance_m(), d);
        assert!(d > 0.0);
        assert_eq!(t.tick(true, &mut NoopObserver), TickOutcome::Inactive);
    }

    #[test]
    fn cancel_after_finish_is_noop() {
        let mut t = start(lon_lat_route(), LonLat);
        while t.is_running() {
            t.tick(true, &mut NoopObserver);
        }
        assert!(!t.cancel());
        assert_eq!(t.status(), TraversalStatus::Finished);
    }
}

// ── Driver ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod driver {
    use super::*;

    #[test]
    fn runs_every_segment() {
        let route = mercator_route();
        let mut t = start(route.clone(), WebMercator);
        let mut ticker = ManualTicker::default();
        let ticks = run_to_end(&mut t, &mut ticker, || true, &mut NoopObserver);
        assert_eq!(ticks.0, (route.len() - 1) as u64);
        assert_eq!(ticker.waits, ticks.0);
        assert_eq!(t.status(), TraversalStatus::Finished);
    }

    #[test]
    fn stops_when_layer_hidden() {
        let mut t = start(mercator_route(), WebMercator);
        let mut ticker = ManualTicker::default();
        let mut checks = 0;
        let visible = || {
            checks += 1;
            checks <= 2
        };
        let ticks = run_to_end(&mut t, &mut ticker, visible, &mut NoopObserver);
        assert_eq!(ticks.0, 2);
        assert_eq!(ticker.waits, 3);
        assert_eq!(t.status(), TraversalStatus::Cancelled);
    }

    #[test]
    fn idle_handle_returns_at_once() {
        let mut t = Traversal::idle(LonLat, &TraceConfig::default());
        let mut ticker = ManualTicker::default();
        run_to_end(&mut t, &mut ticker, || true, &mut NoopObserver);
        assert_eq!(ticker.waits, 0);
    }
}

// ── Graph integration ─────────────────────────────────────────────────────────

#[cfg(test)]
mod with_graph {
    use vt_core::Quantizer;
    use vt_spatial::{DijkstraRouter, RoadGraph, Router};

    use super::*;

    #[test]
    fn for_route_decodes_graph_nodes() {
        let g = RoadGraph::from_polylines(
            Quantizer::default(),
            [vec![c(0.0, 0.0), c(10.0, 0.0), c(10.0, 10.0)]],
        );
        let from = g.snap_to_node(c(0.1, 0.1)).unwrap();
        let to = g.snap_to_node(c(9.9, 10.2)).unwrap();
        let route = DijkstraRouter.route(&g, from, to).unwrap();

        let mut t =
            Traversal::for_route(&route, &g, WebMercator, &TraceConfig::default(), 0.0).unwrap();
        assert_eq!(t.route(), &[c(0.0, 0.0), c(10.0, 0.0), c(10.0, 10.0)]);
        let mut ticker = ManualTicker::default();
        assert_eq!(run_to_end(&mut t, &mut ticker, || true, &mut NoopObserver).0, 2);
    }
}

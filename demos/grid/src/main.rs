//! grid: animated drive across a synthetic street grid.
//!
//! Builds a 6 × 6 Web-Mercator grid, clicks the south-west and north-east
//! corners, and drives the shortest route one node per tick on the real
//! cadence (100 ms by default).  A second leg drives back to show the
//! odometer carrying over.
//!
//! Run with: `RUST_LOG=info cargo run -p grid [config.json]`

mod network;

use std::fs;
use std::time::Instant;

use anyhow::Result;

use vt_core::TraceConfig;
use vt_session::SessionBuilder;
use vt_traversal::{IntervalTicker, TickEvent, TraversalObserver, TraversalSummary};

use network::build_roads;

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints one row per tick.
struct TickPrinter;

impl TraversalObserver for TickPrinter {
    fn on_tick(&mut self, e: &TickEvent<'_>) {
        println!(
            "{:<6} {:>5} {:>9.5} {:>9.5} {:>9.1} {:>10.3} {:>6.1}",
            e.tick.to_string(),
            e.step,
            e.geo_position.lon,
            e.geo_position.lat,
            e.segment_m,
            e.distance_m / 1000.0,
            e.pulse_radius,
        );
    }

    fn on_finished(&mut self, s: &TraversalSummary) {
        println!("-- arrived after {} ticks", s.ticks.0);
    }

    fn on_cancelled(&mut self, s: &TraversalSummary) {
        println!("-- cancelled at step {}", s.step);
    }
}

fn header() {
    println!(
        "{:<6} {:>5} {:>9} {:>9} {:>9} {:>10} {:>6}",
        "Tick", "Step", "Lon", "Lat", "Seg m", "Total km", "Pulse"
    );
    println!("{}", "-".repeat(60));
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    // 1. Configuration: optional JSON file, defaults otherwise.
    let config: TraceConfig = match std::env::args().nth(1) {
        Some(path) => serde_json::from_str(&fs::read_to_string(&path)?)?,
        None => TraceConfig::default(),
    };

    println!("=== grid: vehicle trace ===");
    println!(
        "Tick: {} ms  |  Key precision: {} digits",
        config.tick_interval_ms, config.key_precision
    );
    println!();

    // 2. Build the session (road graph built once here).
    let (roads, [sw, ne]) = build_roads();
    let mut session = SessionBuilder::new(config).polylines(&roads).build()?;
    println!(
        "Road graph: {} nodes, {} edges",
        session.graph().node_count(),
        session.graph().edge_count()
    );

    let mut ticker = IntervalTicker::new(session.config().cadence());
    let mut printer = TickPrinter;

    // 3. Outbound leg.
    log::info!("outbound leg: {sw} -> {ne}");
    session.select_point(sw)?;
    session.select_point(ne)?;
    let route = session.start_driving()?;
    println!(
        "Route: {} nodes, {:.1} m planar",
        route.nodes.len(),
        route.total_weight
    );
    println!();

    header();
    let t0 = Instant::now();
    session.run(&mut ticker, &mut printer);
    println!("Distance Travelled: {}", session.distance_label());
    println!();

    // 4. Return leg: a third click restarts the selection.
    log::info!("return leg: {ne} -> {sw}, odometer {}", session.distance_label());
    session.select_point(ne)?;
    session.select_point(sw)?;
    session.start_driving()?;
    header();
    session.run(&mut ticker, &mut printer);
    println!("Distance Travelled: {}", session.distance_label());

    // 5. Advisories are messages, not failures.
    session.set_road_layer_visible(false);
    if let Err(advisory) = session.start_driving() {
        log::info!("drive refused with road layer hidden");
        println!("Advisory: {advisory}");
    }

    println!();
    println!("Wall time: {:.3} s", t0.elapsed().as_secs_f64());
    Ok(())
}

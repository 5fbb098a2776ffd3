//! Export the road graph and one recorded drive for the visualization layer.
//!
//! Writes three JSON files to `output/grid/`:
//!   - `graph_nodes.json`: `[{key, x, y, lon, lat, degree}, …]`
//!   - `graph_edges.json`: `[{from, to, weight}, …]`, each edge once
//!   - `trace.json`: recorded ticks, travelled path, and summary
//!
//! Ticks are driven instantly; no sleeping.
//!
//! Run with: `cargo run -p grid --bin export_trace`

mod network;

use std::fs;

use anyhow::Result;
use serde_json::json;

use vt_core::{Projection, TraceConfig, WebMercator};
use vt_session::SessionBuilder;
use vt_traversal::{ManualTicker, TraceRecorder};

use network::build_roads;

const OUT_DIR: &str = "output/grid";

fn main() -> Result<()> {
    env_logger::init();

    let (roads, [sw, ne]) = build_roads();
    let mut session = SessionBuilder::new(TraceConfig::default())
        .polylines(&roads)
        .build()?;
    let graph = session.graph();

    fs::create_dir_all(OUT_DIR)?;

    // ── graph_nodes.json ──────────────────────────────────────────────────────
    let mut keys: Vec<_> = graph.nodes().collect();
    keys.sort_unstable();
    let nodes: Vec<serde_json::Value> = keys
        .iter()
        .map(|&k| {
            let c = graph.center(k);
            let geo = WebMercator.to_geo(c);
            json!({
                "key":    graph.quantizer().label(k),
                "x":      c.x,
                "y":      c.y,
                "lon":    geo.lon,
                "lat":    geo.lat,
                "degree": graph.degree(k),
            })
        })
        .collect();

    fs::write(
        format!("{OUT_DIR}/graph_nodes.json"),
        serde_json::to_string_pretty(&nodes)?,
    )?;
    println!("Wrote {OUT_DIR}/graph_nodes.json ({} nodes)", nodes.len());

    // ── graph_edges.json ──────────────────────────────────────────────────────
    let edges: Vec<serde_json::Value> = keys
        .iter()
        .flat_map(|&a| {
            graph
                .neighbors(a)
                .filter(move |&(b, _)| a < b)
                .map(move |(b, w)| {
                    json!({
                        "from":   graph.quantizer().label(a),
                        "to":     graph.quantizer().label(b),
                        "weight": w,
                    })
                })
        })
        .collect();

    fs::write(
        format!("{OUT_DIR}/graph_edges.json"),
        serde_json::to_string_pretty(&edges)?,
    )?;
    println!("Wrote {OUT_DIR}/graph_edges.json ({} edges)", edges.len());

    // ── trace.json ────────────────────────────────────────────────────────────
    session.select_point(sw)?;
    session.select_point(ne)?;
    session.start_driving()?;

    log::info!("recording drive {sw} -> {ne}");
    let mut recorder = TraceRecorder::new();
    session.run(&mut ManualTicker::default(), &mut recorder);

    fs::write(
        format!("{OUT_DIR}/trace.json"),
        serde_json::to_string_pretty(&recorder)?,
    )?;
    println!(
        "Wrote {OUT_DIR}/trace.json ({} ticks, {})",
        recorder.ticks.len(),
        session.distance_label()
    );

    Ok(())
}

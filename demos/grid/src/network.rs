//! Shared synthetic road grid.
//!
//! A 6 × 6 street grid with ~220 m blocks and one diagonal avenue, laid out
//! in Web-Mercator metres around central Tamale.  Both `grid` (the animated
//! drive) and `export_trace` (the JSON sidecar) call this.

use vt_core::{Coordinate, GeoPoint, WebMercator};

const ORIGIN_LON: f64 = -0.8530;
const ORIGIN_LAT: f64 = 9.3960;
const BLOCK_DEG:  f64 = 0.002;
const BLOCKS:     usize = 5;

fn node(i: usize, j: usize) -> Coordinate {
    WebMercator::from_geo(GeoPoint::new(
        ORIGIN_LON + i as f64 * BLOCK_DEG,
        ORIGIN_LAT + j as f64 * BLOCK_DEG,
    ))
}

/// Build the road polylines.
///
/// Returns `(polylines, [south_west_click, north_east_click])`; the clicks
/// sit a few metres off the corner intersections, as a user's would.
pub fn build_roads() -> (Vec<Vec<Coordinate>>, [Coordinate; 2]) {
    let mut roads = Vec::with_capacity(2 * (BLOCKS + 1) + 1);

    // East–west streets.
    for j in 0..=BLOCKS {
        roads.push((0..=BLOCKS).map(|i| node(i, j)).collect());
    }
    // North–south streets.
    for i in 0..=BLOCKS {
        roads.push((0..=BLOCKS).map(|j| node(i, j)).collect());
    }
    // Diagonal avenue across the middle blocks.
    roads.push((1..BLOCKS).map(|k| node(k, k)).collect());

    let sw = node(0, 0);
    let ne = node(BLOCKS, BLOCKS);
    let clicks = [
        Coordinate::new(sw.x + 4.0, sw.y - 3.0),
        Coordinate::new(ne.x - 2.5, ne.y + 5.0),
    ];
    (roads, clicks)
}

//! Planar → geographic conversion used for real-world distance.
//!
//! Reprojection of the input geometry is the caller's job; the graph only
//! ever sees one planar frame.  The traversal still needs longitude/latitude
//! to accumulate great-circle metres, so it goes through a [`Projection`].

use crate::{Coordinate, GeoPoint};

/// Semi-major axis of the WGS-84 ellipsoid, used as the sphere radius of
/// spherical Web-Mercator (EPSG:3857).
pub const WEB_MERCATOR_RADIUS_M: f64 = 6_378_137.0;

/// Converts a planar [`Coordinate`] to geographic form.
///
/// Implementations must be pure and `Send + Sync` so a session can be moved
/// onto a worker thread.
pub trait Projection: Send + Sync {
    fn to_geo(&self, c: Coordinate) -> GeoPoint;
}

/// Spherical Web-Mercator (EPSG:3857), the frame map viewers render in.
#[derive(Copy, Clone, Debug, Default)]
pub struct WebMercator;

impl WebMercator {
    /// Forward projection, the inverse of [`Projection::to_geo`].  Handy for
    /// building test networks from known lon/lat positions.
    pub fn from_geo(p: GeoPoint) -> Coordinate {
        let x = WEB_MERCATOR_RADIUS_M * p.lon.to_radians();
        let y = WEB_MERCATOR_RADIUS_M
            * (std::f64::consts::FRAC_PI_4 + p.lat.to_radians() * 0.5).tan().ln();
        Coordinate::new(x, y)
    }
}

impl Projection for WebMercator {
    #[inline]
    fn to_geo(&self, c: Coordinate) -> GeoPoint {
        let lon = (c.x / WEB_MERCATOR_RADIUS_M).to_degrees();
        let lat = (2.0 * (c.y / WEB_MERCATOR_RADIUS_M).exp().atan()
            - std::f64::consts::FRAC_PI_2)
            .to_degrees();
        GeoPoint::new(lon, lat)
    }
}

/// Identity mapping for frames that already are `(lon, lat)` degrees.
#[derive(Copy, Clone, Debug, Default)]
pub struct LonLat;

impl Projection for LonLat {
    #[inline]
    fn to_geo(&self, c: Coordinate) -> GeoPoint {
        GeoPoint::new(c.x, c.y)
    }
}

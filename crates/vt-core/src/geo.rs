//! Planar and geographic point types.
//!
//! Two coordinate spaces coexist in the workspace:
//!
//! - [`Coordinate`]: projected metres in a single planar reference frame.
//!   Graph building, snapping and edge weights all happen here.
//! - [`GeoPoint`]: WGS-84 longitude/latitude in degrees.  Only used for
//!   real-world distance accumulation during traversal.
//!
//! Both use `f64`: projected Web-Mercator values reach ~2e7 m, where `f32`
//! can no longer hold centimetre quantization.

/// Mean Earth radius in metres used for great-circle distances.
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

// ── Coordinate ────────────────────────────────────────────────────────────────

/// A point in the projected planar reference frame (metres).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Planar Euclidean distance in the frame's units.
    #[inline]
    pub fn distance(self, other: Coordinate) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Squared planar distance; avoids the `sqrt` for nearest-neighbour scans.
    #[inline]
    pub fn distance_2(self, other: Coordinate) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Coordinate {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Coordinate {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ── GeoPoint ──────────────────────────────────────────────────────────────────

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Haversine great-circle distance in metres on a spherical Earth of
    /// radius [`EARTH_RADIUS_M`].
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon, self.lat)
    }
}

//! Spatial key quantization: continuous coordinates → discrete node keys.
//!
//! Polyline segments drawn independently rarely share bit-identical
//! endpoints, even where the roads physically meet.  Rounding both
//! components to a fixed number of fractional digits merges those endpoints
//! into one junction without needing a spatial index.
//!
//! # Tolerance
//!
//! With `precision = p` the cell size (`step`) is `10^-p` frame units.  Every
//! coordinate within half a step of a cell centre maps to that cell's key;
//! coordinates whose components differ by more than one step never share a
//! key.  The merge is lossy on purpose.

use std::fmt;

use crate::{Coordinate, CoreError, CoreResult};

/// Default number of fractional digits kept by the quantizer (centimetres
/// when the frame is in metres).
pub const DEFAULT_PRECISION: u32 = 2;

/// Highest precision accepted by [`Quantizer::new`].  Beyond this the scaled
/// value of a Web-Mercator coordinate no longer fits exactly in an `f64`.
pub const MAX_PRECISION: u32 = 9;

// ── NodeKey ───────────────────────────────────────────────────────────────────

/// Stable identity of a road-network junction.
///
/// Holds the two quantized components as integers counted in cells of
/// `10^-precision`.  `Copy + Ord + Hash` so it can key maps and heaps
/// directly.  A key only has coordinate meaning together with the
/// [`Quantizer`] that produced it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeKey {
    pub x: i64,
    pub y: i64,
}

impl NodeKey {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.x, self.y)
    }
}

// ── Quantizer ─────────────────────────────────────────────────────────────────

/// Pure, total mapping from [`Coordinate`] to [`NodeKey`] and back.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quantizer {
    precision: u32,
    scale: f64,
}

impl Quantizer {
    /// Quantizer keeping `precision` fractional digits.
    pub fn new(precision: u32) -> CoreResult<Self> {
        if precision > MAX_PRECISION {
            return Err(CoreError::Config(format!(
                "key precision {precision} exceeds maximum {MAX_PRECISION}"
            )));
        }
        Ok(Self { precision, scale: 10f64.powi(precision as i32) })
    }

    #[inline]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Cell size in frame units (`10^-precision`).
    #[inline]
    pub fn step(&self) -> f64 {
        1.0 / self.scale
    }

    /// Half the cell size: the radius around a key centre that always merges.
    #[inline]
    pub fn tolerance(&self) -> f64 {
        0.5 / self.scale
    }

    /// Quantize `c`.  Rounds half away from zero; non-finite components
    /// saturate instead of failing.
    #[inline]
    pub fn key(&self, c: Coordinate) -> NodeKey {
        NodeKey {
            x: (c.x * self.scale).round() as i64,
            y: (c.y * self.scale).round() as i64,
        }
    }

    /// Decode `key` to the centre of its cell.
    #[inline]
    pub fn center(&self, key: NodeKey) -> Coordinate {
        Coordinate::new(key.x as f64 / self.scale, key.y as f64 / self.scale)
    }

    /// Human-readable label, e.g. `"12.35|-4.00"` at precision 2.
    pub fn label(&self, key: NodeKey) -> String {
        let c = self.center(key);
        let p = self.precision as usize;
        format!("{:.p$}|{:.p$}", c.x, c.y)
    }
}

impl Default for Quantizer {
    fn default() -> Self {
        Self { precision: DEFAULT_PRECISION, scale: 10f64.powi(DEFAULT_PRECISION as i32) }
    }
}

//! Animation time model.
//!
//! A traversal advances in whole `Tick`s.  The mapping to wall-clock time is
//! held in `Cadence`:
//!
//!   elapsed_ms = tick * interval_ms
//!
//! Keeping the tick as the canonical unit makes every step count exact and
//! independent of how fast the driver actually fires.

use std::fmt;
use std::time::Duration;

/// Interval between animation steps unless configured otherwise.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// Number of ticks processed since a traversal started.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick after `self`.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── Cadence ───────────────────────────────────────────────────────────────────

/// Fixed tick interval.  Cheap to copy; holds no heap data.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cadence {
    pub interval_ms: u64,
}

impl Cadence {
    #[inline]
    pub fn new(interval_ms: u64) -> Self {
        Self { interval_ms }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Simulated milliseconds elapsed after `tick` steps.
    #[inline]
    pub fn elapsed_ms(&self, tick: Tick) -> u64 {
        tick.0.saturating_mul(self.interval_ms)
    }

    /// Wall-clock length of an animation with `steps` ticks.
    #[inline]
    pub fn duration_of(&self, steps: u64) -> Duration {
        Duration::from_millis(steps.saturating_mul(self.interval_ms))
    }
}

impl Default for Cadence {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL_MS)
    }
}

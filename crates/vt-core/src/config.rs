//! Runtime configuration shared by the spatial, traversal and session crates.
//!
//! Typically built in code or loaded from JSON by the application (with the
//! `serde` feature) and validated once before a session is built.

use crate::{
    CoreError, CoreResult, Quantizer,
    cadence::{Cadence, DEFAULT_TICK_INTERVAL_MS},
    keys::{DEFAULT_PRECISION, MAX_PRECISION},
};

// ── PulseConfig ───────────────────────────────────────────────────────────────

/// Bounds of the pulsing marker drawn at the vehicle position.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PulseConfig {
    /// Smallest radius; the pulse starts here, growing.
    pub min_radius: f64,
    /// Largest radius; the pulse turns around here.
    pub max_radius: f64,
    /// Radius change per tick.
    pub step: f64,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self { min_radius: 8.0, max_radius: 15.0, step: 0.5 }
    }
}

// ── TraceConfig ───────────────────────────────────────────────────────────────

/// Top-level configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TraceConfig {
    /// Fractional digits kept when quantizing coordinates to node keys.
    pub key_precision: u32,

    /// Milliseconds between animation ticks.  Default: 100.
    pub tick_interval_ms: u64,

    /// Visual pulse bounds.
    pub pulse: PulseConfig,
}

impl TraceConfig {
    /// Check every field; returns the first problem found.
    pub fn validate(&self) -> CoreResult<()> {
        if self.key_precision > MAX_PRECISION {
            return Err(CoreError::Config(format!(
                "key_precision {} exceeds maximum {MAX_PRECISION}",
                self.key_precision
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(CoreError::Config("tick_interval_ms must be positive".into()));
        }
        let p = &self.pulse;
        if !(p.min_radius.is_finite() && p.max_radius.is_finite() && p.step.is_finite()) {
            return Err(CoreError::Config("pulse bounds must be finite".into()));
        }
        if p.min_radius <= 0.0 || p.min_radius >= p.max_radius {
            return Err(CoreError::Config(format!(
                "pulse radius range {}..{} is empty",
                p.min_radius, p.max_radius
            )));
        }
        if p.step <= 0.0 {
            return Err(CoreError::Config("pulse step must be positive".into()));
        }
        Ok(())
    }

    /// Quantizer for the configured precision.
    pub fn quantizer(&self) -> CoreResult<Quantizer> {
        Quantizer::new(self.key_precision)
    }

    #[inline]
    pub fn cadence(&self) -> Cadence {
        Cadence::new(self.tick_interval_ms)
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            key_precision:    DEFAULT_PRECISION,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            pulse:            PulseConfig::default(),
        }
    }
}

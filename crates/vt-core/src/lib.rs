//! `vt-core`: foundational types for the `vehicle_trace` workspace.
//!
//! This crate is a dependency of every other `vt-*` crate.  It has no `vt-*`
//! dependencies and a single external one (`thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `Coordinate` (planar), `GeoPoint`, haversine distance |
//! | [`keys`]        | `NodeKey`, `Quantizer`                                |
//! | [`projection`]  | `Projection` trait, `WebMercator`, `LonLat`           |
//! | [`cadence`]     | `Tick`, `Cadence`                                     |
//! | [`config`]      | `TraceConfig`, `PulseConfig`                          |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to public data types.       |

pub mod cadence;
pub mod config;
pub mod error;
pub mod geo;
pub mod keys;
pub mod projection;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cadence::{Cadence, Tick};
pub use config::{PulseConfig, TraceConfig};
pub use error::{CoreError, CoreResult};
pub use geo::{Coordinate, GeoPoint};
pub use keys::{NodeKey, Quantizer};
pub use projection::{LonLat, Projection, WebMercator};

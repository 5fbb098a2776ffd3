//! `vt-spatial`: road graph, point snapping, and routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`graph`]   | `RoadGraph` (quantized adjacency map), `RoadGraphBuilder`   |
//! | [`snap`]    | full-scan `snap_to_node`, `SnapIndex` (R-tree)              |
//! | [`router`]  | `Router` trait, `Route`, `DijkstraRouter`                   |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Full-scan snapping on Rayon's thread pool.                |
//! | `fx-hash`  | FxHash instead of SipHash for node-key maps.              |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.        |

pub mod error;
pub mod graph;
pub mod router;
pub mod snap;


pub use error::{SpatialError, SpatialResult};
pub use graph::{RoadGraph, RoadGraphBuilder};
pub use router::{DijkstraRouter, Route, Router};
pub use snap::SnapIndex;

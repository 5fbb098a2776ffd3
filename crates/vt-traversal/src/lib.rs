//! `vt-traversal`: step-driven route animation and distance accumulation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`state`]     | `Pulse`, `TraversalStatus`, `TraversalState`                    |
//! | [`traversal`] | `Traversal<P>` owned handle, `tick` / `cancel`, `TickOutcome`   |
//! | [`observer`]  | `TraversalObserver`, `TickEvent`, `TraceRecorder`               |
//! | [`driver`]    | `TickSource`, `IntervalTicker`, `ManualTicker`, `run_to_end`    |
//! | [`error`]     | `TraversalError`, `TraversalResult<T>`                          |
//!
//! # Movement model (node-hop)
//!
//! 1. `Traversal::start` takes the route's planar coordinates and places the
//!    entity on the first one.
//! 2. Each tick moves it to the next coordinate (never between two) and
//!    adds the great-circle length of that hop to the odometer.
//! 3. The tick that lands on the last coordinate finishes the traversal;
//!    later ticks do nothing.
//! 4. A hidden road layer or an explicit `cancel` stops it early.  The
//!    odometer is never reset by the traversal itself.

pub mod driver;
pub mod error;
pub mod observer;
pub mod state;
pub mod traversal;

#[cfg(test)]
mod tests;

pub use driver::{IntervalTicker, ManualTicker, TickSource, run_to_end};
pub use error::{TraversalError, TraversalResult};
pub use observer::{
    NoopObserver, TickEvent, TickRecord, TraceRecorder, TraversalObserver, TraversalSummary,
};
pub use state::{Pulse, TraversalState, TraversalStatus};
pub use traversal::{TickOutcome, Traversal};

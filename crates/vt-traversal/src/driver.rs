//! Tick sources and the drive loop.
//!
//! The traversal itself never sleeps; something outside fires its ticks.
//! A [`TickSource`] abstracts that so the same loop runs on a real
//! interval in an application and instantly in tests.

use std::time::Duration;

use vt_core::{Cadence, Projection, Tick};

use crate::{Traversal, TraversalObserver};

/// Something that blocks until the next tick is due.
pub trait TickSource {
    fn wait_next(&mut self);
}

/// Fires every `cadence.interval()` on the calling thread.
pub struct IntervalTicker {
    interval: Duration,
}

impl IntervalTicker {
    pub fn new(cadence: Cadence) -> Self {
        Self { interval: cadence.interval() }
    }
}

impl TickSource for IntervalTicker {
    fn wait_next(&mut self) {
        std::thread::sleep(self.interval);
    }
}

/// Fires immediately and counts how often it was asked.
#[derive(Debug, Default)]
pub struct ManualTicker {
    pub waits: u64,
}

impl TickSource for ManualTicker {
    fn wait_next(&mut self) {
        self.waits += 1;
    }
}

/// Drive `traversal` until it stops running.
///
/// Waits for the source, then consults `layer_visible` and ticks, exactly
/// once per wait.  Returns the number of advancing ticks.
pub fn run_to_end<P, S, V, O>(
    traversal:         &mut Traversal<P>,
    source:            &mut S,
    mut layer_visible: V,
    observer:          &mut O,
) -> Tick
where
    P: Projection,
    S: TickSource,
    V: FnMut() -> bool,
    O: TraversalObserver,
{
    while traversal.is_running() {
        source.wait_next();
        traversal.tick(layer_visible(), observer);
    }
    traversal.ticks()
}

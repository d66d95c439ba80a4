//! Simulation observer trait for progress reporting and data collection.

use nb_core::{Point, Step};
use tracing::debug;

use crate::trajectory::formation_spread;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] as rows are written.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: usize }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_step_end(&mut self, step: Step, positions: &[Point]) {
///         if step.0 % self.interval == 0 {
///             println!("{step}: agent 0 at {}", positions[0]);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once per row, in step order, right after the row is written.
    /// Row 0 (the initial positions) is reported too.
    fn on_step_end(&mut self, _step: Step, _positions: &[Point]) {}

    /// Called once after the final row is written.
    fn on_sim_end(&mut self, _final_step: Step) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Logs the formation spread every `interval` steps at `debug` level.
pub struct TracingObserver {
    interval: usize,
}

impl TracingObserver {
    /// `interval` of 0 is treated as 1.
    pub fn new(interval: usize) -> Self {
        Self { interval: interval.max(1) }
    }
}

impl SimObserver for TracingObserver {
    fn on_step_end(&mut self, step: Step, positions: &[Point]) {
        if step.0 % self.interval == 0 {
            debug!(step = step.0, spread = formation_spread(positions), "pursuit progress");
        }
    }

    fn on_sim_end(&mut self, final_step: Step) {
        debug!(final_step = final_step.0, "pursuit run finished");
    }
}

//! `TrajectoryOutputObserver<W>` — bridges `SimObserver` to a `TrajectoryWriter`.

use nb_core::{Point, SimConfig, Step};
use nb_sim::{SimObserver, Trajectory};

use crate::row::PositionRow;
use crate::writer::TrajectoryWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes every `interval`-th row to any
/// [`TrajectoryWriter`] backend.  The final row is always written.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct TrajectoryOutputObserver<W: TrajectoryWriter> {
    writer:     W,
    dt:         f64,
    interval:   usize,
    final_step: Step,
    last_error: Option<OutputError>,
}

impl<W: TrajectoryWriter> TrajectoryOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` for the time
    /// column and to recognise the final row.  `interval` of 0 is treated
    /// as 1.
    pub fn new(writer: W, config: &SimConfig, interval: usize) -> Self {
        Self {
            writer,
            dt:         config.dt,
            interval:   interval.max(1),
            final_step: config.final_step(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TrajectoryWriter> SimObserver for TrajectoryOutputObserver<W> {
    fn on_step_end(&mut self, step: Step, positions: &[Point]) {
        if step.0 % self.interval == 0 || step == self.final_step {
            let rows = rows_for_step(step, self.dt, positions);
            let result = self.writer.write_positions(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_step: Step) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}

/// Write every row of an already computed trajectory, then finish.
pub fn export_trajectory<W: TrajectoryWriter>(
    trajectory: &Trajectory,
    writer:     &mut W,
) -> OutputResult<()> {
    for (k, positions) in trajectory.rows().enumerate() {
        writer.write_positions(&rows_for_step(Step(k), trajectory.dt(), positions))?;
    }
    writer.finish()
}

fn rows_for_step(step: Step, dt: f64, positions: &[Point]) -> Vec<PositionRow> {
    positions
        .iter()
        .enumerate()
        .map(|(i, p)| PositionRow {
            step:     step.0 as u64,
            time:     step.0 as f64 * dt,
            agent_id: i as u32,
            x:        p.x,
            y:        p.y,
        })
        .collect()
}

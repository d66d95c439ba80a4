//! The `TrajectoryWriter` trait implemented by export backends.

use crate::{OutputResult, PositionRow};

/// Sink for trajectory rows.
///
/// Errors are returned to the caller; when driven by
/// [`TrajectoryOutputObserver`][crate::TrajectoryOutputObserver] they are
/// stored and retrieved with `take_error`.
pub trait TrajectoryWriter {
    /// Write the positions of every agent at one step.
    fn write_positions(&mut self, rows: &[PositionRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: calling it again is a no-op.
    fn finish(&mut self) -> OutputResult<()>;
}

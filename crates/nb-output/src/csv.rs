//! CSV export backend.
//!
//! Creates `trajectory.csv` in the configured output directory, one row per
//! agent per step:
//!
//! ```csv
//! step,time,agent_id,x,y
//! 0,0,0,0,0
//! 0,0,1,0,20
//! ```

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::TrajectoryWriter;
use crate::{OutputResult, PositionRow};

/// File name written inside the output directory.
pub const TRAJECTORY_FILE: &str = "trajectory.csv";

/// Writes trajectory rows to a single CSV file.
pub struct CsvWriter {
    rows:     Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) `trajectory.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut rows = Writer::from_path(dir.join(TRAJECTORY_FILE))?;
        rows.write_record(["step", "time", "agent_id", "x", "y"])?;

        Ok(Self { rows, finished: false })
    }
}

impl TrajectoryWriter for CsvWriter {
    fn write_positions(&mut self, rows: &[PositionRow]) -> OutputResult<()> {
        for row in rows {
            self.rows.write_record(&[
                row.step.to_string(),
                row.time.to_string(),
                row.agent_id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}

//! CSV position loader.
//!
//! # CSV format
//!
//! One row per agent.  Rows may appear in any order, but every agent in
//! `0..agent_count` must appear exactly once.
//!
//! ```csv
//! agent_id,x,y
//! 0,0.0,0.0
//! 1,0.0,20.0
//! 2,20.0,20.0
//! 3,20.0,0.0
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use nb_core::Point;

use crate::parse::ensure_finite;
use crate::source::PositionSource;
use crate::{SourceError, SourceResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PositionRecord {
    agent_id: u32,
    x:        f64,
    y:        f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load initial positions from a CSV file.
///
/// Returns a `Vec` of length `agent_count`, indexed by `AgentId`.
pub fn load_positions_csv(path: &Path, agent_count: usize) -> SourceResult<Vec<Point>> {
    let file = std::fs::File::open(path)?;
    load_positions_reader(file, agent_count)
}

/// Like [`load_positions_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedding a formation in
/// a binary.
pub fn load_positions_reader<R: Read>(reader: R, agent_count: usize) -> SourceResult<Vec<Point>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut slots: Vec<Option<Point>> = vec![None; agent_count];

    for result in csv_reader.deserialize::<PositionRecord>() {
        let row = result?;
        let slot = slots
            .get_mut(row.agent_id as usize)
            .ok_or(SourceError::UnknownAgent { agent: row.agent_id, expected: agent_count })?;
        if slot.is_some() {
            return Err(SourceError::DuplicateAgent { agent: row.agent_id });
        }
        *slot = Some(ensure_finite(Point::new(row.x, row.y))?);
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(i, p)| p.ok_or(SourceError::MissingAgent { agent: i as u32 }))
        .collect()
}

// ── Source wrapper ────────────────────────────────────────────────────────────

/// [`PositionSource`] reading a CSV file on every `acquire`.
#[derive(Clone, Debug)]
pub struct CsvFileSource {
    path:        PathBuf,
    agent_count: usize,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>, agent_count: usize) -> Self {
        Self { path: path.into(), agent_count }
    }
}

impl PositionSource for CsvFileSource {
    fn agent_count(&self) -> usize {
        self.agent_count
    }

    fn acquire(&mut self) -> SourceResult<Vec<Point>> {
        load_positions_csv(&self.path, self.agent_count)
    }
}

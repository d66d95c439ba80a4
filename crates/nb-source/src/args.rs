//! Positions given as command-line arguments.

use nb_core::Point;

use crate::parse::parse_point;
use crate::source::PositionSource;
use crate::{SourceError, SourceResult};

/// One `"x y"` string per agent, e.g. from repeated `--pos "0 20"` flags.
#[derive(Clone, Debug)]
pub struct ArgsSource {
    entries:  Vec<String>,
    expected: usize,
}

impl ArgsSource {
    /// `expected` is the agent count the run needs; a different number of
    /// entries is rejected by `acquire`.
    pub fn new<I, S>(entries: I, expected: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
            expected,
        }
    }
}

impl PositionSource for ArgsSource {
    fn agent_count(&self) -> usize {
        self.expected
    }

    fn acquire(&mut self) -> SourceResult<Vec<Point>> {
        if self.entries.len() != self.expected {
            return Err(SourceError::CountMismatch {
                expected: self.expected,
                got:      self.entries.len(),
            });
        }
        self.entries.iter().map(|e| parse_point(e)).collect()
    }
}

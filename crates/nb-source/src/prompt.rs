//! Interactive terminal entry of initial positions.
//!
//! One prompt per agent, each pre-filled with a default:
//!
//! ```text
//! Enter initial positions for 4 bugs
//! Bug 1 (x y) [0 0]:
//! Bug 2 (x y) [0 20]: 3.5 18
//! Bug 3 (x y) [20 20]: twenty 20
//! Input error: "twenty" is not a number. Enter coordinates as: x y (e.g., 10.0 15.0)
//! Bug 3 (x y) [20 20]:
//! Bug 4 (x y) [20 0]:
//! ```
//!
//! An empty line accepts the default.  A malformed entry is reported and the
//! same agent is asked again; nothing is returned until every agent has a
//! valid position.  End of input cancels the whole entry.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use nb_core::Point;
use tracing::warn;

use crate::parse::parse_point;
use crate::source::PositionSource;
use crate::{SourceError, SourceResult};

/// Reads `"x y"` lines from `input`, writing prompts and errors to `output`.
pub struct PromptSource<R: BufRead, W: Write> {
    input:    R,
    output:   W,
    title:    Option<String>,
    defaults: Vec<Point>,
}

impl PromptSource<StdinLock<'static>, Stdout> {
    /// Prompt on the process's terminal.
    pub fn stdio(defaults: Vec<Point>) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), defaults)
    }
}

impl<R: BufRead, W: Write> PromptSource<R, W> {
    /// One prompt per entry of `defaults`.
    pub fn new(input: R, output: W, defaults: Vec<Point>) -> Self {
        Self {
            input,
            output,
            title: None,
            defaults,
        }
    }

    /// Line printed once before the first prompt.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Give back the output sink (tests inspect what was printed).
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, index: usize) -> SourceResult<Point> {
        let default = self.defaults[index];
        let mut line = String::new();
        loop {
            write!(self.output, "Bug {} (x y) [{} {}]: ", index + 1, default.x, default.y)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(SourceError::Cancelled);
            }

            let entry = line.trim();
            if entry.is_empty() {
                return Ok(default);
            }
            match parse_point(entry) {
                Ok(point) => return Ok(point),
                Err(e) => {
                    warn!(bug = index + 1, error = %e, "rejected position entry");
                    writeln!(
                        self.output,
                        "Input error: {e}. Enter coordinates as: x y (e.g., 10.0 15.0)"
                    )?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> PositionSource for PromptSource<R, W> {
    fn agent_count(&self) -> usize {
        self.defaults.len()
    }

    fn acquire(&mut self) -> SourceResult<Vec<Point>> {
        if let Some(title) = &self.title {
            writeln!(self.output, "{title}")?;
        }
        (0..self.defaults.len()).map(|i| self.ask(i)).collect()
    }
}

//! Character-grid rendering of a [`Frame`] for terminals.
//!
//! Trails are drawn as `.`, agents as their 1-based number (`1`–`9`, then
//! `*`).  Agents are drawn after trails, and later agents over earlier ones
//! when they share a cell.

use nb_core::Point;

use crate::scrubber::{Frame, Viewport};

/// Fixed-size character plot.
#[derive(Debug, Clone, Copy)]
pub struct AsciiPlot {
    width:  usize,
    height: usize,
}

impl AsciiPlot {
    /// A plot of `width × height` cells; each dimension is at least 2.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width:  width.max(2),
            height: height.max(2),
        }
    }

    /// Render `frame` within `viewport`.  Points outside the viewport are
    /// skipped.
    pub fn render(&self, frame: &Frame<'_>, viewport: &Viewport) -> String {
        let mut grid = vec![vec![' '; self.width]; self.height];

        for trail in &frame.trails {
            for &p in trail {
                if let Some((row, col)) = self.cell(p, viewport) {
                    grid[row][col] = '.';
                }
            }
        }
        for (i, &p) in frame.positions.iter().enumerate() {
            if let Some((row, col)) = self.cell(p, viewport) {
                grid[row][col] = marker(i);
            }
        }

        let mut out = String::with_capacity((self.width + 3) * (self.height + 3));
        out.push_str(&format!("{}  t = {:.2}\n", frame.step, frame.time));
        let border = format!("+{}+", "-".repeat(self.width));
        out.push_str(&border);
        out.push('\n');
        for line in grid {
            out.push('|');
            out.extend(line);
            out.push_str("|\n");
        }
        out.push_str(&border);
        out.push('\n');
        out
    }

    /// Grid cell of `p`, with row 0 at the top (largest y).
    fn cell(&self, p: Point, viewport: &Viewport) -> Option<(usize, usize)> {
        if !viewport.contains(p) || viewport.width() <= 0.0 || viewport.height() <= 0.0 {
            return None;
        }
        let fx = (p.x - viewport.min.x) / viewport.width();
        let fy = (p.y - viewport.min.y) / viewport.height();
        let col = (fx * (self.width - 1) as f64).round() as usize;
        let row_from_bottom = (fy * (self.height - 1) as f64).round() as usize;
        Some((self.height - 1 - row_from_bottom, col))
    }
}

impl Default for AsciiPlot {
    fn default() -> Self {
        Self::new(60, 30)
    }
}

fn marker(agent: usize) -> char {
    match agent {
        0..=8 => char::from(b'1' + agent as u8),
        _ => '*',
    }
}

//! Seeded random formations.
//!
//! Positions are drawn uniformly from the square `[-half_extent,
//! half_extent]²` around `center` using a `SmallRng` seeded from `seed`, so
//! the same seed always produces the same formation.

use nb_core::Point;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::source::PositionSource;
use crate::{SourceError, SourceResult};

/// `agent_count` uniformly random positions.
#[derive(Clone, Debug)]
pub struct ScatterSource {
    agent_count: usize,
    seed:        u64,
    center:      Point,
    half_extent: f64,
}

impl ScatterSource {
    /// Scatter around the origin within ±`half_extent` on both axes.
    pub fn new(agent_count: usize, seed: u64, half_extent: f64) -> Self {
        Self {
            agent_count,
            seed,
            center: Point::ZERO,
            half_extent: half_extent.abs(),
        }
    }

    pub fn centered_at(mut self, center: Point) -> Self {
        self.center = center;
        self
    }
}

impl PositionSource for ScatterSource {
    fn agent_count(&self) -> usize {
        self.agent_count
    }

    fn acquire(&mut self) -> SourceResult<Vec<Point>> {
        let h = self.half_extent;
        // The sampled range spans 2h, which must itself be finite.
        if !(2.0 * h).is_finite() {
            return Err(SourceError::NonFinite { input: format!("half extent {h}") });
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        (0..self.agent_count)
            .map(|_| {
                let offset = if h > 0.0 {
                    Point::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h))
                } else {
                    Point::ZERO
                };
                crate::parse::ensure_finite(self.center + offset)
            })
            .collect()
    }
}

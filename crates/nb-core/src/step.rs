//! Simulation step counter and run configuration.
//!
//! # Design
//!
//! Time is a monotonically increasing `Step` index.  The mapping to
//! simulated time is fixed by the run's `dt`:
//!
//!   t = step * dt
//!
//! Using an integer step as the canonical unit means buffer lookups are exact
//! and a renderer can seek to any row without floating-point rounding.

use std::fmt;

use crate::{AgentId, ConfigError, ConfigResult, Point};

// ── Step ──────────────────────────────────────────────────────────────────────

/// Index of one row of the trajectory buffer.  Step 0 holds the initial
/// positions.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step(pub usize);

impl Step {
    pub const ZERO: Step = Step(0);
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Number of rows in a default run.
pub const DEFAULT_STEPS: usize = 1_000;

/// Time increment of a default run.
pub const DEFAULT_DT: f64 = 0.05;

/// Run configuration.  Constant for the whole run.
///
/// The agent count is implied by `speeds.len()`; the integrator rejects a
/// position vector of any other length.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Rows in the trajectory buffer, including the initial row.  Must be ≥ 1.
    pub steps: usize,

    /// Time increment per step.  Must be finite and > 0.
    pub dt: f64,

    /// Per-agent speed, indexed by `AgentId`.  Each must be finite and ≥ 0;
    /// a zero speed makes the agent stationary prey.
    pub speeds: Vec<f64>,
}

impl SimConfig {
    /// `n` agents all moving at `speed`, with the default step count and `dt`.
    pub fn uniform(n: usize, speed: f64) -> Self {
        Self {
            steps:  DEFAULT_STEPS,
            dt:     DEFAULT_DT,
            speeds: vec![speed; n],
        }
    }

    /// Override the step count.
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Override the time increment.
    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// Pin `agent` in place by zeroing its speed.  Out-of-range ids are
    /// ignored here and left for [`validate`][Self::validate] to catch via
    /// the agent count.
    pub fn with_stationary(mut self, agent: AgentId) -> Self {
        if let Some(speed) = self.speeds.get_mut(agent.index()) {
            *speed = 0.0;
        }
        self
    }

    #[inline]
    pub fn agent_count(&self) -> usize {
        self.speeds.len()
    }

    /// The last row index of the buffer (inclusive).
    #[inline]
    pub fn final_step(&self) -> Step {
        Step(self.steps.saturating_sub(1))
    }

    /// Simulated time of `step`.
    #[inline]
    pub fn time_at(&self, step: Step) -> f64 {
        step.0 as f64 * self.dt
    }

    /// Check every field against the integrator's input contract.
    ///
    /// `agent_count` is the number of initial positions the run will use.
    pub fn validate(&self, agent_count: usize) -> ConfigResult<()> {
        if agent_count == 0 {
            return Err(ConfigError::NoAgents);
        }
        if self.speeds.len() != agent_count {
            return Err(ConfigError::AgentCountMismatch {
                expected: agent_count,
                got:      self.speeds.len(),
                what:     "speed vector",
            });
        }
        if self.steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        if buffer_bytes(self.steps, agent_count).is_none() {
            return Err(ConfigError::BufferTooLarge { steps: self.steps, agents: agent_count });
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ConfigError::InvalidDt(self.dt));
        }
        for (i, &speed) in self.speeds.iter().enumerate() {
            if !(speed.is_finite() && speed >= 0.0) {
                return Err(ConfigError::InvalidSpeed { agent: AgentId(i as u32), speed });
            }
        }
        Ok(())
    }
}

/// Size in bytes of a `steps × agents` position buffer, or `None` if it
/// cannot be allocated on this target.
fn buffer_bytes(steps: usize, agents: usize) -> Option<usize> {
    steps
        .checked_mul(agents)?
        .checked_mul(size_of::<Point>())
        .filter(|&bytes| bytes <= isize::MAX as usize)
}

impl Default for SimConfig {
    /// The classic four-bug run: four agents at unit speed.
    fn default() -> Self {
        Self::uniform(4, 1.0)
    }
}

//! Validating builder for a [`Sim`].

use nb_core::{AgentId, ConfigError, Point, SimConfig};

use crate::{Sim, SimError, SimResult};

/// Builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — step count, `dt`, per-agent speeds
/// - initial positions — one finite [`Point`] per agent, indexed by `AgentId`
///
/// # Optional inputs
///
/// | Method             | Default                              |
/// |--------------------|--------------------------------------|
/// | `.stationary(id)`  | Every agent keeps its configured speed |
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new(SimConfig::default(), positions)
///     .stationary(AgentId(3))
///     .build()?;
/// let trajectory = sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    config:     SimConfig,
    initial:    Vec<Point>,
    stationary: Vec<AgentId>,
}

impl SimBuilder {
    pub fn new(config: SimConfig, initial: Vec<Point>) -> Self {
        Self {
            config,
            initial,
            stationary: Vec::new(),
        }
    }

    /// Hold `agent` at its initial position for the whole run.
    pub fn stationary(mut self, agent: AgentId) -> Self {
        self.stationary.push(agent);
        self
    }

    /// Validate the configuration and initial positions and return a
    /// ready-to-run [`Sim`].
    ///
    /// Nothing is allocated for the trajectory until [`Sim::run`].
    pub fn build(self) -> SimResult<Sim> {
        let mut config = self.config;
        for agent in self.stationary {
            if agent.index() >= self.initial.len() {
                return Err(ConfigError::UnknownAgent(agent).into());
            }
            config = config.with_stationary(agent);
        }

        config.validate(self.initial.len())?;

        if let Some((i, &position)) = self
            .initial
            .iter()
            .enumerate()
            .find(|(_, p)| !p.is_finite())
        {
            return Err(SimError::NonFinitePosition { agent: AgentId(i as u32), position });
        }

        Ok(Sim {
            config,
            initial: self.initial,
        })
    }
}

//! The `Sim` struct and its step loop.

use nb_core::{Point, SimConfig, Step};
use tracing::debug;

use crate::integrator::advance;
use crate::trajectory::formation_spread;
use crate::{NoopObserver, SimBuilder, SimObserver, SimResult, Trajectory};

/// A validated, ready-to-run pursuit.
///
/// `Sim` carries no state between runs: [`run`][Self::run] consumes it and
/// returns the complete buffer.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Debug)]
pub struct Sim {
    pub(crate) config:  SimConfig,
    pub(crate) initial: Vec<Point>,
}

impl Sim {
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn initial_positions(&self) -> &[Point] {
        &self.initial
    }

    /// Compute every row from step 0 to `config.steps - 1`.
    ///
    /// Row `k` is computed from row `k - 1` alone.  The observer sees each
    /// row right after it is written, starting with row 0.
    pub fn run<O: SimObserver>(self, observer: &mut O) -> Trajectory {
        let Sim { config, initial } = self;

        debug!(
            agents = initial.len(),
            steps = config.steps,
            dt = config.dt,
            "starting pursuit run"
        );

        let mut trajectory = Trajectory::with_initial(initial, config.steps, config.dt);
        observer.on_step_end(Step::ZERO, trajectory.last());

        for k in 1..config.steps {
            trajectory.push_step(|prev, next| advance(prev, &config.speeds, config.dt, next));
            observer.on_step_end(Step(k), trajectory.last());
        }

        let final_step = trajectory.final_step();
        observer.on_sim_end(final_step);
        debug!(
            final_step = final_step.0,
            final_spread = formation_spread(trajectory.last()),
            "pursuit run complete"
        );

        trajectory
    }
}

/// Validate `initial` and `config`, then compute the full trajectory.
///
/// Shorthand for `SimBuilder::new(config.clone(), initial).build()?.run(&mut NoopObserver)`.
pub fn run(initial: Vec<Point>, config: &SimConfig) -> SimResult<Trajectory> {
    let sim = SimBuilder::new(config.clone(), initial).build()?;
    Ok(sim.run(&mut NoopObserver))
}

//! The trajectory buffer produced by a run.

use nb_core::{AgentId, Point, Step};

/// Positions of every agent at every step of one run.
///
/// Stored row-major in a single `Vec<Point>` of length `steps × agents`:
/// row `k` occupies `rows[k * agents .. (k + 1) * agents]`.  Row 0 holds the
/// initial positions.
///
/// Rows are appended only by the integrator inside this crate.  Everything
/// public is read-only, so once [`Sim::run`][crate::Sim::run] returns the
/// buffer is immutable and any number of readers may seek into it.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    agents: usize,
    dt:     f64,
    rows:   Vec<Point>,
}

impl Trajectory {
    /// Allocate room for `steps` rows and write `initial` as row 0.
    pub(crate) fn with_initial(initial: Vec<Point>, steps: usize, dt: f64) -> Self {
        let agents = initial.len();
        let mut rows = Vec::with_capacity(steps * agents);
        rows.extend(initial);
        Self { agents, dt, rows }
    }

    /// Append one row computed from the current last row.
    ///
    /// `fill` receives the previous row read-only and the new row to write.
    /// The new row is pre-filled with a copy of the previous one, but `fill`
    /// must overwrite every slot; it never sees a partially advanced
    /// previous row.
    pub(crate) fn push_step<F>(&mut self, fill: F)
    where
        F: FnOnce(&[Point], &mut [Point]),
    {
        let start = self.rows.len() - self.agents;
        self.rows.extend_from_within(start..);
        let (head, next) = self.rows.split_at_mut(start + self.agents);
        fill(&head[start..], next);
    }

    // ── Shape ─────────────────────────────────────────────────────────────

    /// Number of rows, including the initial one.  Always ≥ 1.
    #[inline]
    pub fn step_count(&self) -> usize {
        self.rows.len() / self.agents
    }

    #[inline]
    pub fn agent_count(&self) -> usize {
        self.agents
    }

    /// Time increment the buffer was computed with.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Index of the last row.
    #[inline]
    pub fn final_step(&self) -> Step {
        Step(self.step_count() - 1)
    }

    /// Simulated time of `step`.
    #[inline]
    pub fn time_at(&self, step: Step) -> f64 {
        step.0 as f64 * self.dt
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// All agent positions at `step`, indexed by `AgentId`.
    pub fn step(&self, step: Step) -> Option<&[Point]> {
        let start = step.0.checked_mul(self.agents)?;
        let end = start.checked_add(self.agents)?;
        self.rows.get(start..end)
    }

    pub fn position(&self, step: Step, agent: AgentId) -> Option<Point> {
        self.step(step)?.get(agent.index()).copied()
    }

    /// Row 0: the positions the run started from.
    pub fn initial(&self) -> &[Point] {
        &self.rows[..self.agents]
    }

    /// The final row.
    pub fn last(&self) -> &[Point] {
        &self.rows[self.rows.len() - self.agents..]
    }

    /// Iterate rows in step order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Point]> + '_ {
        self.rows.chunks_exact(self.agents)
    }

    /// The path of `agent` from step 0 through `upto` inclusive.
    ///
    /// `upto` past the final row is clamped; an unknown agent yields an
    /// empty path.
    pub fn path(&self, agent: AgentId, upto: Step) -> impl Iterator<Item = Point> + '_ {
        let len = if agent.index() < self.agents {
            upto.0.min(self.final_step().0) + 1
        } else {
            0
        };
        self.rows
            .iter()
            .skip(agent.index())
            .step_by(self.agents)
            .take(len)
            .copied()
    }

    /// The raw row-major buffer (`steps × agents` points).
    #[inline]
    pub fn as_flat(&self) -> &[Point] {
        &self.rows
    }

    // ── Convergence ───────────────────────────────────────────────────────

    /// Largest pairwise distance between agents at `step`.
    pub fn spread(&self, step: Step) -> Option<f64> {
        self.step(step).map(formation_spread)
    }

    /// First step at which every pair of agents is closer than `eps`.
    ///
    /// The integrator never stops on its own; callers that want a capture
    /// event use this to find it.
    pub fn first_step_within(&self, eps: f64) -> Option<Step> {
        self.rows()
            .position(|row| formation_spread(row) < eps)
            .map(Step)
    }
}

/// Largest pairwise distance within one row.  Zero for a single agent.
pub fn formation_spread(positions: &[Point]) -> f64 {
    let mut max = 0.0_f64;
    for (i, &a) in positions.iter().enumerate() {
        for &b in &positions[i + 1..] {
            max = max.max(a.distance(b));
        }
    }
    max
}

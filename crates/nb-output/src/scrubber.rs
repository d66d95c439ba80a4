//! Random-access playback of a finished trajectory.
//!
//! A renderer never touches the integrator: it holds a [`Scrubber`] over the
//! immutable buffer and asks for a [`Frame`] whenever the user moves the step
//! slider.

use nb_core::{AgentId, Point, Step};
use nb_sim::Trajectory;

/// Axis margin used when fitting a viewport to the starting formation.
pub const DEFAULT_MARGIN: f64 = 5.0;

/// Everything needed to draw one step: current positions and trails.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<'a> {
    /// The step actually shown (after clamping).
    pub step:      Step,
    /// Simulated time of `step`.
    pub time:      f64,
    /// Agent positions at `step`, indexed by `AgentId`.
    pub positions: &'a [Point],
    /// Per-agent path from step 0 through `step` inclusive.
    pub trails:    Vec<Vec<Point>>,
}

/// Step slider over a completed [`Trajectory`].
pub struct Scrubber<'a> {
    trajectory: &'a Trajectory,
    current:    Step,
}

impl<'a> Scrubber<'a> {
    /// Start at step 0.
    pub fn new(trajectory: &'a Trajectory) -> Self {
        Self { trajectory, current: Step::ZERO }
    }

    /// Highest step the slider can reach.
    pub fn max_step(&self) -> Step {
        self.trajectory.final_step()
    }

    pub fn current(&self) -> Step {
        self.current
    }

    /// Move to `step` (clamped to `0..=max_step`) and return its frame.
    pub fn seek(&mut self, step: Step) -> Frame<'a> {
        self.current = step.min(self.max_step());
        self.frame()
    }

    /// Frame at the current step.
    pub fn frame(&self) -> Frame<'a> {
        let step = self.current;
        let trajectory = self.trajectory;
        let positions = trajectory
            .step(step)
            .unwrap_or_else(|| trajectory.last());
        let trails = (0..trajectory.agent_count())
            .map(|i| trajectory.path(AgentId(i as u32), step).collect())
            .collect();

        Frame {
            step,
            time: trajectory.time_at(step),
            positions,
            trails,
        }
    }
}

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Axis-aligned plot bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub min: Point,
    pub max: Point,
}

impl Viewport {
    /// Bounds of `points` padded by `margin` on every side.
    ///
    /// Pursuers only ever head toward other members of the formation, so
    /// fitting the initial positions frames the run.
    /// An empty slice yields a `margin`-sized box around the origin.
    pub fn fit(points: &[Point], margin: f64) -> Self {
        let mut min = Point::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in points {
            min = Point::new(min.x.min(p.x), min.y.min(p.y));
            max = Point::new(max.x.max(p.x), max.y.max(p.y));
        }
        if points.is_empty() {
            min = Point::ZERO;
            max = Point::ZERO;
        }
        Self {
            min: Point::new(min.x - margin, min.y - margin),
            max: Point::new(max.x + margin, max.y + margin),
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn contains(&self, p: Point) -> bool {
        (self.min.x..=self.max.x).contains(&p.x) && (self.min.y..=self.max.y).contains(&p.y)
    }
}

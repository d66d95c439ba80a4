//! Plain data row type written by export backends.

/// One agent's position at one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionRow {
    pub step:     u64,
    /// Simulated time, `step * dt`.
    pub time:     f64,
    pub agent_id: u32,
    pub x:        f64,
    pub y:        f64,
}

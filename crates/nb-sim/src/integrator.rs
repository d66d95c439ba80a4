//! The pursuit step rule.
//!
//! Every agent moves `speed * dt` along the unit vector toward its cyclic
//! successor, using only the previous row:
//!
//! ```text
//! direction  = prev[(j + 1) mod n] − prev[j]
//! unit       = direction / ‖direction‖      (zero vector if ‖direction‖ = 0)
//! next[j]    = prev[j] + speed[j] · dt · unit
//! ```
//!
//! `prev` and `next` are disjoint slices, so no agent can observe another
//! agent's already-advanced position within the same step.

use nb_core::{AgentId, Point};

/// One agent's displacement for one step.
///
/// An agent sitting exactly on its target stalls: the displacement is zero
/// and it holds position for that step.
#[inline]
pub fn displacement(from: Point, target: Point, speed: f64, dt: f64) -> Point {
    from.unit_towards(target) * (speed * dt)
}

/// Advance every agent by one synchronous step, writing into `next`.
///
/// All three slices must have the same length (the agent count).
pub fn advance(prev: &[Point], speeds: &[f64], dt: f64, next: &mut [Point]) {
    debug_assert_eq!(prev.len(), next.len());
    debug_assert_eq!(prev.len(), speeds.len());

    #[cfg(not(feature = "parallel"))]
    {
        for (j, slot) in next.iter_mut().enumerate() {
            *slot = pursue(prev, speeds, dt, j);
        }
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        next.par_iter_mut()
            .enumerate()
            .for_each(|(j, slot)| *slot = pursue(prev, speeds, dt, j));
    }
}

#[inline]
fn pursue(prev: &[Point], speeds: &[f64], dt: f64, j: usize) -> Point {
    let agent = AgentId(j as u32);
    let target = prev[agent.successor(prev.len()).index()];
    prev[j] + displacement(prev[j], target, speeds[j], dt)
}

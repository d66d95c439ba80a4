//! `PositionSource` — where a run's initial positions come from.
//!
//! Every source validates at its own boundary: a successful
//! [`acquire`][PositionSource::acquire] yields finite points only, one per
//! agent, indexed by `AgentId`.  Malformed input never reaches the
//! integrator.
//!
//! Sources compose: [`WithFixed`] appends pinned positions after whatever an
//! inner source produced, which is how the fixed-prey run asks the user for
//! three bugs and places the fourth itself.

use nb_core::Point;

use crate::SourceResult;

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Synchronous supplier of initial positions.
///
/// # Contract
///
/// - On success, every returned point is finite.
/// - The number of points is fixed by the source's own configuration; a
///   source never returns a partial list.
/// - A source may block (e.g. waiting on a terminal) but must not start a
///   simulation itself.
pub trait PositionSource {
    /// Number of positions a successful `acquire` returns.
    fn agent_count(&self) -> usize;

    fn acquire(&mut self) -> SourceResult<Vec<Point>>;
}

impl<S: PositionSource + ?Sized> PositionSource for Box<S> {
    fn agent_count(&self) -> usize {
        (**self).agent_count()
    }

    fn acquire(&mut self) -> SourceResult<Vec<Point>> {
        (**self).acquire()
    }
}

// ── Fixed-position adapter ────────────────────────────────────────────────────

/// Appends fixed positions after an inner source's output.
///
/// Construct with `source.with_fixed(points)`.
pub struct WithFixed<S: PositionSource> {
    inner: S,
    fixed: Vec<Point>,
}

impl<S: PositionSource> WithFixed<S> {
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: PositionSource> PositionSource for WithFixed<S> {
    fn agent_count(&self) -> usize {
        self.inner.agent_count() + self.fixed.len()
    }

    fn acquire(&mut self) -> SourceResult<Vec<Point>> {
        let mut positions = self.inner.acquire()?;
        for &point in &self.fixed {
            positions.push(crate::parse::ensure_finite(point)?);
        }
        Ok(positions)
    }
}

/// Extension trait that adds `.with_fixed(points)` to any `PositionSource`.
pub trait PositionSourceExt: PositionSource + Sized {
    fn with_fixed(self, fixed: Vec<Point>) -> WithFixed<Self> {
        WithFixed { inner: self, fixed }
    }
}

impl<S: PositionSource + Sized> PositionSourceExt for S {}

//! `nb-core` — foundational types for the n-bug pursuit simulator.
//!
//! This crate is a dependency of every other `nb-*` crate.  It has no `nb-*`
//! dependencies and only `thiserror` (plus optional `serde`) from outside.
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`ids`]      | `AgentId` and the cyclic-successor mapping             |
//! | [`point`]    | `Point` — planar `f64` position / displacement         |
//! | [`step`]     | `Step`, `SimConfig`                                    |
//! | [`error`]    | `ConfigError`, `ConfigResult`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod point;
pub mod step;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ConfigError, ConfigResult};
pub use ids::AgentId;
pub use point::Point;
pub use step::{DEFAULT_DT, DEFAULT_STEPS, SimConfig, Step};

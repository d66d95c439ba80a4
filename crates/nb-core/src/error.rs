//! Run-configuration error type.
//!
//! Sub-crates wrap `ConfigError` as one variant of their own error enum via
//! `#[from]`, so a bad configuration surfaces the same way everywhere.

use thiserror::Error;

use crate::AgentId;

/// A [`SimConfig`][crate::SimConfig] value that can never produce a
/// meaningful run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("step count must be at least 1")]
    ZeroSteps,

    #[error("{steps} steps of {agents} agent(s) do not fit in one trajectory buffer")]
    BufferTooLarge { steps: usize, agents: usize },

    #[error("time increment must be finite and positive, got {0}")]
    InvalidDt(f64),

    #[error("speed of {agent} must be finite and non-negative, got {speed}")]
    InvalidSpeed { agent: AgentId, speed: f64 },

    #[error("{0} is not part of the formation")]
    UnknownAgent(AgentId),

    #[error("a run needs at least one agent")]
    NoAgents,

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },
}

/// Shorthand result type for configuration checks.
pub type ConfigResult<T> = Result<T, ConfigError>;

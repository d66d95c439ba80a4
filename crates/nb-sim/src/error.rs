use nb_core::{AgentId, ConfigError, Point};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("initial position of {agent} is not finite: {position}")]
    NonFinitePosition {
        agent:    AgentId,
        position: Point,
    },
}

pub type SimResult<T> = Result<T, SimError>;

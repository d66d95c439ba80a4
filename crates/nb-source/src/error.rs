use thiserror::Error;

/// Why a set of initial positions could not be acquired.
///
/// Every variant is meant to be shown to the user as-is; none of them ever
/// reaches the integrator.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("expected \"x y\", got {got} value(s) in {input:?}")]
    WrongTokenCount { input: String, got: usize },

    #[error("{token:?} is not a number")]
    NotANumber { token: String },

    #[error("coordinates must be finite, got {input:?}")]
    NonFinite { input: String },

    #[error("expected {expected} position(s), got {got}")]
    CountMismatch { expected: usize, got: usize },

    #[error("position {agent} listed more than once")]
    DuplicateAgent { agent: u32 },

    #[error("position {agent} is missing")]
    MissingAgent { agent: u32 },

    #[error("position for agent {agent} is out of range for {expected} agent(s)")]
    UnknownAgent { agent: u32, expected: usize },

    #[error("input cancelled before all positions were entered")]
    Cancelled,

    #[error("position file parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SourceResult<T> = Result<T, SourceError>;

//! Error types for lfsim.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("singular configuration at step {step}: bodies `{first}` and `{second}` coincide")]
    SingularConfiguration {
        step: u64,
        first: String,
        second: String,
    },

    #[error("non-finite state for body `{body}` at step {step}")]
    NonFiniteState { step: u64, body: String },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    #[error("scenario parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

impl SimError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        SimError::InvalidConfiguration(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, SimError>;

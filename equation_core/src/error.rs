// Typed errors with thiserror. Every variant is recoverable: the session keeps its last good state.

use thiserror::Error;

/// Engine error types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Input text is not a two-sided linear equation in `x`.
    #[error("Invalid equation format: {0}")]
    Format(String),

    /// Multiply or divide by zero.
    #[error("Domain error: {0}")]
    Domain(String),

    #[error("Invalid operand: {0}")]
    InvalidOperand(String),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl EngineError {
    pub(crate) fn format(message: impl Into<String>) -> Self {
        EngineError::Format(message.into())
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Serialization(err.to_string())
    }
}

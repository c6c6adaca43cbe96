//! Error types for the agent generation pipeline

use thiserror::Error;

/// Errors that can occur during agent generation and management
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Agent not found in the store
    #[error("Agent not found: {0}")]
    AgentNotFound(String),

    /// Component not found in the catalog
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    /// Validation error on a public operation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error (programming error, should not occur)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for GeneratorError {
    fn from(err: serde_json::Error) -> Self {
        GeneratorError::Serialization(err.to_string())
    }
}

/// Result type alias for generator operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;

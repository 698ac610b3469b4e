//! Definition error types.

use crate::machine::FsmError;
use thiserror::Error;

/// Errors that can occur when loading or applying a machine definition
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// Serialization to JSON failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// The transitions could not be assembled into an engine
    #[error(transparent)]
    Machine(#[from] FsmError),
}

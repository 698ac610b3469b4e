//! Build errors for engine and transition builders.

use crate::machine::FsmError;
use thiserror::Error;

/// Errors that can occur when building engines and transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition action not specified. Call .action(name)")]
    MissingAction,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error(transparent)]
    Machine(#[from] FsmError),
}

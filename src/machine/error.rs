//! Engine error types.

use thiserror::Error;

/// Errors raised by the transition table and the engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    /// Two transitions share the same `(from_state, action)` pair.
    #[error("Transition for action [{action}] already registered in state '{from_state}'")]
    DuplicateAction { from_state: String, action: String },

    /// The action has no transition registered for the current state.
    #[error("Action [{action}] is not available in state '{state}'")]
    InvalidAction { action: String, state: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_action_names_the_action() {
        let err = FsmError::DuplicateAction {
            from_state: "off".into(),
            action: "start".into(),
        };
        assert_eq!(
            err.to_string(),
            "Transition for action [start] already registered in state 'off'"
        );
    }

    #[test]
    fn invalid_action_names_action_and_state() {
        let err = FsmError::InvalidAction {
            action: "move".into(),
            state: "off".into(),
        };
        assert_eq!(err.to_string(), "Action [move] is not available in state 'off'");
    }
}

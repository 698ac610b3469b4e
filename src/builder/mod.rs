//! Builder API for ergonomic engine construction.
//!
//! This module provides fluent builders and a macro for creating transition
//! tables and engines with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::FsmBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Stateful, Transition};

/// Create a default transition that only sets the host's state.
///
/// # Example
///
/// ```
/// use statekeeper::builder::simple_transition;
/// use statekeeper::core::Transition;
///
/// let transition: Transition<String> = simple_transition("off", "start", "idle");
/// assert!(!transition.is_custom());
/// ```
pub fn simple_transition<H, P>(from: &str, action: &str, to: &str) -> Transition<H, P>
where
    H: Stateful,
{
    Transition::new(from, action, to)
}

/// Create a transition whose behavior is `f`.
///
/// # Example
///
/// ```
/// use statekeeper::builder::custom_transition;
/// use statekeeper::core::{Stateful, Transition};
///
/// let transition: Transition<String> = custom_transition("off", "start", "idle", |host: &mut String, to, _| {
///     host.set_state(to);
/// });
/// assert!(transition.is_custom());
/// ```
pub fn custom_transition<H, P, F>(from: &str, action: &str, to: &str, f: F) -> Transition<H, P>
where
    H: 'static,
    P: 'static,
    F: Fn(&mut H, &str, Option<&P>) + Send + Sync + 'static,
{
    Transition::custom(from, action, to, f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::Fsm;
    use serde_json::{json, Value};

    #[derive(Debug)]
    struct Vehicle {
        state: String,
        prop: String,
    }

    impl Stateful for Vehicle {
        fn current_state(&self) -> &str {
            &self.state
        }

        fn set_state(&mut self, state: &str) {
            self.state = state.to_string();
        }
    }

    #[test]
    fn simple_transition_builds() {
        let transition = simple_transition::<String, Value>("off", "start", "idle");

        assert_eq!(transition.from_state(), "off");
        assert_eq!(transition.to_state(), "idle");
        assert!(!transition.is_custom());
    }

    #[test]
    fn custom_transition_runs_through_engine() {
        let mut host = Vehicle {
            state: "off".into(),
            prop: "initial".into(),
        };
        {
            let mut fsm = Fsm::new(
                &mut host,
                vec![custom_transition(
                    "off",
                    "custom_start",
                    "idle",
                    |host: &mut Vehicle, to, payload: Option<&Value>| {
                        if let Some(prop) = payload.and_then(|p| p["prop"].as_str()) {
                            host.prop = prop.to_string();
                        }
                        host.set_state(to);
                    },
                )],
            )
            .unwrap();
            fsm.process_with("custom_start", &json!({ "prop": "customized" }))
                .unwrap();
        }
        assert_eq!(host.prop, "customized");
        assert_eq!(host.state, "idle");
    }
}

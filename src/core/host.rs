//! The host object contract.
//!
//! A host is the external object whose state an [`Fsm`](crate::machine::Fsm)
//! drives. The engine reads the host's state once, when it is constructed,
//! and writes it back on every successful transition.

/// Capability implemented by any object whose state is driven by an FSM.
///
/// The host performs no validation of its own: the engine is the only
/// component that decides whether a state change is allowed.
///
/// # Example
///
/// ```rust
/// use statekeeper::core::Stateful;
///
/// struct Door {
///     state: String,
/// }
///
/// impl Stateful for Door {
///     fn current_state(&self) -> &str {
///         &self.state
///     }
///
///     fn set_state(&mut self, state: &str) {
///         self.state = state.to_string();
///     }
/// }
///
/// let mut door = Door { state: "closed".into() };
/// door.set_state("open");
/// assert_eq!(door.current_state(), "open");
/// ```
pub trait Stateful {
    /// The state the host currently reports.
    fn current_state(&self) -> &str;

    /// Apply a new state. Called by the engine after validation.
    fn set_state(&mut self, state: &str);
}

/// A bare `String` is the simplest host: its value is its state.
impl Stateful for String {
    fn current_state(&self) -> &str {
        self
    }

    fn set_state(&mut self, state: &str) {
        self.clear();
        self.push_str(state);
    }
}

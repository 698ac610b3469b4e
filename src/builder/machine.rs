//! Builder for constructing engines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Stateful, Transition};
use crate::machine::{Fsm, FsmConfig};
use serde_json::Value;

/// Builder for constructing an [`Fsm`] with a fluent API.
///
/// ```rust
/// use statekeeper::builder::{FsmBuilder, TransitionBuilder};
/// use statekeeper::core::Transition;
///
/// let mut host = String::from("off");
/// let fsm = FsmBuilder::new()
///     .add_transition(Transition::new("off", "start", "idle"))
///     .transition(TransitionBuilder::new().from("idle").action("move").to("moving"))
///     .unwrap()
///     .record_history(true)
///     .build(&mut host)
///     .unwrap();
///
/// assert_eq!(fsm.available_actions(), vec!["start"]);
/// ```
pub struct FsmBuilder<H, P = Value> {
    transitions: Vec<Transition<H, P>>,
    config: FsmConfig,
}

impl<H: Stateful> FsmBuilder<H> {
    /// Create a new builder for the default payload type.
    pub fn new() -> Self {
        Self::with_payload()
    }
}

impl<H: Stateful, P> FsmBuilder<H, P> {
    /// Create a new builder for any payload type.
    pub fn with_payload() -> Self {
        Self {
            transitions: Vec::new(),
            config: FsmConfig::default(),
        }
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<H, P>) -> Result<Self, BuildError>
    where
        H: 'static,
        P: 'static,
    {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<H, P>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: impl IntoIterator<Item = Transition<H, P>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: FsmConfig) -> Self {
        self.config = config;
        self
    }

    /// Toggle history recording.
    pub fn record_history(mut self, enabled: bool) -> Self {
        self.config.record_history = enabled;
        self
    }

    /// Keep only the `limit` most recent history records.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = Some(limit);
        self
    }

    /// Build the engine over `host`.
    /// Returns an error if two transitions share a `(from_state, action)` pair.
    pub fn build(self, host: &mut H) -> Result<Fsm<'_, H, P>, BuildError> {
        Ok(Fsm::configured(host, self.transitions, self.config)?)
    }
}

impl<H: Stateful> Default for FsmBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}

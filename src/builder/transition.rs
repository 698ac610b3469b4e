//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{
    is_set_state, BehaviorHandle, FnBehavior, SetState, Stateful, Transition, TransitionBehavior,
};
use serde_json::Value;
use std::sync::Arc;

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<H, P = Value> {
    from: Option<String>,
    action: Option<String>,
    to: Option<String>,
    behavior: Option<BehaviorHandle<H, P>>,
    custom: bool,
}

impl<H: Stateful + 'static, P: 'static> TransitionBuilder<H, P> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            action: None,
            to: None,
            behavior: None,
            custom: false,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: impl Into<String>) -> Self {
        self.from = Some(state.into());
        self
    }

    /// Set the action name (required).
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: impl Into<String>) -> Self {
        self.to = Some(state.into());
        self
    }

    /// Attach custom behavior (optional). Defaults to [`SetState`].
    ///
    /// Passing [`SetState`] itself keeps the transition non-custom.
    pub fn behavior<B>(mut self, behavior: B) -> Self
    where
        B: TransitionBehavior<H, P> + 'static,
    {
        self.custom = !is_set_state::<B>();
        self.behavior = Some(Arc::new(behavior));
        self
    }

    /// Attach custom behavior using a closure (optional).
    pub fn apply<F>(self, f: F) -> Self
    where
        F: Fn(&mut H, &str, Option<&P>) + Send + Sync + 'static,
    {
        self.behavior(FnBehavior::new(f))
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<H, P>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let action = self.action.ok_or(BuildError::MissingAction)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        let custom = self.custom;
        let behavior = self
            .behavior
            .unwrap_or_else(|| Arc::new(SetState) as BehaviorHandle<H, P>);

        Ok(Transition::from_parts(from, action, to, behavior, custom))
    }
}

impl<H: Stateful + 'static, P: 'static> Default for TransitionBuilder<H, P> {
    fn default() -> Self {
        Self::new()
    }
}

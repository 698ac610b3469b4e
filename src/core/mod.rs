//! Core types shared by the engine and its builders.
//!
//! This module contains:
//! - The `Stateful` host contract
//! - `Transition` rules and the `TransitionBehavior` executed when one fires
//! - Immutable history of executed transitions

mod history;
mod host;
mod transition;

pub(crate) use transition::is_set_state;
pub use history::{StateHistory, TransitionRecord};
pub use host::Stateful;
pub use transition::{
    ActionRef, BehaviorHandle, FnBehavior, SetState, Transition, TransitionBehavior,
};

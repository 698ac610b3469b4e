//! Declarative machine definitions.
//!
//! A [`MachineDefinition`] describes a transition table and engine
//! configuration as plain data, so it can be stored as JSON and loaded at
//! runtime. Only default transitions are expressible this way; transitions
//! with custom behavior are built in code.

use crate::core::{Stateful, Transition};
use crate::machine::{Fsm, FsmConfig};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::DefinitionError;

/// A `(from, action, to)` triple.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionDef {
    pub from: String,
    pub action: String,
    pub to: String,
}

impl TransitionDef {
    /// Turn the triple into a default transition.
    pub fn into_transition<H: Stateful, P>(self) -> Transition<H, P> {
        Transition::new(self.from, self.action, self.to)
    }
}

/// Serializable description of an engine: its configuration and its table.
///
/// # Example
///
/// ```rust
/// use statekeeper::definition::MachineDefinition;
///
/// let definition = MachineDefinition::from_json(r#"{
///     "config": { "record_history": true },
///     "transitions": [
///         { "from": "off", "action": "start", "to": "idle" },
///         { "from": "idle", "action": "turn_off", "to": "off" }
///     ]
/// }"#).unwrap();
///
/// let mut host = String::from("off");
/// let mut fsm = definition.build(&mut host).unwrap();
/// assert_eq!(fsm.process("start").unwrap(), "idle");
/// assert_eq!(fsm.history().unwrap().len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineDefinition {
    #[serde(default)]
    pub config: FsmConfig,

    pub transitions: Vec<TransitionDef>,
}

impl MachineDefinition {
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        serde_json::from_str(json).map_err(|e| DefinitionError::DeserializationFailed(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, DefinitionError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DefinitionError::SerializationFailed(e.to_string()))
    }

    pub fn into_transitions<H: Stateful, P>(self) -> Vec<Transition<H, P>> {
        self.transitions
            .into_iter()
            .map(TransitionDef::into_transition)
            .collect()
    }

    /// Build an engine over `host` from this definition.
    ///
    /// Duplicate `(from, action)` pairs are rejected exactly as they are by
    /// [`Fsm::new`].
    pub fn build<H: Stateful>(self, host: &mut H) -> Result<Fsm<'_, H>, DefinitionError> {
        let transitions = self
            .transitions
            .into_iter()
            .map(TransitionDef::into_transition);
        Ok(Fsm::with_config(host, transitions, self.config)?)
    }
}

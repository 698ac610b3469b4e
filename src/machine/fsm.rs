//! The engine: validates actions and executes transitions against a host.

use super::config::FsmConfig;
use super::error::FsmError;
use super::table::TransitionTable;
use crate::core::{ActionRef, StateHistory, Stateful, Transition, TransitionRecord};
use crate::definition::MachineDefinition;
use chrono::Utc;
use serde_json::Value;
use tracing::{debug, trace, warn};

/// Finite state machine driving the state of a borrowed host object.
///
/// The engine reads the host's state once, at construction, and keeps its
/// own copy from then on. Every successful [`process`](Self::process) writes
/// the new state to the host first and updates the cached state second, so
/// the two stay in lockstep. The host must outlive the engine.
///
/// # Example
///
/// ```rust
/// use statekeeper::core::{Stateful, Transition};
/// use statekeeper::machine::Fsm;
///
/// let mut host = String::from("off");
/// let mut fsm = Fsm::new(&mut host, vec![
///     Transition::new("off", "start", "idle"),
///     Transition::new("idle", "turn_off", "off"),
/// ])
/// .unwrap();
///
/// assert_eq!(fsm.available_actions(), vec!["start"]);
/// assert_eq!(fsm.process("start").unwrap(), "idle");
/// assert_eq!(fsm.host().current_state(), "idle");
/// ```
pub struct Fsm<'h, H: Stateful, P = Value> {
    host: &'h mut H,
    table: TransitionTable<H, P>,
    current: String,
    history: Option<StateHistory>,
}

impl<'h, H: Stateful> Fsm<'h, H> {
    /// Build an engine with the default configuration.
    ///
    /// Fails with [`FsmError::DuplicateAction`] if two transitions share a
    /// `(from_state, action)` pair; no engine is created in that case.
    pub fn new<I>(host: &'h mut H, transitions: I) -> Result<Self, FsmError>
    where
        I: IntoIterator<Item = Transition<H>>,
    {
        Self::configured(host, transitions, FsmConfig::default())
    }

    pub fn with_config<I>(
        host: &'h mut H,
        transitions: I,
        config: FsmConfig,
    ) -> Result<Self, FsmError>
    where
        I: IntoIterator<Item = Transition<H>>,
    {
        Self::configured(host, transitions, config)
    }
}

impl<'h, H: Stateful, P> Fsm<'h, H, P> {
    /// Build an engine for any payload type.
    pub fn configured<I>(
        host: &'h mut H,
        transitions: I,
        config: FsmConfig,
    ) -> Result<Self, FsmError>
    where
        I: IntoIterator<Item = Transition<H, P>>,
    {
        let table = TransitionTable::from_transitions(transitions)?;
        let current = host.current_state().to_string();

        let history = config.record_history.then(|| match config.history_limit {
            Some(limit) => StateHistory::with_limit(limit),
            None => StateHistory::new(),
        });

        debug!(
            initial = %current,
            transitions = table.len(),
            record_history = config.record_history,
            "state machine constructed"
        );

        Ok(Self {
            host,
            table,
            current,
            history,
        })
    }

    pub fn current_state(&self) -> &str {
        &self.current
    }

    /// Actions registered for the current state, sorted by name.
    pub fn available_actions(&self) -> Vec<&str> {
        self.table.actions(&self.current)
    }

    /// Whether `action` (a name or a transition carrying it) can fire now.
    pub fn is_action_valid<'a>(&self, action: impl Into<ActionRef<'a, H, P>>) -> bool
    where
        H: 'a,
        P: 'a,
    {
        let action = action.into().action();
        let valid = self.table.contains(&self.current, action);
        trace!(state = %self.current, action, valid, "checked action");
        valid
    }

    /// Whether no action can fire from the current state.
    pub fn is_terminal(&self) -> bool {
        self.available_actions().is_empty()
    }

    /// Fire `action` without a payload and return the new state.
    pub fn process<'a>(
        &mut self,
        action: impl Into<ActionRef<'a, H, P>>,
    ) -> Result<String, FsmError>
    where
        H: 'a,
        P: 'a,
    {
        self.dispatch(action.into(), None)
    }

    /// Fire `action`, handing `payload` to the transition's behavior.
    ///
    /// The default behavior ignores the payload; custom behaviors may read it.
    pub fn process_with<'a>(
        &mut self,
        action: impl Into<ActionRef<'a, H, P>>,
        payload: &P,
    ) -> Result<String, FsmError>
    where
        H: 'a,
        P: 'a,
    {
        self.dispatch(action.into(), Some(payload))
    }

    fn dispatch(
        &mut self,
        action: ActionRef<'_, H, P>,
        payload: Option<&P>,
    ) -> Result<String, FsmError> {
        let action = action.action();

        let Some(transition) = self.table.get(&self.current, action) else {
            debug!(state = %self.current, action, "rejected action");
            return Err(FsmError::InvalidAction {
                action: action.to_string(),
                state: self.current.clone(),
            });
        };

        // Host first, cache second: a panicking host leaves the cache untouched.
        transition.execute(self.host, payload);
        let from = std::mem::replace(&mut self.current, transition.to_state().to_string());

        debug!(
            from = %from,
            action,
            to = %self.current,
            custom = transition.is_custom(),
            "transitioned"
        );

        if let Some(history) = &mut self.history {
            history.push(TransitionRecord {
                from,
                action: action.to_string(),
                to: self.current.clone(),
                timestamp: Utc::now(),
            });
        }

        let reported = self.host.current_state();
        if reported != self.current {
            warn!(
                action,
                engine = %self.current,
                host = reported,
                "host state diverged from engine state"
            );
            debug_assert_eq!(
                reported, self.current,
                "host state diverged from engine state after [{action}]"
            );
        }

        Ok(self.current.clone())
    }

    /// The host this engine drives.
    pub fn host(&self) -> &H {
        &*self.host
    }

    pub fn table(&self) -> &TransitionTable<H, P> {
        &self.table
    }

    /// Executed transitions, if history recording is enabled.
    pub fn history(&self) -> Option<&StateHistory> {
        self.history.as_ref()
    }

    /// Export the table as a plain definition. Custom behaviors are dropped.
    pub fn definition(&self) -> MachineDefinition {
        MachineDefinition {
            config: FsmConfig {
                record_history: self.history.is_some(),
                history_limit: self.history.as_ref().and_then(StateHistory::limit),
            },
            transitions: self.table.iter().map(Transition::definition).collect(),
        }
    }
}

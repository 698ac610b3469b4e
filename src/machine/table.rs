//! Transition table indexed by `(from_state, action)`.

use super::error::FsmError;
use crate::core::Transition;
use serde_json::Value;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use tracing::trace;

/// Two-level lookup `from_state -> action -> Transition`.
///
/// Built once from a list of transitions and immutable afterwards. Actions
/// are unique per source state; states referenced only as a target, or never
/// reachable, are allowed.
pub struct TransitionTable<H, P = Value> {
    by_state: BTreeMap<String, BTreeMap<String, Transition<H, P>>>,
}

impl<H, P> TransitionTable<H, P> {
    /// Build a table, stopping at the first duplicate `(from_state, action)` pair.
    ///
    /// ```rust
    /// use statekeeper::core::Transition;
    /// use statekeeper::machine::{FsmError, TransitionTable};
    ///
    /// let result: Result<TransitionTable<String>, _> = TransitionTable::from_transitions(vec![
    ///     Transition::new("off", "start", "idle"),
    ///     Transition::new("off", "start", "moving"),
    /// ]);
    ///
    /// assert!(matches!(result, Err(FsmError::DuplicateAction { .. })));
    /// ```
    pub fn from_transitions<I>(transitions: I) -> Result<Self, FsmError>
    where
        I: IntoIterator<Item = Transition<H, P>>,
    {
        let mut table = Self {
            by_state: BTreeMap::new(),
        };
        for transition in transitions {
            table.insert(transition)?;
        }
        Ok(table)
    }

    fn insert(&mut self, transition: Transition<H, P>) -> Result<(), FsmError> {
        let actions = self
            .by_state
            .entry(transition.from_state().to_string())
            .or_default();

        match actions.entry(transition.action().to_string()) {
            Entry::Occupied(_) => Err(FsmError::DuplicateAction {
                from_state: transition.from_state().to_string(),
                action: transition.action().to_string(),
            }),
            Entry::Vacant(slot) => {
                trace!(
                    from = transition.from_state(),
                    action = transition.action(),
                    to = transition.to_state(),
                    "registered transition"
                );
                slot.insert(transition);
                Ok(())
            }
        }
    }

    /// Actions registered for `state`, sorted by name. Empty for unknown states.
    pub fn actions(&self, state: &str) -> Vec<&str> {
        self.by_state
            .get(state)
            .map(|actions| actions.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn get(&self, state: &str, action: &str) -> Option<&Transition<H, P>> {
        self.by_state.get(state)?.get(action)
    }

    pub fn contains(&self, state: &str, action: &str) -> bool {
        self.get(state, action).is_some()
    }

    /// Every state label seen as a source or a target.
    pub fn states(&self) -> BTreeSet<&str> {
        self.iter()
            .flat_map(|t| [t.from_state(), t.to_state()])
            .collect()
    }

    /// All transitions, ordered by source state then action.
    pub fn iter(&self) -> impl Iterator<Item = &Transition<H, P>> {
        self.by_state.values().flat_map(BTreeMap::values)
    }

    pub fn len(&self) -> usize {
        self.by_state.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<H, P> Clone for TransitionTable<H, P> {
    fn clone(&self) -> Self {
        Self {
            by_state: self.by_state.clone(),
        }
    }
}

impl<H, P> std::fmt::Debug for TransitionTable<H, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

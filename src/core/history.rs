//! Transition history tracking.
//!
//! Provides immutable tracking of the transitions an engine has executed,
//! following the same record-returns-new-history style throughout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single executed transition.
///
/// # Example
///
/// ```rust
/// use statekeeper::core::TransitionRecord;
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     from: "off".into(),
///     action: "start".into(),
///     to: "idle".into(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.action, "start");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state being transitioned from
    pub from: String,
    /// The action that fired
    pub action: String,
    /// The state being transitioned to
    pub to: String,
    /// When the transition completed
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of executed transitions.
///
/// [`record`](Self::record) returns a new history with the transition
/// added and leaves the original untouched. When a limit is set, only the most recent
/// `limit` records are kept.
///
/// # Example
///
/// ```rust
/// use statekeeper::core::{StateHistory, TransitionRecord};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(TransitionRecord {
///         from: "off".into(),
///         action: "start".into(),
///         to: "idle".into(),
///         timestamp: Utc::now(),
///     })
///     .record(TransitionRecord {
///         from: "idle".into(),
///         action: "move".into(),
///         to: "moving".into(),
///         timestamp: Utc::now(),
///     });
///
/// assert_eq!(history.get_path(), vec!["off", "idle", "moving"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateHistory {
    records: Vec<TransitionRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    limit: Option<usize>,
}

impl StateHistory {
    /// Create a new, unbounded, empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history that keeps at most `limit` records.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            records: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched. The oldest records are
    /// dropped once the limit is exceeded.
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut history = self.clone();
        history.push(record);
        history
    }

    /// Append a transition in place, dropping the oldest records past the limit.
    pub(crate) fn push(&mut self, record: TransitionRecord) {
        self.records.push(record);

        if let Some(limit) = self.limit {
            let excess = self.records.len().saturating_sub(limit);
            self.records.drain(..excess);
        }
    }

    /// States traversed, oldest first: the `from` of the first record,
    /// then the `to` of each record.
    pub fn get_path(&self) -> Vec<&str> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.first() {
            path.push(first.from.as_str());
        }
        for record in &self.records {
            path.push(record.to.as_str());
        }
        path
    }

    /// Time between the first and last recorded transitions.
    ///
    /// Returns `None` if nothing was recorded.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok()
        } else {
            None
        }
    }

    pub fn transitions(&self) -> &[TransitionRecord] {
        &self.records
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(from: &str, action: &str, to: &str) -> TransitionRecord {
        TransitionRecord {
            from: from.into(),
            action: action.into(),
            to: to.into(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert_eq!(history.limit(), None);
    }

    #[test]
    fn record_adds_transition() {
        let history = StateHistory::new();
        let new_history = history.record(record("off", "start", "idle"));

        assert_eq!(new_history.len(), 1);
        assert_eq!(new_history.transitions()[0].action, "start");
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let _new_history = history.record(record("off", "start", "idle"));

        assert_eq!(history.len(), 0);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(record("off", "start", "idle"))
            .record(record("idle", "move", "moving"))
            .record(record("moving", "turn_off", "california_cruisin"));

        assert_eq!(
            history.get_path(),
            vec!["off", "idle", "moving", "california_cruisin"]
        );
    }

    #[test]
    fn limit_keeps_most_recent_records() {
        let history = StateHistory::with_limit(2)
            .record(record("off", "start", "idle"))
            .record(record("idle", "move", "moving"))
            .record(record("moving", "stop", "idle"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.get_path(), vec!["idle", "moving", "idle"]);
        assert_eq!(history.limit(), Some(2));
    }

    #[test]
    fn push_matches_record_and_truncates_in_place() {
        let mut pushed = StateHistory::with_limit(2);
        pushed.push(record("off", "start", "idle"));
        pushed.push(record("idle", "move", "moving"));
        pushed.push(record("moving", "stop", "idle"));

        let recorded = StateHistory::with_limit(2)
            .record(record("off", "start", "idle"))
            .record(record("idle", "move", "moving"))
            .record(record("moving", "stop", "idle"));

        assert_eq!(pushed.len(), 2);
        assert_eq!(pushed.get_path(), vec!["idle", "moving", "idle"]);
        assert_eq!(pushed.get_path(), recorded.get_path());
    }

    #[test]
    fn zero_limit_keeps_nothing() {
        let history = StateHistory::with_limit(0).record(record("off", "start", "idle"));
        assert!(history.is_empty());
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let later = start + chrono::Duration::seconds(5);

        let history = StateHistory::new()
            .record(TransitionRecord {
                timestamp: start,
                ..record("off", "start", "idle")
            })
            .record(TransitionRecord {
                timestamp: later,
                ..record("idle", "move", "moving")
            });

        assert_eq!(history.duration(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::with_limit(10).record(record("off", "start", "idle"));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}

//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Options controlling optional engine bookkeeping.
///
/// The default configuration keeps no history, matching a bare engine.
///
/// ```rust
/// use statekeeper::machine::FsmConfig;
///
/// let config: FsmConfig = serde_json::from_str(r#"{ "record_history": true }"#).unwrap();
/// assert!(config.record_history);
/// assert_eq!(config.history_limit, None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FsmConfig {
    /// Record every successful transition in a [`StateHistory`](crate::core::StateHistory).
    pub record_history: bool,

    /// Keep only this many of the most recent records. Unbounded when `None`.
    pub history_limit: Option<usize>,
}

impl FsmConfig {
    /// Configuration with history recording switched on.
    pub fn with_history(limit: Option<usize>) -> Self {
        Self {
            record_history: true,
            history_limit: limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_records_nothing() {
        let config = FsmConfig::default();
        assert!(!config.record_history);
        assert_eq!(config.history_limit, None);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: FsmConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, FsmConfig::default());

        let config: FsmConfig = serde_json::from_str(r#"{ "history_limit": 3 }"#).unwrap();
        assert!(!config.record_history);
        assert_eq!(config.history_limit, Some(3));
    }

    #[test]
    fn with_history_enables_recording() {
        let config = FsmConfig::with_history(Some(8));
        assert!(config.record_history);
        assert_eq!(config.history_limit, Some(8));
    }
}

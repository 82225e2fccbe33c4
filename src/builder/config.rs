//! Automaton configuration.

use serde::{Deserialize, Serialize};

/// Settings applied when an automaton is created.
///
/// Missing fields fall back to their defaults when deserializing, so a
/// partial document such as `{"record_history": true}` is valid.
///
/// # Example
///
/// ```rust
/// use pushdown::builder::AutomatonConfig;
///
/// let config: AutomatonConfig = serde_json::from_str(r#"{"record_history": true}"#).unwrap();
/// assert!(config.record_history);
/// assert_eq!(config.initial_capacity, 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomatonConfig {
    /// Number of states the stack holds before it first reallocates
    pub initial_capacity: usize,

    /// Whether every lifecycle notification is recorded in a `StackHistory`
    pub record_history: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_records_nothing() {
        let config = AutomatonConfig::default();
        assert_eq!(config.initial_capacity, 0);
        assert!(!config.record_history);
    }

    #[test]
    fn empty_document_yields_defaults() {
        let config: AutomatonConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AutomatonConfig::default());
    }

    #[test]
    fn config_serializes_correctly() {
        let config = AutomatonConfig {
            initial_capacity: 8,
            record_history: true,
        };

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AutomatonConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
    }
}

//! Lifecycle notification history.
//!
//! Records every notification an automaton delivers, in firing order.
//! Only state names are kept, never the states themselves.

use super::state::Lifecycle;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single lifecycle notification.
///
/// # Example
///
/// ```rust
/// use pushdown::core::{Lifecycle, LifecycleEvent};
///
/// let event = LifecycleEvent::new(Lifecycle::Enter, "MainMenu", 1);
/// assert_eq!(event.kind, Lifecycle::Enter);
/// assert_eq!(event.state, "MainMenu");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LifecycleEvent {
    /// Which notification was delivered
    pub kind: Lifecycle,
    /// Name of the state that received it
    pub state: String,
    /// Stack depth at the moment the notification fired
    pub depth: usize,
    /// When the notification fired
    pub timestamp: DateTime<Utc>,
}

impl LifecycleEvent {
    /// Create an event stamped with the current time.
    pub fn new(kind: Lifecycle, state: impl Into<String>, depth: usize) -> Self {
        Self {
            kind,
            state: state.into(),
            depth,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of lifecycle notifications.
///
/// # Example
///
/// ```rust
/// use pushdown::core::{Lifecycle, LifecycleEvent, StackHistory};
///
/// let mut history = StackHistory::new();
/// history.record(LifecycleEvent::new(Lifecycle::Enter, "A", 1));
/// history.record(LifecycleEvent::new(Lifecycle::Pause, "A", 1));
/// history.record(LifecycleEvent::new(Lifecycle::Enter, "B", 2));
///
/// assert_eq!(history.names_for(Lifecycle::Enter), vec!["A", "B"]);
/// assert_eq!(history.names_for(Lifecycle::Pause), vec!["A"]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StackHistory {
    events: Vec<LifecycleEvent>,
}

impl StackHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append an event.
    pub fn record(&mut self, event: LifecycleEvent) {
        self.events.push(event);
    }

    /// All recorded events, oldest first.
    pub fn events(&self) -> &[LifecycleEvent] {
        &self.events
    }

    /// Names of the states that received `kind`, in firing order.
    pub fn names_for(&self, kind: Lifecycle) -> Vec<&str> {
        self.events
            .iter()
            .filter(|event| event.kind == kind)
            .map(|event| event.state.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Calculate total duration from first to last event.
    ///
    /// Returns `None` if nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.events.first(), self.events.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(kind: Lifecycle, state: &str, depth: usize) -> LifecycleEvent {
        LifecycleEvent::new(kind, state, depth)
    }

    #[test]
    fn new_history_is_empty() {
        let history = StackHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.events().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_preserves_order() {
        let mut history = StackHistory::new();
        history.record(event(Lifecycle::Enter, "A", 1));
        history.record(event(Lifecycle::Exit, "A", 0));

        let kinds: Vec<Lifecycle> = history.events().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![Lifecycle::Enter, Lifecycle::Exit]);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn names_for_filters_by_kind() {
        let mut history = StackHistory::new();
        history.record(event(Lifecycle::Enter, "A", 1));
        history.record(event(Lifecycle::Pause, "A", 1));
        history.record(event(Lifecycle::Enter, "B", 2));
        history.record(event(Lifecycle::Exit, "B", 1));
        history.record(event(Lifecycle::Resume, "A", 1));

        assert_eq!(history.names_for(Lifecycle::Enter), vec!["A", "B"]);
        assert_eq!(history.names_for(Lifecycle::Exit), vec!["B"]);
        assert_eq!(history.names_for(Lifecycle::Resume), vec!["A"]);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let mut history = StackHistory::new();
        history.record(event(Lifecycle::Enter, "A", 1));

        std::thread::sleep(Duration::from_millis(10));

        history.record(event(Lifecycle::Exit, "A", 0));

        let duration = history.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= Duration::from_millis(10));
    }

    #[test]
    fn single_event_has_duration_zero() {
        let mut history = StackHistory::new();
        history.record(event(Lifecycle::Enter, "A", 1));

        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = StackHistory::new();
        history.record(event(Lifecycle::Enter, "A", 1));
        history.record(event(Lifecycle::Pause, "A", 1));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StackHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.events(), history.events());
    }
}

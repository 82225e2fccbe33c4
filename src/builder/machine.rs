//! Builder for constructing pushdown automata.

use crate::automaton::PushdownAutomaton;
use crate::builder::config::AutomatonConfig;
use crate::core::State;

/// Builder for constructing automata with a fluent API.
pub struct AutomatonBuilder<S: State> {
    config: AutomatonConfig,
    initial: Vec<S>,
}

impl<S: State> AutomatonBuilder<S> {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self::from_config(AutomatonConfig::default())
    }

    /// Start from an existing configuration.
    pub fn from_config(config: AutomatonConfig) -> Self {
        Self {
            config,
            initial: Vec::new(),
        }
    }

    /// Reserve room for `capacity` states up front.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    /// Enable or disable notification history.
    pub fn record_history(mut self, enabled: bool) -> Self {
        self.config.record_history = enabled;
        self
    }

    /// Push a state as soon as the automaton is built.
    ///
    /// States are pushed in the order given, with the usual notifications.
    pub fn push(mut self, state: S) -> Self {
        self.initial.push(state);
        self
    }

    /// The configuration the automaton will be built with.
    pub fn config(&self) -> &AutomatonConfig {
        &self.config
    }

    /// Build the automaton.
    pub fn build(self) -> PushdownAutomaton<S> {
        let mut automaton = PushdownAutomaton::with_config(&self.config);
        for state in self.initial {
            automaton.push(state);
        }
        automaton
    }
}

impl<S: State> Default for AutomatonBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

//! Pushdown automaton driving lifecycle notifications over a state stack.

use crate::automaton::error::AutomatonError;
use crate::builder::AutomatonConfig;
use crate::core::{Lifecycle, LifecycleEvent, Stack, StackHistory, State};
use std::fmt;

/// A stack of states where only the top is active.
///
/// Pushing pauses the previous top and enters the new state. Popping exits
/// the removed state and resumes whatever it uncovers. The automaton owns
/// each state while it is on the stack and hands it back when popped.
///
/// # Example
///
/// ```rust
/// use pushdown::{AutomatonError, PushdownAutomaton, State};
///
/// struct Screen(&'static str);
///
/// impl State for Screen {
///     fn name(&self) -> &str { self.0 }
///     fn on_enter(&mut self) {}
///     fn on_exit(&mut self) {}
///     fn on_pause(&mut self) {}
///     fn on_resume(&mut self) {}
/// }
///
/// let mut automaton = PushdownAutomaton::new();
/// automaton.push(Screen("Title"));
/// automaton.push(Screen("Options"));
///
/// assert_eq!(automaton.current().unwrap().name(), "Options");
/// assert_eq!(automaton.pop().unwrap().name(), "Options");
/// assert_eq!(automaton.pop().unwrap().name(), "Title");
/// assert_eq!(automaton.pop().err(), Some(AutomatonError::EmptyStack));
/// ```
pub struct PushdownAutomaton<S: State> {
    states: Stack<S>,
    history: Option<StackHistory>,
}

impl<S: State> PushdownAutomaton<S> {
    /// Create an empty automaton with the default configuration.
    pub fn new() -> Self {
        Self::with_config(&AutomatonConfig::default())
    }

    /// Create an empty automaton from a configuration.
    pub fn with_config(config: &AutomatonConfig) -> Self {
        Self {
            states: Stack::with_capacity(config.initial_capacity),
            history: config.record_history.then(StackHistory::new),
        }
    }

    /// Push a state, making it the new top.
    ///
    /// The previous top (if any) is paused first, then `state` is pushed
    /// and entered. Never fails.
    pub fn push(&mut self, state: S) {
        let depth = self.states.len();
        if let Some(previous) = self.states.peek_mut() {
            Self::deliver(&mut self.history, Lifecycle::Pause, previous, depth);
        }
        log::debug!("pushing state '{}' at depth {}", state.name(), depth + 1);
        self.enter(state);
    }

    /// Pop the top state and hand it back.
    ///
    /// The popped state is exited, then the state it uncovers (if any) is
    /// resumed. Fails without side effects when the stack is empty.
    pub fn pop(&mut self) -> Result<S, AutomatonError> {
        let mut to_pop = self.states.pop().ok_or(AutomatonError::EmptyStack)?;
        let depth = self.states.len();
        log::debug!("popped state '{}', depth now {}", to_pop.name(), depth);

        Self::deliver(&mut self.history, Lifecycle::Exit, &mut to_pop, depth);
        if let Some(uncovered) = self.states.peek_mut() {
            Self::deliver(&mut self.history, Lifecycle::Resume, uncovered, depth);
        }
        Ok(to_pop)
    }

    /// Get the top state (pure).
    pub fn current(&self) -> Result<&S, AutomatonError> {
        self.states.peek().ok_or(AutomatonError::NoCurrentState)
    }

    /// Get the top state mutably. Fires no notifications.
    pub fn current_mut(&mut self) -> Result<&mut S, AutomatonError> {
        self.states.peek_mut().ok_or(AutomatonError::NoCurrentState)
    }

    /// Swap the top state for `state`.
    ///
    /// The old top is exited and `state` is entered. The state underneath
    /// stays paused throughout and receives nothing. On an empty stack this
    /// is a plain push and returns `None`.
    pub fn replace(&mut self, state: S) -> Option<S> {
        let mut replaced = self.states.pop();
        if let Some(old) = replaced.as_mut() {
            log::debug!("replacing state '{}' with '{}'", old.name(), state.name());
            Self::deliver(&mut self.history, Lifecycle::Exit, old, self.states.len());
        }
        self.enter(state);
        replaced
    }

    /// Pop every state, top first.
    ///
    /// Each state is exited; none of the uncovered states are resumed on
    /// the way down. Returns the removed states in pop order.
    pub fn clear(&mut self) -> Vec<S> {
        log::debug!("clearing {} states", self.states.len());
        let mut removed = Vec::with_capacity(self.states.len());
        while let Some(mut state) = self.states.pop() {
            Self::deliver(&mut self.history, Lifecycle::Exit, &mut state, self.states.len());
            removed.push(state);
        }
        removed
    }

    /// Number of states on the stack.
    pub fn depth(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Recorded notifications, if history recording is enabled.
    pub fn history(&self) -> Option<&StackHistory> {
        self.history.as_ref()
    }

    fn enter(&mut self, state: S) {
        self.states.push(state);
        let depth = self.states.len();
        if let Some(entered) = self.states.peek_mut() {
            Self::deliver(&mut self.history, Lifecycle::Enter, entered, depth);
        }
    }

    fn deliver(history: &mut Option<StackHistory>, kind: Lifecycle, state: &mut S, depth: usize) {
        log::trace!("{} '{}' at depth {}", kind, state.name(), depth);
        kind.notify(state);
        if let Some(history) = history {
            history.record(LifecycleEvent::new(kind, state.name(), depth));
        }
    }
}

impl<S: State> Default for PushdownAutomaton<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> fmt::Debug for PushdownAutomaton<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushdownAutomaton")
            .field("depth", &self.states.len())
            .field("current", &self.states.peek().map(|s| s.name()))
            .field("history", &self.history.as_ref().map(StackHistory::len))
            .finish()
    }
}

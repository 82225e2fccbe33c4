//! Errors raised by automaton operations on an empty stack.

use thiserror::Error;

/// Errors that can occur when operating on a pushdown automaton.
///
/// Both variants mean the stack held no state. Neither leaves any side
/// effect behind; push a state before retrying.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AutomatonError {
    #[error("cannot pop from empty automaton")]
    EmptyStack,

    #[error("no current state")]
    NoCurrentState,
}

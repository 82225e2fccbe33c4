//! The pushdown automaton and its errors.

pub mod error;
pub mod machine;

pub use error::AutomatonError;
pub use machine::PushdownAutomaton;

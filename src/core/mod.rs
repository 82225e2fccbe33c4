//! Core building blocks of the pushdown automaton.
//!
//! - `Stack`: the LIFO container the automaton is built on
//! - `State`: the lifecycle contract caller-supplied states implement
//! - `StackHistory`: an optional log of delivered notifications

mod history;
mod stack;
mod state;

pub use history::{LifecycleEvent, StackHistory};
pub use stack::Stack;
pub use state::{Lifecycle, State};

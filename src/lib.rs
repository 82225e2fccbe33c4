//! Pushdown: a stack of lifecycle-aware states
//!
//! A pushdown automaton keeps states on a stack where only the top one is
//! active. Pushing a state pauses the one it covers; popping a state resumes
//! the one it uncovers. This is the classic "state stack" used for UI
//! screens, game modes and nested interaction contexts.
//!
//! # Core Concepts
//!
//! - **State**: caller-defined values implementing the `State` trait's
//!   four lifecycle hooks
//! - **PushdownAutomaton**: owns the stack and fires hooks in a fixed order
//! - **StackHistory**: optional record of every hook the automaton fired
//!
//! # Example
//!
//! ```rust
//! use pushdown::{AutomatonBuilder, Lifecycle, State};
//!
//! struct Mode(&'static str);
//!
//! impl State for Mode {
//!     fn name(&self) -> &str { self.0 }
//!     fn on_enter(&mut self) {}
//!     fn on_exit(&mut self) {}
//!     fn on_pause(&mut self) {}
//!     fn on_resume(&mut self) {}
//! }
//!
//! let mut automaton = AutomatonBuilder::new().record_history(true).build();
//! automaton.push(Mode("Explore"));
//! automaton.push(Mode("Dialogue"));
//! automaton.pop().unwrap();
//!
//! let history = automaton.history().unwrap();
//! assert_eq!(history.names_for(Lifecycle::Pause), vec!["Explore"]);
//! assert_eq!(history.names_for(Lifecycle::Resume), vec!["Explore"]);
//! ```

pub mod automaton;
pub mod builder;
pub mod core;

// Re-export commonly used types
pub use automaton::{AutomatonError, PushdownAutomaton};
pub use builder::{AutomatonBuilder, AutomatonConfig};
pub use self::core::{Lifecycle, LifecycleEvent, Stack, StackHistory, State};

//! Configuration and builder API for automata.
//!
//! `AutomatonConfig` is plain serde data; `AutomatonBuilder` layers a
//! fluent API over it and can seed the stack with initial states.

pub mod config;
pub mod machine;

pub use config::AutomatonConfig;
pub use machine::AutomatonBuilder;

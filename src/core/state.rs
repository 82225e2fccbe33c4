//! Core State trait for pushdown automaton states.
//!
//! States are caller-defined values that receive four lifecycle
//! notifications as the automaton's stack changes around them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Trait for states held by a pushdown automaton.
///
/// The automaton calls these hooks synchronously while it pushes and pops:
///
/// - `on_enter`: the state has just been pushed and is now on top
/// - `on_exit`: the state has just been popped off the stack
/// - `on_pause`: another state is about to be pushed over this one
/// - `on_resume`: the state above this one was popped, this one is on top again
///
/// # Example
///
/// ```rust
/// use pushdown::core::State;
///
/// struct MainMenu {
///     visible: bool,
/// }
///
/// impl State for MainMenu {
///     fn name(&self) -> &str {
///         "MainMenu"
///     }
///
///     fn on_enter(&mut self) {
///         self.visible = true;
///     }
///
///     fn on_exit(&mut self) {
///         self.visible = false;
///     }
///
///     fn on_pause(&mut self) {
///         self.visible = false;
///     }
///
///     fn on_resume(&mut self) {
///         self.visible = true;
///     }
/// }
/// ```
pub trait State {
    /// Get the state's name for logging and history.
    ///
    /// Default implementation returns the implementing type's name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Called once the state has been pushed onto the stack.
    fn on_enter(&mut self);

    /// Called once the state has been popped off the stack.
    fn on_exit(&mut self);

    /// Called before another state is pushed on top of this one.
    fn on_pause(&mut self);

    /// Called when this state becomes the top of the stack again.
    fn on_resume(&mut self);
}

impl<S: State + ?Sized> State for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn on_enter(&mut self) {
        (**self).on_enter()
    }

    fn on_exit(&mut self) {
        (**self).on_exit()
    }

    fn on_pause(&mut self) {
        (**self).on_pause()
    }

    fn on_resume(&mut self) {
        (**self).on_resume()
    }
}

/// The four lifecycle notifications a state can receive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lifecycle {
    Enter,
    Exit,
    Pause,
    Resume,
}

impl Lifecycle {
    /// Deliver this notification to a state.
    pub fn notify<S: State + ?Sized>(self, state: &mut S) {
        match self {
            Self::Enter => state.on_enter(),
            Self::Exit => state.on_exit(),
            Self::Pause => state.on_pause(),
            Self::Resume => state.on_resume(),
        }
    }
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Enter => "enter",
            Self::Exit => "exit",
            Self::Pause => "pause",
            Self::Resume => "resume",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        enters: usize,
        exits: usize,
        pauses: usize,
        resumes: usize,
    }

    impl State for Counter {
        fn on_enter(&mut self) {
            self.enters += 1;
        }

        fn on_exit(&mut self) {
            self.exits += 1;
        }

        fn on_pause(&mut self) {
            self.pauses += 1;
        }

        fn on_resume(&mut self) {
            self.resumes += 1;
        }
    }

    struct Named(&'static str);

    impl State for Named {
        fn name(&self) -> &str {
            self.0
        }

        fn on_enter(&mut self) {}
        fn on_exit(&mut self) {}
        fn on_pause(&mut self) {}
        fn on_resume(&mut self) {}
    }

    #[test]
    fn notify_dispatches_to_matching_hook() {
        let mut counter = Counter::default();

        Lifecycle::Enter.notify(&mut counter);
        Lifecycle::Pause.notify(&mut counter);
        Lifecycle::Pause.notify(&mut counter);
        Lifecycle::Resume.notify(&mut counter);
        Lifecycle::Exit.notify(&mut counter);

        assert_eq!(counter.enters, 1);
        assert_eq!(counter.pauses, 2);
        assert_eq!(counter.resumes, 1);
        assert_eq!(counter.exits, 1);
    }

    #[test]
    fn default_name_is_type_name() {
        let counter = Counter::default();
        assert!(counter.name().ends_with("Counter"));
    }

    #[test]
    fn boxed_state_delegates() {
        let mut boxed: Box<dyn State> = Box::new(Named("Inventory"));
        assert_eq!(boxed.name(), "Inventory");

        let mut counter: Box<Counter> = Box::default();
        Lifecycle::Enter.notify(&mut counter);
        Lifecycle::Exit.notify(&mut boxed);
        assert_eq!(counter.enters, 1);
    }

    #[test]
    fn lifecycle_displays_lowercase() {
        assert_eq!(Lifecycle::Enter.to_string(), "enter");
        assert_eq!(Lifecycle::Exit.to_string(), "exit");
        assert_eq!(Lifecycle::Pause.to_string(), "pause");
        assert_eq!(Lifecycle::Resume.to_string(), "resume");
    }

    #[test]
    fn lifecycle_serializes_correctly() {
        let json = serde_json::to_string(&Lifecycle::Resume).unwrap();
        let deserialized: Lifecycle = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Lifecycle::Resume);
    }
}

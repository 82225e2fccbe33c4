//! Screen Stack
//!
//! This example drives a small menu flow through a pushdown automaton.
//!
//! Key concepts:
//! - Opening a screen pauses the one underneath
//! - Closing a screen resumes the one it uncovers
//! - Boxed states let different screen types share one stack
//! - History records every notification in firing order
//!
//! Run with: RUST_LOG=debug cargo run --example screen_stack

use pushdown::{AutomatonBuilder, State};

struct Gameplay {
    ticking: bool,
}

impl State for Gameplay {
    fn name(&self) -> &str {
        "Gameplay"
    }

    fn on_enter(&mut self) {
        self.ticking = true;
        println!("  gameplay: world loaded");
    }

    fn on_exit(&mut self) {
        self.ticking = false;
        println!("  gameplay: world unloaded");
    }

    fn on_pause(&mut self) {
        self.ticking = false;
        println!("  gameplay: simulation frozen");
    }

    fn on_resume(&mut self) {
        if !self.ticking {
            println!("  gameplay: simulation running");
        }
        self.ticking = true;
    }
}

struct Menu {
    title: &'static str,
}

impl State for Menu {
    fn name(&self) -> &str {
        self.title
    }

    fn on_enter(&mut self) {
        println!("  {}: opened", self.title);
    }

    fn on_exit(&mut self) {
        println!("  {}: closed", self.title);
    }

    fn on_pause(&mut self) {
        println!("  {}: hidden", self.title);
    }

    fn on_resume(&mut self) {
        println!("  {}: shown", self.title);
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== Screen Stack Example ===\n");

    let mut screens = AutomatonBuilder::<Box<dyn State>>::new()
        .record_history(true)
        .build();

    println!("Start game:");
    screens.push(Box::new(Gameplay { ticking: false }));

    println!("\nOpen pause menu:");
    screens.push(Box::new(Menu { title: "PauseMenu" }));

    println!("\nOpen settings:");
    screens.push(Box::new(Menu { title: "Settings" }));

    if let Ok(current) = screens.current() {
        println!("\nCurrent screen: {}", current.name());
    }

    println!("\nClose settings:");
    if let Ok(closed) = screens.pop() {
        println!("  (handed back '{}')", closed.name());
    }

    println!("\nClose pause menu:");
    let _ = screens.pop();

    println!("\nQuit to desktop:");
    let removed = screens.clear();
    println!("  {} screen(s) torn down", removed.len());

    if let Some(history) = screens.history() {
        println!("\nNotification history:");
        for event in history.events() {
            println!("  [depth {}] {} {}", event.depth, event.kind, event.state);
        }
    }

    println!("\n=== Example Complete ===");
}

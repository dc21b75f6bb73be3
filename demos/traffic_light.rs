//! Traffic Light State Machine
//!
//! This example demonstrates a cyclic machine with undo/redo.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Stepping back and forward through history
//! - Redo invalidation on a fresh transition
//! - Transition errors for unhandled events
//!
//! Run with: cargo run --example traffic_light

use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use waypoint::{fsm_config, FiniteStateMachine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    println!("=== Traffic Light State Machine ===\n");

    let config = fsm_config! {
        initial: green,
        states: {
            green: { timer => yellow },
            yellow: { timer => red },
            red: { timer => green },
        }
    }?;

    let mut light = FiniteStateMachine::new(config)?;
    println!("Initial state: {}\n", light.state());

    light.trigger("timer")?;
    light.trigger("timer")?;
    println!("After two timer ticks: {}", light.state());
    println!("History: {:?}\n", light.history());

    while light.undo() {
        println!("Undo -> {}", light.state());
    }
    println!("Nothing left to undo\n");

    light.redo();
    println!("Redo -> {}", light.state());

    light.trigger("timer")?;
    println!("Timer -> {} (redo stack cleared: {})", light.state(), !light.can_redo());

    if let Err(e) = light.trigger("emergency") {
        println!("\nUnhandled event rejected: {e}");
    }

    println!("\n=== Example Complete ===");
    Ok(())
}

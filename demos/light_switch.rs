//! Light Switch
//!
//! This example walks the power switch machine forward and back through
//! its history.
//!
//! Key concepts:
//! - Loading a configuration from JSON
//! - Event-driven transitions
//! - Undo/redo over visited states
//!
//! Run with: cargo run --example light_switch

use rewind_fsm::{Fsm, FsmConfig};

const CONFIG: &str = r#"{
    "initial": "off",
    "states": {
        "off": { "transitions": { "power": "on" } },
        "on": { "transitions": { "power": "off" } }
    }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Light Switch ===\n");

    let mut switch = Fsm::new(FsmConfig::from_json(CONFIG)?);
    println!("Initial state: {}", switch.state());

    switch.trigger("power")?;
    println!("power -> {}", switch.state());
    switch.trigger("power")?;
    println!("power -> {}", switch.state());

    while switch.undo() {
        println!("undo  -> {}", switch.state());
    }
    while switch.redo() {
        println!("redo  -> {}", switch.state());
    }

    match switch.trigger("dim") {
        Ok(()) => println!("dim was accepted"),
        Err(e) => println!("dim rejected: {e}"),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}

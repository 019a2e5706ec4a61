//! Document Review
//!
//! This example models a small publishing workflow and shows how direct
//! state changes, reset and history clearing interact.
//!
//! Key concepts:
//! - Declaring a configuration with `fsm_config!`
//! - Querying which states react to an event
//! - `reset` keeps history, `clear_history` drops it
//!
//! Run with: cargo run --example document_review

use rewind_fsm::{fsm_config, Fsm};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Document Review ===\n");

    let mut doc = Fsm::new(fsm_config! {
        initial: draft,
        states: {
            draft: { submit => review },
            review: { approve => published, reject => draft },
            published: { retract => draft },
        }
    });

    let rejectable: Vec<String> = doc
        .states(Some("reject"))
        .into_iter()
        .map(ToString::to_string)
        .collect();
    println!("States that handle 'reject': {rejectable:?}");

    doc.trigger("submit")?;
    doc.trigger("reject")?;
    doc.trigger("submit")?;
    doc.trigger("approve")?;
    println!("History: {:?}", doc.history());

    doc.change_state("review")?;
    println!("Moved back to review directly: {:?}", doc.history());

    doc.reset();
    println!("After reset, state {} with {} history entries", doc.state(), doc.history().len());

    doc.clear_history();
    println!("After clear, history {:?}, undo available: {}", doc.history(), doc.can_undo());

    println!("\n=== Example Complete ===");
    Ok(())
}

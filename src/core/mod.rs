//! Core data types shared by the engine.
//!
//! This module contains:
//! - Opaque state and event identifiers
//! - The linear undo/redo history

mod history;
mod ids;

pub use history::StateHistory;
pub use ids::{EventId, StateId};

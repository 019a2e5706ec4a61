//! The state machine engine.
//!
//! [`Fsm`] interprets an [`crate::config::FsmConfig`]: it tracks the current
//! state, applies event transitions and direct state changes, and supports
//! linear undo/redo over the states it has visited.
//!
//! Operations that can be rejected return [`FsmError`]; `undo` and `redo`
//! report availability as a `bool`. In both cases a rejected call leaves the
//! engine exactly as it was.
//!
//! An `Fsm` is a plain owned value with no interior mutability. Share one
//! across threads behind a lock, or keep each instance on one task.

mod error;
mod machine;

pub use error::FsmError;
pub use machine::Fsm;

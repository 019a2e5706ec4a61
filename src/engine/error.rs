//! Engine operation errors.

use crate::core::{EventId, StateId};
use thiserror::Error;

/// Reasons an engine operation was rejected.
///
/// A rejected operation never changes the current state or either history
/// stack.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    /// The state is not defined in the configuration. Returned by
    /// `change_state` for an unknown target, and by `trigger` when the
    /// machine sits in a state the configuration does not define.
    #[error("State '{state}' is not defined in the configuration")]
    InvalidState { state: StateId },

    /// The current state has no transition for the event.
    #[error("No transition for event '{event}' from state '{state}'")]
    InvalidEvent { state: StateId, event: EventId },
}

//! Configuration-driven state machine with undo/redo.

use crate::config::FsmConfig;
use crate::core::{EventId, StateHistory, StateId};
use crate::engine::error::FsmError;
use std::sync::Arc;
use tracing::{debug, trace};

/// Tracks the current state of a configured machine.
///
/// Every mutating operation either completes or fails before touching any
/// field. The configuration is shared and never modified.
///
/// # Redo does not re-record
///
/// `redo` restores the state without appending it to the history. After
/// `undo(); redo();` a further `undo` therefore steps back past the entry
/// preceding the redone state rather than reversing the redo itself:
///
/// ```rust
/// use rewind_fsm::{fsm_config, Fsm};
///
/// let mut fsm = Fsm::new(fsm_config! {
///     initial: a,
///     states: {
///         a: { next => b },
///         b: { next => c },
///         c: {},
///     }
/// });
/// fsm.trigger("next").unwrap();
/// fsm.trigger("next").unwrap();
///
/// assert!(fsm.undo());
/// assert!(fsm.redo());
/// assert_eq!(fsm.state(), "c");
///
/// // history is now [a, b]; this undo lands on a, not b
/// assert!(fsm.undo());
/// assert_eq!(fsm.state(), "a");
/// ```
#[derive(Clone, Debug)]
pub struct Fsm {
    config: Arc<FsmConfig>,
    state: StateId,
    history: StateHistory,
}

impl Fsm {
    /// Create an engine positioned at `config.initial`.
    ///
    /// Accepts either an owned `FsmConfig` or an `Arc` shared with other
    /// engines. The initial state is not checked against the state map.
    pub fn new(config: impl Into<Arc<FsmConfig>>) -> Self {
        let config = config.into();
        let state = config.initial.clone();
        Self {
            history: StateHistory::new(state.clone()),
            state,
            config,
        }
    }

    pub fn config(&self) -> &Arc<FsmConfig> {
        &self.config
    }

    /// Current state.
    pub fn state(&self) -> &StateId {
        &self.state
    }

    /// Jump directly to `target`, ignoring transition rules.
    ///
    /// Fails with [`FsmError::InvalidState`] if `target` is not a configured
    /// state.
    pub fn change_state(&mut self, target: &str) -> Result<(), FsmError> {
        let Some((target, _)) = self.config.states.get_key_value(target) else {
            debug!(state = %self.state, requested = target, "rejected change to unknown state");
            return Err(FsmError::InvalidState {
                state: StateId::from(target),
            });
        };

        debug!(from = %self.state, to = %target, "changed state directly");
        self.state = target.clone();
        self.history.record(target.clone());
        Ok(())
    }

    /// Apply the transition registered for `event` in the current state.
    ///
    /// The target is taken as configured, even if it names no defined state.
    pub fn trigger(&mut self, event: &str) -> Result<(), FsmError> {
        let Some(definition) = self.config.state(self.state.as_str()) else {
            debug!(state = %self.state, event, "rejected event in undefined state");
            return Err(FsmError::InvalidState {
                state: self.state.clone(),
            });
        };

        let Some(target) = definition.target(event) else {
            debug!(state = %self.state, event, "rejected event with no transition");
            return Err(FsmError::InvalidEvent {
                state: self.state.clone(),
                event: EventId::from(event),
            });
        };

        debug!(from = %self.state, event, to = %target, "applied transition");
        self.state = target.clone();
        self.history.record(target.clone());
        Ok(())
    }

    /// Return to the initial state.
    ///
    /// History is left untouched; call [`Fsm::clear_history`] as well for a
    /// clean slate.
    pub fn reset(&mut self) {
        trace!(from = %self.state, to = %self.config.initial, "reset");
        self.state = self.config.initial.clone();
    }

    /// Configured states, optionally only those handling `event`.
    ///
    /// An event no state handles yields an empty list.
    pub fn states(&self, event: Option<&str>) -> Vec<&StateId> {
        self.config
            .states
            .iter()
            .filter(|(_, definition)| event.is_none_or(|e| definition.handles(e)))
            .map(|(id, _)| id)
            .collect()
    }

    /// Step back one entry in the history.
    ///
    /// Returns `false` without changing anything when only the initial entry
    /// remains.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.step_back(&self.state) else {
            trace!(state = %self.state, "nothing to undo");
            return false;
        };

        trace!(from = %self.state, to = %previous, "undo");
        self.state = previous.clone();
        true
    }

    /// Restore the most recently undone state.
    ///
    /// Returns `false` without changing anything when nothing was undone
    /// since the last transition, direct change or history clear.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.history.step_forward() else {
            trace!(state = %self.state, "nothing to redo");
            return false;
        };

        trace!(from = %self.state, to = %next, "redo");
        self.state = next;
        true
    }

    /// Collapse the history to the current state and drop redo entries.
    pub fn clear_history(&mut self) {
        trace!(state = %self.state, "cleared history");
        self.history.collapse(self.state.clone());
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_step_back()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_step_forward()
    }

    /// States visited, oldest first.
    pub fn history(&self) -> &[StateId] {
        self.history.path()
    }

    /// States available for redo, most recently undone last.
    pub fn undo_history(&self) -> &[StateId] {
        self.history.undone()
    }
}

impl From<FsmConfig> for Fsm {
    fn from(config: FsmConfig) -> Self {
        Self::new(config)
    }
}

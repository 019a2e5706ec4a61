//! Linear undo/redo history.
//!
//! A [`StateHistory`] keeps two stacks: the path of visited states, oldest
//! first, and the states removed from that path by undo, most recently
//! undone last.

use super::ids::StateId;
use serde::{Deserialize, Serialize};

/// Visited states plus the undone states available for redo.
///
/// The path is never empty. Recording a new state empties the redo stack.
///
/// # Example
///
/// ```rust
/// use rewind_fsm::core::{StateHistory, StateId};
///
/// let mut history = StateHistory::new(StateId::from("off"));
/// history.record(StateId::from("on"));
///
/// let current = StateId::from("on");
/// assert_eq!(history.step_back(&current), Some(&StateId::from("off")));
/// assert_eq!(history.undone(), &[StateId::from("on")]);
/// assert_eq!(history.step_forward(), Some(StateId::from("on")));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateHistory {
    path: Vec<StateId>,
    undone: Vec<StateId>,
}

impl StateHistory {
    /// Start a history rooted at `initial`.
    pub fn new(initial: StateId) -> Self {
        Self {
            path: vec![initial],
            undone: Vec::new(),
        }
    }

    /// Append a newly entered state and drop everything available for redo.
    pub fn record(&mut self, state: StateId) {
        self.path.push(state);
        self.undone.clear();
    }

    /// Step back one entry.
    ///
    /// `current` is the state being left; it is pushed onto the redo stack.
    /// Returns the state to restore, or `None` when only the root entry is
    /// left, in which case nothing changes.
    pub fn step_back(&mut self, current: &StateId) -> Option<&StateId> {
        if !self.can_step_back() {
            return None;
        }
        self.path.pop();
        self.undone.push(current.clone());
        self.path.last()
    }

    /// Pop the most recently undone state.
    ///
    /// The restored state is not appended to the path, so a following
    /// `step_back` pops the entry before it.
    pub fn step_forward(&mut self) -> Option<StateId> {
        self.undone.pop()
    }

    /// Collapse the path to `current` and forget all undone states.
    pub fn collapse(&mut self, current: StateId) {
        self.path.clear();
        self.path.push(current);
        self.undone.clear();
    }

    pub fn can_step_back(&self) -> bool {
        self.path.len() > 1
    }

    pub fn can_step_forward(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Visited states, oldest first.
    pub fn path(&self) -> &[StateId] {
        &self.path
    }

    /// Undone states, most recently undone last.
    pub fn undone(&self) -> &[StateId] {
        &self.undone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> StateId {
        StateId::from(s)
    }

    #[test]
    fn new_history_holds_only_the_root() {
        let history = StateHistory::new(id("idle"));
        assert_eq!(history.path(), &[id("idle")]);
        assert!(history.undone().is_empty());
        assert!(!history.can_step_back());
        assert!(!history.can_step_forward());
    }

    #[test]
    fn record_appends_and_clears_redo() {
        let mut history = StateHistory::new(id("a"));
        history.record(id("b"));
        history.step_back(&id("b"));
        assert!(history.can_step_forward());

        history.record(id("c"));
        assert_eq!(history.path(), &[id("a"), id("c")]);
        assert!(history.undone().is_empty());
    }

    #[test]
    fn step_back_never_pops_the_root() {
        let mut history = StateHistory::new(id("a"));
        assert_eq!(history.step_back(&id("a")), None);
        assert_eq!(history.path(), &[id("a")]);
        assert!(history.undone().is_empty());
    }

    #[test]
    fn step_back_pushes_the_current_state() {
        let mut history = StateHistory::new(id("a"));
        history.record(id("b"));

        // current differs from the path tip, as it does after a reset
        assert_eq!(history.step_back(&id("a")), Some(&id("a")));
        assert_eq!(history.undone(), &[id("a")]);
    }

    #[test]
    fn step_forward_does_not_touch_the_path() {
        let mut history = StateHistory::new(id("a"));
        history.record(id("b"));
        history.step_back(&id("b"));

        assert_eq!(history.step_forward(), Some(id("b")));
        assert_eq!(history.path(), &[id("a")]);
        assert_eq!(history.step_forward(), None);
    }

    #[test]
    fn collapse_keeps_only_the_current_state() {
        let mut history = StateHistory::new(id("a"));
        history.record(id("b"));
        history.record(id("c"));
        history.step_back(&id("c"));

        history.collapse(id("b"));
        assert_eq!(history.path(), &[id("b")]);
        assert!(history.undone().is_empty());
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = StateHistory::new(id("a"));
        history.record(id("b"));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(history, deserialized);
    }
}

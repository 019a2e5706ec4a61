//! Builder for a single state definition.

use crate::builder::error::BuildError;
use crate::config::StateDefinition;
use crate::core::{EventId, StateId};

/// Builder for one state and its outgoing transitions.
///
/// # Example
///
/// ```
/// use rewind_fsm::builder::StateBuilder;
///
/// let (id, definition) = StateBuilder::new("off")
///     .on("power", "on")
///     .build()
///     .unwrap();
///
/// assert_eq!(id, "off");
/// assert!(definition.handles("power"));
/// ```
pub struct StateBuilder {
    id: StateId,
    transitions: Vec<(EventId, StateId)>,
}

impl StateBuilder {
    /// Start describing the state `id`.
    pub fn new(id: impl Into<StateId>) -> Self {
        Self {
            id: id.into(),
            transitions: Vec::new(),
        }
    }

    /// Go to `target` when `event` arrives.
    pub fn on(mut self, event: impl Into<EventId>, target: impl Into<StateId>) -> Self {
        self.transitions.push((event.into(), target.into()));
        self
    }

    /// Build the state.
    /// Returns an error if an event was registered twice.
    pub fn build(self) -> Result<(StateId, StateDefinition), BuildError> {
        let mut definition = StateDefinition::new();
        for (event, target) in self.transitions {
            if definition.handles(event.as_str()) {
                return Err(BuildError::DuplicateTransition {
                    state: self.id,
                    event,
                });
            }
            definition.transitions.insert(event, target);
        }
        Ok((self.id, definition))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_state_with_transitions() {
        let (id, definition) = StateBuilder::new("on")
            .on("power", "off")
            .on("break", "broken")
            .build()
            .unwrap();

        assert_eq!(id, "on");
        assert_eq!(definition.target("power"), Some(&StateId::from("off")));
        assert_eq!(definition.target("break"), Some(&StateId::from("broken")));
    }

    #[test]
    fn state_without_transitions_builds() {
        let (_, definition) = StateBuilder::new("done").build().unwrap();
        assert!(definition.transitions.is_empty());
    }

    #[test]
    fn duplicate_event_is_rejected() {
        let result = StateBuilder::new("on")
            .on("power", "off")
            .on("power", "standby")
            .build();

        assert_eq!(
            result.unwrap_err(),
            BuildError::DuplicateTransition {
                state: StateId::from("on"),
                event: EventId::from("power"),
            }
        );
    }
}

//! Builder for constructing configurations.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::config::{FsmConfig, StateDefinition};
use crate::core::StateId;
use std::collections::BTreeMap;

/// Builder for constructing configurations with a fluent API.
///
/// Only the shape is checked. Whether `initial` and the transition targets
/// name defined states is left to the engine.
///
/// # Example
///
/// ```
/// use rewind_fsm::builder::{FsmConfigBuilder, StateBuilder};
/// use rewind_fsm::Fsm;
///
/// let config = FsmConfigBuilder::new()
///     .initial("off")
///     .state(StateBuilder::new("off").on("power", "on"))
///     .and_then(|b| b.state(StateBuilder::new("on").on("power", "off")))
///     .and_then(|b| b.build())
///     .unwrap();
///
/// let mut fsm = Fsm::new(config);
/// fsm.trigger("power").unwrap();
/// assert_eq!(fsm.state(), "on");
/// ```
pub struct FsmConfigBuilder {
    initial: Option<StateId>,
    states: BTreeMap<StateId, StateDefinition>,
}

impl FsmConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: BTreeMap::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Add a state using a builder.
    /// Returns an error if the builder fails or the state already exists.
    pub fn state(self, builder: StateBuilder) -> Result<Self, BuildError> {
        let (id, definition) = builder.build()?;
        self.add_state(id, definition)
    }

    /// Add a pre-built state definition.
    pub fn add_state(
        mut self,
        id: impl Into<StateId>,
        definition: StateDefinition,
    ) -> Result<Self, BuildError> {
        let id = id.into();
        if self.states.contains_key(&id) {
            return Err(BuildError::DuplicateState { state: id });
        }
        self.states.insert(id, definition);
        Ok(self)
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<FsmConfig, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        Ok(FsmConfig {
            initial,
            states: self.states,
        })
    }
}

impl Default for FsmConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

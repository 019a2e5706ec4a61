//! Declarative machine configuration.
//!
//! A configuration names the initial state and, for every state, the events
//! it reacts to and where each one leads. It is plain data: build it by hand,
//! with [`crate::builder::FsmConfigBuilder`], with [`crate::fsm_config!`], or
//! load it from JSON.
//!
//! Nothing is validated on load. An `initial` or a transition target that
//! names no defined state is accepted as-is; the engine reports the problem
//! only when an operation actually needs the missing definition.
//!
//! # Example
//!
//! ```rust
//! use rewind_fsm::config::FsmConfig;
//!
//! let config = FsmConfig::from_json(r#"{
//!     "initial": "off",
//!     "states": {
//!         "off": { "transitions": { "power": "on" } },
//!         "on":  { "transitions": { "power": "off" } }
//!     }
//! }"#).unwrap();
//!
//! assert_eq!(config.initial, "off");
//! assert!(config.contains_state("on"));
//! ```

use crate::core::{EventId, StateId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod error;

pub use error::ConfigError;

/// Transitions available from one state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    /// Event to target state
    #[serde(default)]
    pub transitions: BTreeMap<EventId, StateId>,
}

impl StateDefinition {
    /// A state with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the transition taken on `event`.
    pub fn with_transition(
        mut self,
        event: impl Into<EventId>,
        target: impl Into<StateId>,
    ) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Target reached on `event`, if this state handles it.
    pub fn target(&self, event: &str) -> Option<&StateId> {
        self.transitions.get(event)
    }

    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }
}

/// Initial state plus the definition of every state.
///
/// States are kept ordered by identifier, which is the order
/// [`crate::Fsm::states`] enumerates them in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsmConfig {
    /// State the machine starts in and returns to on reset
    pub initial: StateId,
    /// State identifier to definition
    pub states: BTreeMap<StateId, StateDefinition>,
}

impl FsmConfig {
    /// An empty configuration starting at `initial`.
    pub fn new(initial: impl Into<StateId>) -> Self {
        Self {
            initial: initial.into(),
            states: BTreeMap::new(),
        }
    }

    /// Add (or replace) a state definition.
    pub fn insert_state(&mut self, id: impl Into<StateId>, definition: StateDefinition) {
        self.states.insert(id.into(), definition);
    }

    /// Parse a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))
    }

    /// Convert an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        serde_json::from_value(value)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))
    }

    pub fn state(&self, id: &str) -> Option<&StateDefinition> {
        self.states.get(id)
    }

    pub fn contains_state(&self, id: &str) -> bool {
        self.states.contains_key(id)
    }

    /// Every configured state identifier, in enumeration order.
    pub fn state_ids(&self) -> impl Iterator<Item = &StateId> {
        self.states.keys()
    }
}

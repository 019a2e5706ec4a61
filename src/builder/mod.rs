//! Builder API for ergonomic configuration construction.
//!
//! This module provides fluent builders and a macro for creating
//! configurations with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;
pub mod state;

pub use error::BuildError;
pub use machine::FsmConfigBuilder;
pub use state::StateBuilder;

use crate::config::FsmConfig;

/// Create a configuration where one event cycles through `states` in order,
/// wrapping from the last back to the first.
///
/// # Example
///
/// ```
/// use rewind_fsm::builder::cycle;
/// use rewind_fsm::Fsm;
///
/// let mut light = Fsm::new(cycle("tick", &["red", "green", "yellow"]).unwrap());
/// light.trigger("tick").unwrap();
/// light.trigger("tick").unwrap();
/// light.trigger("tick").unwrap();
/// assert_eq!(light.state(), "red");
/// ```
pub fn cycle(event: &str, states: &[&str]) -> Result<FsmConfig, BuildError> {
    let Some(first) = states.first() else {
        return Err(BuildError::NoStates);
    };

    let builder = states
        .iter()
        .zip(states.iter().cycle().skip(1))
        .try_fold(FsmConfigBuilder::new().initial(*first), |builder, (state, next)| {
            builder.state(StateBuilder::new(*state).on(event, *next))
        })?;

    builder.build()
}

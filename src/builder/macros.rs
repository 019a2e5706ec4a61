//! Macros for declarative configuration.

/// Build an [`FsmConfig`](crate::config::FsmConfig) from a literal
/// description.
///
/// State and event names are written as bare identifiers and become their
/// string form.
///
/// # Example
///
/// ```
/// use rewind_fsm::fsm_config;
///
/// let config = fsm_config! {
///     initial: off,
///     states: {
///         off: { power => on },
///         on: { power => off, overload => tripped },
///         tripped: {},
///     }
/// };
///
/// assert_eq!(config.initial, "off");
/// assert_eq!(config.states.len(), 3);
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:ident,
        states: {
            $(
                $state:ident : { $( $event:ident => $target:ident ),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {{
        let mut config = $crate::config::FsmConfig::new(stringify!($initial));
        $(
            config.insert_state(
                stringify!($state),
                $crate::config::StateDefinition::new()
                    $( .with_transition(stringify!($event), stringify!($target)) )*,
            );
        )*
        config
    }};
}

#[cfg(test)]
mod tests {
    use crate::core::StateId;

    #[test]
    fn fsm_config_macro_builds_states_and_transitions() {
        let config = fsm_config! {
            initial: idle,
            states: {
                idle: { start => running },
                running: { pause => paused, stop => idle },
                paused: { resume => running },
            }
        };

        assert_eq!(config.initial, "idle");
        assert_eq!(config.states.len(), 3);
        let running = config.state("running").unwrap();
        assert_eq!(running.target("pause"), Some(&StateId::from("paused")));
        assert_eq!(running.target("stop"), Some(&StateId::from("idle")));
    }

    #[test]
    fn fsm_config_supports_terminal_states() {
        let config = fsm_config! {
            initial: start,
            states: {
                start: { finish => done },
                done: {}
            }
        };

        assert!(config.state("done").unwrap().transitions.is_empty());
    }
}

//! Rewind: a minimal finite state machine with undo/redo
//!
//! A machine is described by plain data: an initial state and, for each
//! state, the events it reacts to and the state each event leads to. The
//! [`Fsm`] engine interprets that description, tracks the current state and
//! keeps a linear history that can be walked with `undo` and `redo`.
//!
//! # Core Concepts
//!
//! - **Configuration**: `FsmConfig`, shared read-only between engines
//! - **Engine**: `Fsm`, current state plus validate-then-commit operations
//! - **History**: visited states for undo, undone states for redo
//!
//! # Example
//!
//! ```rust
//! use rewind_fsm::{fsm_config, Fsm, FsmError};
//!
//! let mut fsm = Fsm::new(fsm_config! {
//!     initial: off,
//!     states: {
//!         off: { power => on },
//!         on: { power => off },
//!     }
//! });
//!
//! fsm.trigger("power").unwrap();
//! assert_eq!(fsm.state(), "on");
//!
//! assert!(matches!(fsm.trigger("explode"), Err(FsmError::InvalidEvent { .. })));
//!
//! assert!(fsm.undo());
//! assert_eq!(fsm.state(), "off");
//! assert!(fsm.redo());
//! assert_eq!(fsm.state(), "on");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use config::{ConfigError, FsmConfig, StateDefinition};
pub use self::core::{EventId, StateHistory, StateId};
pub use engine::{Fsm, FsmError};

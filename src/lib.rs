//! Waypoint: a declarative finite state machine with linear undo/redo
//!
//! A machine is driven by a plain-data [`Configuration`]: an initial state
//! and, per state, a table mapping event names to destination states.
//! The machine tracks the current state and the path it took, and can step
//! back and forward along that path.
//!
//! # Core Concepts
//!
//! - **Configuration**: Immutable, serde-loadable state/event tables that
//!   keep their declaration order
//! - **Machine**: Current state plus history; `trigger` follows events,
//!   `change_state` jumps directly
//! - **History**: Two stacks (visited path and redoable states) behind
//!   `undo`/`redo`
//!
//! # Example
//!
//! ```rust
//! use waypoint::{FiniteStateMachine, FsmError};
//!
//! let mut fsm = FiniteStateMachine::from_json(r#"{
//!     "initial": "green",
//!     "states": {
//!         "green": { "transitions": { "timer": "yellow" } },
//!         "yellow": { "transitions": { "timer": "red" } },
//!         "red": { "transitions": { "timer": "green" } }
//!     }
//! }"#)?;
//!
//! fsm.trigger("timer")?;
//! fsm.trigger("timer")?;
//! assert_eq!(fsm.state(), "red");
//!
//! assert!(fsm.undo());
//! assert_eq!(fsm.state(), "yellow");
//!
//! assert!(matches!(
//!     fsm.trigger("emergency"),
//!     Err(FsmError::InvalidTransition { .. })
//! ));
//! # Ok::<(), FsmError>(())
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, ConfigBuilder};
pub use crate::core::{Configuration, StateDefinition, StateTable, TransitionHistory};
pub use machine::{FiniteStateMachine, FsmError};

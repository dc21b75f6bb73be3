//! State machine error types.

use thiserror::Error;

/// Errors returned by [`FiniteStateMachine`](super::FiniteStateMachine) operations.
///
/// Every failing operation leaves the machine exactly as it was.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    /// Configuration missing, unparseable, or declaring no states
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Target of a direct state change is not a configured state
    #[error("State '{state}' is not defined in the configuration")]
    InvalidState { state: String },

    /// Current state has no transition for the event
    #[error("No transition for event '{event}' from state '{state}'")]
    InvalidTransition { state: String, event: String },
}

//! Runtime finite state machine.
//!
//! A [`FiniteStateMachine`] pairs a shared, read-only [`Configuration`]
//! with the mutable parts: the current state and its [`TransitionHistory`].
//! All operations are synchronous in-memory updates; callers sharing one
//! machine across threads must wrap it in their own lock.

use crate::core::{Configuration, TransitionHistory};
use std::sync::Arc;
use tracing::{debug, trace};

pub mod error;

pub use error::FsmError;

/// Finite state machine with linear undo/redo.
///
/// # Example
///
/// ```rust
/// use waypoint::{fsm_config, FiniteStateMachine};
///
/// let config = fsm_config! {
///     initial: green,
///     states: {
///         green: { timer => yellow },
///         yellow: { timer => red },
///         red: { timer => green },
///     }
/// }
/// .unwrap();
///
/// let mut fsm = FiniteStateMachine::new(config).unwrap();
/// fsm.trigger("timer").unwrap();
/// assert_eq!(fsm.state(), "yellow");
///
/// assert!(fsm.undo());
/// assert_eq!(fsm.state(), "green");
/// assert!(fsm.redo());
/// assert_eq!(fsm.state(), "yellow");
/// ```
#[derive(Clone, Debug)]
pub struct FiniteStateMachine {
    config: Arc<Configuration>,
    state: String,
    history: TransitionHistory,
}

impl FiniteStateMachine {
    /// Create a machine in the configuration's initial state.
    ///
    /// The history starts as `[initial]` and nothing is redoable. Accepts
    /// an owned configuration or an `Arc` shared with other machines.
    ///
    /// A configuration without states is accepted: every `change_state`
    /// and `trigger` then fails and [`states`](Self::states) is empty.
    pub fn new(config: impl Into<Arc<Configuration>>) -> Result<Self, FsmError> {
        let config = config.into();
        let state = config.initial.clone();
        let mut history = TransitionHistory::new();
        history.record(state.clone());

        debug!(initial = %state, states = config.states.len(), "state machine created");

        Ok(Self {
            config,
            state,
            history,
        })
    }

    /// Create a machine from the JSON form of a configuration.
    ///
    /// `null`, non-object documents and parse failures are reported as
    /// [`FsmError::InvalidConfig`]. An empty `states` object is accepted.
    pub fn from_json(json: &str) -> Result<Self, FsmError> {
        let config = Configuration::from_json(json)
            .map_err(|e| FsmError::InvalidConfig(e.to_string()))?;
        Self::new(config)
    }

    /// Current state.
    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Jump directly to `state`, ignoring the transition table.
    ///
    /// Moving to the current state records nothing. Unlike [`trigger`],
    /// a direct jump keeps the redo stack.
    ///
    /// [`trigger`]: Self::trigger
    pub fn change_state(&mut self, state: &str) -> Result<(), FsmError> {
        if !self.config.contains_state(state) {
            return Err(FsmError::InvalidState {
                state: state.to_string(),
            });
        }

        if self.state == state {
            trace!(state, "change_state to current state ignored");
            return Ok(());
        }

        debug!(from = %self.state, to = state, "state changed");
        self.state = state.to_string();
        self.history.record(state);
        Ok(())
    }

    /// Follow the current state's transition for `event`.
    ///
    /// A transition into a different state is recorded and discards
    /// everything redoable. A self-loop is a no-op.
    pub fn trigger(&mut self, event: &str) -> Result<(), FsmError> {
        let Some(target) = self.config.transition(&self.state, event) else {
            return Err(FsmError::InvalidTransition {
                state: self.state.clone(),
                event: event.to_string(),
            });
        };

        if target == self.state {
            trace!(state = %self.state, event, "self transition ignored");
            return Ok(());
        }

        debug!(from = %self.state, to = target, event, "transition triggered");
        self.state = target.to_string();
        self.history.record(target);
        self.history.invalidate_redo();
        Ok(())
    }

    /// Return to the initial state.
    ///
    /// Always records a history entry, even when already in the initial
    /// state. The redo stack is kept.
    pub fn reset(&mut self) {
        debug!(from = %self.state, to = %self.config.initial, "state machine reset");
        self.state = self.config.initial.clone();
        self.history.record(self.state.clone());
    }

    /// Configured states in declaration order, optionally only those that
    /// handle `event`.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        self.config.state_ids(event)
    }

    /// Step back to the previous state in the history.
    ///
    /// Returns `false` without changing anything when there is no earlier
    /// state to return to.
    pub fn undo(&mut self) -> bool {
        match self.history.step_back() {
            Some(previous) => {
                debug!(from = %self.state, to = %previous, "undo");
                self.state = previous;
                true
            }
            None => {
                trace!(state = %self.state, "nothing to undo");
                false
            }
        }
    }

    /// Replay the most recently undone state.
    ///
    /// Returns `false` without changing anything when nothing is redoable.
    pub fn redo(&mut self) -> bool {
        match self.history.step_forward() {
            Some(next) => {
                debug!(from = %self.state, to = %next, "redo");
                self.state = next;
                true
            }
            None => {
                trace!(state = %self.state, "nothing to redo");
                false
            }
        }
    }

    /// Empty the history path.
    ///
    /// The current state and the redo stack are untouched, so afterwards
    /// [`history`](Self::history) no longer ends with [`state`](Self::state)
    /// until the next recorded move.
    pub fn clear_history(&mut self) {
        debug!(
            state = %self.state,
            entries = self.history.path().len(),
            "history cleared"
        );
        self.history.clear();
    }

    /// Visited states, oldest first.
    pub fn history(&self) -> &[String] {
        self.history.path()
    }

    /// Undone states; the last entry is replayed first.
    pub fn redo_stack(&self) -> &[String] {
        self.history.redo_stack()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_step_back()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_step_forward()
    }
}

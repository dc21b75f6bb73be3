//! Transition history with linear undo/redo.
//!
//! History is a pair of stacks: the path of states visited (most recent
//! last) and the states that were stepped back over and can be replayed.

use serde::Serialize;

/// Path of visited states plus the redo stack.
///
/// Serializes for inspection; histories are only built through `record`.
///
/// # Example
///
/// ```rust
/// use waypoint::core::TransitionHistory;
///
/// let mut history = TransitionHistory::new();
/// history.record("green");
/// history.record("yellow");
///
/// assert_eq!(history.step_back(), Some("green".to_string()));
/// assert_eq!(history.redo_stack(), ["yellow"]);
/// assert_eq!(history.step_forward(), Some("yellow".to_string()));
/// assert_eq!(history.path(), ["green", "yellow"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TransitionHistory {
    path: Vec<String>,
    redo: Vec<String>,
}

impl TransitionHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a state to the path. The redo stack is left alone.
    pub fn record(&mut self, state: impl Into<String>) {
        self.path.push(state.into());
    }

    /// Drop every redoable state.
    pub fn invalidate_redo(&mut self) {
        self.redo.clear();
    }

    /// Move the newest path entry onto the redo stack.
    ///
    /// Returns the state that is now newest on the path, or `None` without
    /// changing anything when the path holds fewer than two entries.
    pub fn step_back(&mut self) -> Option<String> {
        if !self.can_step_back() {
            return None;
        }
        let popped = self.path.pop()?;
        self.redo.push(popped);
        self.path.last().cloned()
    }

    /// Replay the most recently undone state onto the path.
    ///
    /// Returns the replayed state, or `None` when nothing is redoable.
    pub fn step_forward(&mut self) -> Option<String> {
        let state = self.redo.pop()?;
        self.path.push(state.clone());
        Some(state)
    }

    /// Truncate the path. The redo stack is left alone.
    pub fn clear(&mut self) {
        self.path.clear();
    }

    pub fn can_step_back(&self) -> bool {
        self.path.len() > 1
    }

    pub fn can_step_forward(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Visited states, oldest first.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Redoable states; the last entry is replayed first.
    pub fn redo_stack(&self) -> &[String] {
        &self.redo
    }

    /// Newest entry on the path.
    pub fn latest(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }
}

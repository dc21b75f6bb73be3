//! Core state machine data types.
//!
//! This module contains the plain-data half of the machine:
//! - Declarative configuration with declaration-ordered state tables
//! - Transition history with linear undo/redo
//!
//! Nothing here knows about the current state; `machine` combines the two.

mod config;
mod history;

pub use config::{Configuration, StateDefinition, StateTable};
pub use history::TransitionHistory;

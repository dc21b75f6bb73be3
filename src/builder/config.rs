//! Builder for constructing machine configurations.

use crate::builder::error::BuildError;
use crate::core::{Configuration, StateDefinition, StateTable};

/// Builder for constructing configurations with a fluent API.
///
/// States are declared in the order they are first mentioned, either by
/// [`state`](Self::state) or as the source of a [`transition`](Self::transition).
/// Transition targets are not declared implicitly.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<String>,
    states: StateTable<StateDefinition>,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state. Declaring an existing state keeps its transitions.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.states.get_or_insert_default(state);
        self
    }

    /// Add a transition, declaring `from` if needed.
    /// A later transition for the same state and event replaces the earlier one.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.states
            .get_or_insert_default(from)
            .transitions
            .insert(event, to.into());
        self
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Configuration, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        Ok(Configuration::new(initial, self.states))
    }
}

//! Declarative machine configuration.
//!
//! A configuration names the initial state and, for every state, the
//! events it reacts to and the state each event leads to. Configurations
//! are plain data: they are loaded once, never mutated by a machine, and
//! can back any number of machines at the same time.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Insertion-ordered map keyed by state or event identifier.
///
/// Iteration follows the order keys were first inserted, which for
/// deserialized tables is the key order of the source document.
/// Re-inserting an existing key replaces its value in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateTable<V> {
    entries: IndexMap<String, V>,
}

impl<V> Default for StateTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> StateTable<V> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Insert a value, returning the previous value for the key if any.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        self.entries.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    /// Get a mutable reference to the value for `key`, inserting the
    /// default value at the end of the table when the key is new.
    pub fn get_or_insert_default(&mut self, key: impl Into<String>) -> &mut V
    where
        V: Default,
    {
        self.entries.entry(key.into()).or_default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in table order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for StateTable<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Definition of a single state: the events it handles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    /// Event identifier -> destination state identifier
    #[serde(default)]
    pub transitions: StateTable<String>,
}

/// Machine configuration.
///
/// The JSON form mirrors the struct:
///
/// ```rust
/// use waypoint::core::Configuration;
///
/// let config = Configuration::from_json(r#"{
///     "initial": "idle",
///     "states": {
///         "idle": { "transitions": { "start": "busy" } },
///         "busy": { "transitions": { "finish": "idle" } }
///     }
/// }"#).unwrap();
///
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.transition("idle", "start"), Some("busy"));
/// assert_eq!(config.state_ids(None), vec!["idle", "busy"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// State the machine starts in and returns to on reset
    pub initial: String,
    /// State identifier -> definition, in declaration order
    #[serde(default)]
    pub states: StateTable<StateDefinition>,
}

impl Configuration {
    pub fn new(initial: impl Into<String>, states: StateTable<StateDefinition>) -> Self {
        Self {
            initial: initial.into(),
            states,
        }
    }

    /// Parse a configuration from its JSON form.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// True when no states are declared.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn contains_state(&self, state: &str) -> bool {
        self.states.contains_key(state)
    }

    /// Destination of `event` from `state`, if the state declares one.
    pub fn transition(&self, state: &str, event: &str) -> Option<&str> {
        self.states
            .get(state)?
            .transitions
            .get(event)
            .map(String::as_str)
    }

    /// State identifiers in declaration order.
    ///
    /// With an event, only the states whose transition table handles that
    /// event are returned.
    pub fn state_ids(&self, event: Option<&str>) -> Vec<&str> {
        self.states
            .iter()
            .filter(|(_, definition)| {
                event.is_none_or(|event| definition.transitions.contains_key(event))
            })
            .map(|(id, _)| id)
            .collect()
    }
}

//! Automaton states.
//!
//! A state is a plain node: an id that is unique within its automaton, a
//! display name, and an optional label (Moore machines keep their output here).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a state, unique within one automaton.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(pub u32);

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for StateId {
    fn from(id: u32) -> Self {
        StateId(id)
    }
}

/// A node of an automaton graph.
///
/// States carry no behavior; they are owned by exactly one
/// [`Automaton`](super::Automaton) and referenced elsewhere by [`StateId`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    id: StateId,
    name: String,
    label: Option<String>,
}

impl State {
    /// Create a state with the conventional `q<id>` name.
    pub fn new(id: StateId) -> Self {
        Self {
            id,
            name: id.to_string(),
            label: None,
        }
    }

    /// Create a state with an explicit display name.
    pub fn named(id: StateId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            label: None,
        }
    }

    /// Attach a label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn id(&self) -> StateId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }
}

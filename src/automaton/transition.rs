//! Labeled transitions between automaton states.

use super::state::StateId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The variant of transition an automaton is built from.
///
/// Every automaton declares exactly one kind and only accepts transitions
/// whose label is of that kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionKind {
    /// Finite automaton: reads a (possibly empty) input string
    Finite,
    /// Mealy machine: reads input and emits output on the transition
    Mealy,
    /// Moore machine: reads input, output lives on the destination state
    Moore,
    /// Grammar variable dependency edge, carries no label
    Dependency,
}

impl TransitionKind {
    /// All kinds, in registration order.
    pub const ALL: [TransitionKind; 4] = [
        TransitionKind::Finite,
        TransitionKind::Mealy,
        TransitionKind::Moore,
        TransitionKind::Dependency,
    ];

    /// Document tag naming automata of this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Finite => "fa",
            Self::Mealy => "mealy",
            Self::Moore => "moore",
            Self::Dependency => "vdg",
        }
    }

    /// Inverse of [`tag`](Self::tag).
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Kind-specific payload of a transition.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionLabel {
    Finite { read: String },
    Mealy { read: String, output: String },
    Moore { read: String },
    Dependency,
}

impl TransitionLabel {
    pub fn kind(&self) -> TransitionKind {
        match self {
            Self::Finite { .. } => TransitionKind::Finite,
            Self::Mealy { .. } => TransitionKind::Mealy,
            Self::Moore { .. } => TransitionKind::Moore,
            Self::Dependency => TransitionKind::Dependency,
        }
    }

    /// Input consumed by the transition, if the kind reads input.
    pub fn read(&self) -> Option<&str> {
        match self {
            Self::Finite { read } | Self::Mealy { read, .. } | Self::Moore { read } => Some(read),
            Self::Dependency => None,
        }
    }

    /// Output emitted by the transition (Mealy only).
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Mealy { output, .. } => Some(output),
            _ => None,
        }
    }
}

/// A directed, labeled edge between two states of one automaton.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    from: StateId,
    to: StateId,
    label: TransitionLabel,
}

impl Transition {
    pub fn new(from: StateId, to: StateId, label: TransitionLabel) -> Self {
        Self { from, to, label }
    }

    /// Finite automaton transition reading `read`.
    pub fn finite(from: StateId, to: StateId, read: impl Into<String>) -> Self {
        Self::new(from, to, TransitionLabel::Finite { read: read.into() })
    }

    /// Mealy transition reading `read` and emitting `output`.
    pub fn mealy(
        from: StateId,
        to: StateId,
        read: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self::new(
            from,
            to,
            TransitionLabel::Mealy {
                read: read.into(),
                output: output.into(),
            },
        )
    }

    /// Moore transition reading `read`.
    pub fn moore(from: StateId, to: StateId, read: impl Into<String>) -> Self {
        Self::new(from, to, TransitionLabel::Moore { read: read.into() })
    }

    /// Variable dependency edge.
    pub fn dependency(from: StateId, to: StateId) -> Self {
        Self::new(from, to, TransitionLabel::Dependency)
    }

    pub fn from(&self) -> StateId {
        self.from
    }

    pub fn to(&self) -> StateId {
        self.to
    }

    pub fn label(&self) -> &TransitionLabel {
        &self.label
    }

    pub fn kind(&self) -> TransitionKind {
        self.label.kind()
    }

    /// Whether either endpoint is `state`.
    pub fn touches(&self, state: StateId) -> bool {
        self.from == state || self.to == state
    }
}

//! The closed set of structures the codec knows how to persist.

use crate::automaton::{Automaton, TransitionKind, VariableDependencyGraph};
use crate::grammar::Grammar;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key the transducer registry dispatches encoding on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureKind {
    Automaton(TransitionKind),
    Grammar,
    Chooser,
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Automaton(kind) => write!(f, "{kind} automaton"),
            Self::Grammar => f.write_str("grammar"),
            Self::Chooser => f.write_str("chooser"),
        }
    }
}

/// Anything that can be encoded to or decoded from a document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Structure {
    Automaton(Automaton),
    DependencyGraph(VariableDependencyGraph),
    Grammar(Grammar),
    Chooser(Chooser),
}

impl Structure {
    pub fn kind(&self) -> StructureKind {
        match self {
            Self::Automaton(automaton) => StructureKind::Automaton(automaton.kind()),
            Self::DependencyGraph(_) => StructureKind::Automaton(TransitionKind::Dependency),
            Self::Grammar(_) => StructureKind::Grammar,
            Self::Chooser(_) => StructureKind::Chooser,
        }
    }

    /// The structure that is actually persisted.
    ///
    /// Choosers resolve to their current selection, nested choosers all the
    /// way down. `None` when a chooser has nothing selected.
    pub fn resolve(&self) -> Option<&Structure> {
        let mut current = self;
        while let Self::Chooser(chooser) = current {
            current = chooser.current()?;
        }
        Some(current)
    }

    /// Whether this is a dependency-kind automaton outside a
    /// [`VariableDependencyGraph`]. Such values have no document form.
    pub(crate) fn is_bare_dependency_automaton(&self) -> bool {
        matches!(self, Self::Automaton(a) if a.kind() == TransitionKind::Dependency)
    }

    /// The automaton view, for both plain automata and dependency graphs.
    pub fn as_automaton(&self) -> Option<&Automaton> {
        match self {
            Self::Automaton(automaton) => Some(automaton),
            Self::DependencyGraph(vdg) => Some(vdg.as_automaton()),
            _ => None,
        }
    }

    pub fn as_grammar(&self) -> Option<&Grammar> {
        match self {
            Self::Grammar(grammar) => Some(grammar),
            _ => None,
        }
    }
}

/// Dependency-kind automata become [`Structure::DependencyGraph`].
impl From<Automaton> for Structure {
    fn from(automaton: Automaton) -> Self {
        if automaton.kind() == TransitionKind::Dependency {
            Self::DependencyGraph(VariableDependencyGraph::from_dependency_automaton(automaton))
        } else {
            Self::Automaton(automaton)
        }
    }
}

impl From<VariableDependencyGraph> for Structure {
    fn from(vdg: VariableDependencyGraph) -> Self {
        Self::DependencyGraph(vdg)
    }
}

impl From<Grammar> for Structure {
    fn from(grammar: Grammar) -> Self {
        Self::Grammar(grammar)
    }
}

impl From<Chooser> for Structure {
    fn from(chooser: Chooser) -> Self {
        Self::Chooser(chooser)
    }
}

/// A set of alternative structures with one of them selected.
///
/// Only the selection is persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chooser {
    options: Vec<Structure>,
    selected: usize,
}

impl Chooser {
    /// Chooser over `options` with the first one selected.
    pub fn new(options: Vec<Structure>) -> Self {
        Self {
            options,
            selected: 0,
        }
    }

    pub fn options(&self) -> &[Structure] {
        &self.options
    }

    /// Select option `index`. Returns `false` and keeps the current
    /// selection if `index` is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.options.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn current(&self) -> Option<&Structure> {
        self.options.get(self.selected)
    }
}

//! Variable dependency graphs.
//!
//! A dependency graph is an automaton restricted to
//! [`TransitionKind::Dependency`] edges. States stand for grammar variables
//! and an edge `A -> B` records that some production for `A` mentions `B`.

use super::error::AutomatonError;
use super::machine::Automaton;
use super::state::{State, StateId};
use super::transition::{Transition, TransitionKind};
use crate::grammar::{Grammar, SymbolClassifier};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Automaton whose transitions are all variable dependency edges.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Automaton", into = "Automaton")]
pub struct VariableDependencyGraph {
    graph: Automaton,
}

impl VariableDependencyGraph {
    pub fn new() -> Self {
        Self {
            graph: Automaton::new(TransitionKind::Dependency),
        }
    }

    /// Build the dependency graph of `grammar`.
    ///
    /// One state per variable in first-seen order, named after the variable.
    /// Only productions whose left side is a single variable contribute edges.
    pub fn from_grammar<C: SymbolClassifier + ?Sized>(
        grammar: &Grammar,
        classifier: &C,
    ) -> Result<Self, AutomatonError> {
        let mut vdg = Self::new();
        for variable in grammar.variables(classifier) {
            vdg.add_variable(variable)?;
        }

        for production in grammar.productions() {
            let mut lhs = production.lhs().chars();
            let (Some(from), None) = (lhs.next(), lhs.next()) else {
                continue;
            };
            let Some(from_id) = vdg.variable_state(from) else {
                continue;
            };
            for to in production.variables_on_rhs(classifier) {
                let Some(to_id) = vdg.variable_state(to) else {
                    continue;
                };
                if vdg.transitions_between(from_id, to_id).next().is_none() {
                    vdg.add_dependency(from_id, to_id)?;
                }
            }
        }
        Ok(vdg)
    }

    /// Add a state named after `variable`, or return the existing one.
    pub fn add_variable(&mut self, variable: char) -> Result<StateId, AutomatonError> {
        if let Some(id) = self.variable_state(variable) {
            return Ok(id);
        }
        let id = self.graph.add_state()?;
        if let Some(state) = self.graph.state_mut(id) {
            state.set_name(variable.to_string());
        }
        Ok(id)
    }

    /// State standing for `variable`, if present.
    pub fn variable_state(&self, variable: char) -> Option<StateId> {
        let mut buf = [0u8; 4];
        let name: &str = variable.encode_utf8(&mut buf);
        self.graph
            .states()
            .iter()
            .find(|s| s.name() == name)
            .map(State::id)
    }

    pub fn add_state(&mut self) -> Result<StateId, AutomatonError> {
        self.graph.add_state()
    }

    pub fn insert_state(&mut self, state: State) -> Result<StateId, AutomatonError> {
        self.graph.insert_state(state)
    }

    pub fn remove_state(&mut self, id: StateId) -> Option<State> {
        self.graph.remove_state(id)
    }

    /// Add a dependency edge `from -> to`.
    pub fn add_dependency(&mut self, from: StateId, to: StateId) -> Result<(), AutomatonError> {
        self.graph.add_transition(Transition::dependency(from, to))
    }

    /// Add a transition; anything but a dependency edge is rejected.
    pub fn add_transition(&mut self, transition: Transition) -> Result<(), AutomatonError> {
        self.graph.add_transition(transition)
    }

    /// Borrow as a plain automaton.
    pub fn as_automaton(&self) -> &Automaton {
        &self.graph
    }

    pub fn into_automaton(self) -> Automaton {
        self.graph
    }
}

impl Default for VariableDependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for VariableDependencyGraph {
    type Target = Automaton;

    fn deref(&self) -> &Automaton {
        &self.graph
    }
}

impl VariableDependencyGraph {
    /// Wrap an automaton the caller has checked is of dependency kind.
    pub(crate) fn from_dependency_automaton(graph: Automaton) -> Self {
        debug_assert_eq!(graph.kind(), TransitionKind::Dependency);
        Self { graph }
    }
}

impl TryFrom<Automaton> for VariableDependencyGraph {
    type Error = AutomatonError;

    fn try_from(graph: Automaton) -> Result<Self, Self::Error> {
        if graph.kind() != TransitionKind::Dependency {
            return Err(AutomatonError::KindMismatch {
                expected: TransitionKind::Dependency,
                found: graph.kind(),
            });
        }
        Ok(Self::from_dependency_automaton(graph))
    }
}

impl From<VariableDependencyGraph> for Automaton {
    fn from(vdg: VariableDependencyGraph) -> Self {
        vdg.graph
    }
}

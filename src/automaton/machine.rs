//! The automaton graph: states, transitions and the query API.

use super::error::AutomatonError;
use super::state::{State, StateId};
use super::transition::{Transition, TransitionKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A directed multigraph of states and transitions of one declared kind.
///
/// States keep their insertion order. Transitions may repeat between the
/// same ordered pair of states. Every transition's endpoints, the initial
/// state and every final state are always members of the automaton.
///
/// # Example
///
/// ```rust
/// use jflap_core::automaton::{Automaton, Transition, TransitionKind};
///
/// let mut fa = Automaton::new(TransitionKind::Finite);
/// let q0 = fa.add_state().unwrap();
/// let q1 = fa.add_state().unwrap();
/// fa.add_transition(Transition::finite(q0, q1, "a")).unwrap();
/// fa.set_initial_state(Some(q0)).unwrap();
/// fa.add_final_state(q1).unwrap();
///
/// assert_eq!(fa.transitions_between(q0, q1).count(), 1);
/// assert_eq!(fa.transitions_between(q1, q0).count(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Automaton {
    kind: TransitionKind,
    states: Vec<State>,
    transitions: Vec<Transition>,
    initial: Option<StateId>,
    finals: BTreeSet<StateId>,
}

impl Automaton {
    /// Create an empty automaton accepting transitions of `kind`.
    pub fn new(kind: TransitionKind) -> Self {
        Self {
            kind,
            states: Vec::new(),
            transitions: Vec::new(),
            initial: None,
            finals: BTreeSet::new(),
        }
    }

    /// Transition kind this automaton is restricted to.
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    /// Add a state with a fresh id and the default name.
    ///
    /// The id is one past the largest in use, or the smallest unused id
    /// once the largest is `u32::MAX`.
    pub fn add_state(&mut self) -> Result<StateId, AutomatonError> {
        let id = self.next_state_id()?;
        self.states.push(State::new(id));
        Ok(id)
    }

    /// Add a prepared state. Fails if its id is already taken.
    pub fn insert_state(&mut self, state: State) -> Result<StateId, AutomatonError> {
        let id = state.id();
        if self.contains_state(id) {
            return Err(AutomatonError::DuplicateState(id));
        }
        self.states.push(state);
        Ok(id)
    }

    /// Remove a state together with every transition touching it.
    ///
    /// Also drops the state from the initial/final markers. Returns the
    /// removed state, or `None` if it was not present.
    pub fn remove_state(&mut self, id: StateId) -> Option<State> {
        let index = self.states.iter().position(|s| s.id() == id)?;
        let removed = self.states.remove(index);
        self.transitions.retain(|t| !t.touches(id));
        if self.initial == Some(id) {
            self.initial = None;
        }
        self.finals.remove(&id);
        Some(removed)
    }

    /// Add a transition. Both endpoints must be members and the label must
    /// match the automaton's kind.
    pub fn add_transition(&mut self, transition: Transition) -> Result<(), AutomatonError> {
        if transition.kind() != self.kind {
            return Err(AutomatonError::KindMismatch {
                expected: self.kind,
                found: transition.kind(),
            });
        }
        self.require_state(transition.from())?;
        self.require_state(transition.to())?;
        self.transitions.push(transition);
        Ok(())
    }

    /// Remove the first transition equal to `transition`.
    pub fn remove_transition(&mut self, transition: &Transition) -> bool {
        match self.transitions.iter().position(|t| t == transition) {
            Some(index) => {
                self.transitions.remove(index);
                true
            }
            None => false,
        }
    }

    /// All transitions whose source is `from` and destination is `to`.
    ///
    /// Linear in the number of transitions.
    pub fn transitions_between(
        &self,
        from: StateId,
        to: StateId,
    ) -> impl Iterator<Item = &Transition> + '_ {
        self.transitions
            .iter()
            .filter(move |t| t.from() == from && t.to() == to)
    }

    /// All transitions leaving `from`.
    pub fn transitions_from(&self, from: StateId) -> impl Iterator<Item = &Transition> + '_ {
        self.transitions.iter().filter(move |t| t.from() == from)
    }

    /// All transitions entering `to`.
    pub fn transitions_to(&self, to: StateId) -> impl Iterator<Item = &Transition> + '_ {
        self.transitions.iter().filter(move |t| t.to() == to)
    }

    /// States in insertion order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Ids of all states in insertion order.
    pub fn state_ids(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states.iter().map(State::id)
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.iter().find(|s| s.id() == id)
    }

    pub fn state_mut(&mut self, id: StateId) -> Option<&mut State> {
        self.states.iter_mut().find(|s| s.id() == id)
    }

    pub fn contains_state(&self, id: StateId) -> bool {
        self.state(id).is_some()
    }

    pub fn initial_state(&self) -> Option<StateId> {
        self.initial
    }

    /// Set or clear the initial state.
    pub fn set_initial_state(&mut self, state: Option<StateId>) -> Result<(), AutomatonError> {
        if let Some(id) = state {
            self.require_state(id)?;
        }
        self.initial = state;
        Ok(())
    }

    pub fn add_final_state(&mut self, state: StateId) -> Result<(), AutomatonError> {
        self.require_state(state)?;
        self.finals.insert(state);
        Ok(())
    }

    pub fn remove_final_state(&mut self, state: StateId) -> bool {
        self.finals.remove(&state)
    }

    pub fn is_final(&self, state: StateId) -> bool {
        self.finals.contains(&state)
    }

    pub fn final_states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.finals.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    fn require_state(&self, id: StateId) -> Result<(), AutomatonError> {
        if self.contains_state(id) {
            Ok(())
        } else {
            Err(AutomatonError::InvalidReference { state: id })
        }
    }

    fn next_state_id(&self) -> Result<StateId, AutomatonError> {
        let Some(max) = self.state_ids().map(|id| id.0).max() else {
            return Ok(StateId(0));
        };
        if let Some(next) = max.checked_add(1) {
            return Ok(StateId(next));
        }
        let taken: BTreeSet<u32> = self.state_ids().map(|id| id.0).collect();
        taken
            .iter()
            .zip(0..=u32::MAX)
            .find(|(used, candidate)| **used != *candidate)
            .map(|(_, free)| StateId(free))
            .ok_or(AutomatonError::StateIdsExhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_state_fa() -> (Automaton, StateId, StateId) {
        let mut fa = Automaton::new(TransitionKind::Finite);
        let q0 = fa.add_state().unwrap();
        let q1 = fa.add_state().unwrap();
        (fa, q0, q1)
    }

    #[test]
    fn add_state_assigns_fresh_ids() {
        let (mut fa, q0, q1) = two_state_fa();
        assert_eq!(q0, StateId(0));
        assert_eq!(q1, StateId(1));

        fa.insert_state(State::new(StateId(10))).unwrap();
        assert_eq!(fa.add_state(), Ok(StateId(11)));
    }

    #[test]
    fn add_state_reuses_gap_after_max_id() {
        let mut fa = Automaton::new(TransitionKind::Finite);
        fa.insert_state(State::new(StateId(u32::MAX))).unwrap();
        assert_eq!(fa.add_state(), Ok(StateId(0)));
        assert_eq!(fa.add_state(), Ok(StateId(1)));

        fa.remove_state(StateId(0));
        assert_eq!(fa.add_state(), Ok(StateId(0)));
        assert_eq!(fa.states().len(), 3);
    }

    #[test]
    fn insert_state_rejects_duplicate_id() {
        let (mut fa, q0, _) = two_state_fa();
        let result = fa.insert_state(State::named(q0, "again"));
        assert_eq!(result, Err(AutomatonError::DuplicateState(q0)));
    }

    #[test]
    fn states_keep_insertion_order() {
        let mut fa = Automaton::new(TransitionKind::Finite);
        fa.insert_state(State::new(StateId(5))).unwrap();
        fa.insert_state(State::new(StateId(2))).unwrap();
        fa.insert_state(State::new(StateId(9))).unwrap();

        let ids: Vec<_> = fa.state_ids().collect();
        assert_eq!(ids, vec![StateId(5), StateId(2), StateId(9)]);
    }

    #[test]
    fn add_transition_rejects_unknown_endpoint() {
        let (mut fa, q0, _) = two_state_fa();
        let result = fa.add_transition(Transition::finite(q0, StateId(42), "a"));
        assert_eq!(
            result,
            Err(AutomatonError::InvalidReference { state: StateId(42) })
        );
        assert!(fa.transitions().is_empty());
    }

    #[test]
    fn add_transition_rejects_other_kind() {
        let (mut fa, q0, q1) = two_state_fa();
        let result = fa.add_transition(Transition::mealy(q0, q1, "a", "b"));
        assert_eq!(
            result,
            Err(AutomatonError::KindMismatch {
                expected: TransitionKind::Finite,
                found: TransitionKind::Mealy,
            })
        );
    }

    #[test]
    fn parallel_transitions_are_kept() {
        let (mut fa, q0, q1) = two_state_fa();
        fa.add_transition(Transition::finite(q0, q1, "a")).unwrap();
        fa.add_transition(Transition::finite(q0, q1, "b")).unwrap();
        fa.add_transition(Transition::finite(q1, q0, "c")).unwrap();

        let reads: Vec<_> = fa
            .transitions_between(q0, q1)
            .filter_map(|t| t.label().read())
            .collect();
        assert_eq!(reads, vec!["a", "b"]);
        assert_eq!(fa.transitions_from(q1).count(), 1);
        assert_eq!(fa.transitions_to(q1).count(), 2);
    }

    #[test]
    fn remove_state_cascades() {
        let (mut fa, q0, q1) = two_state_fa();
        let q2 = fa.add_state().unwrap();
        fa.add_transition(Transition::finite(q0, q1, "a")).unwrap();
        fa.add_transition(Transition::finite(q1, q2, "b")).unwrap();
        fa.add_transition(Transition::finite(q2, q2, "c")).unwrap();
        fa.set_initial_state(Some(q1)).unwrap();
        fa.add_final_state(q1).unwrap();

        let removed = fa.remove_state(q1).unwrap();
        assert_eq!(removed.id(), q1);
        assert_eq!(fa.transitions().len(), 1);
        assert_eq!(fa.initial_state(), None);
        assert!(!fa.is_final(q1));
        assert!(fa.remove_state(q1).is_none());
    }

    #[test]
    fn markers_require_membership() {
        let (mut fa, q0, _) = two_state_fa();
        assert!(fa.set_initial_state(Some(StateId(7))).is_err());
        assert!(fa.add_final_state(StateId(7)).is_err());

        fa.set_initial_state(Some(q0)).unwrap();
        fa.add_final_state(q0).unwrap();
        assert_eq!(fa.initial_state(), Some(q0));
        assert_eq!(fa.final_states().collect::<Vec<_>>(), vec![q0]);
        assert!(fa.remove_final_state(q0));
    }

    #[test]
    fn remove_transition_removes_one_copy() {
        let (mut fa, q0, q1) = two_state_fa();
        let t = Transition::finite(q0, q1, "a");
        fa.add_transition(t.clone()).unwrap();
        fa.add_transition(t.clone()).unwrap();

        assert!(fa.remove_transition(&t));
        assert_eq!(fa.transitions().len(), 1);
        assert!(fa.remove_transition(&t));
        assert!(!fa.remove_transition(&t));
    }

    #[test]
    fn automaton_serializes_with_serde() {
        let (mut fa, q0, q1) = two_state_fa();
        fa.add_transition(Transition::finite(q0, q1, "a")).unwrap();
        let json = serde_json::to_string(&fa).unwrap();
        let back: Automaton = serde_json::from_str(&json).unwrap();
        assert_eq!(fa, back);
    }
}

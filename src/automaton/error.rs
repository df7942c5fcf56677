//! Errors raised while mutating an automaton.

use super::state::StateId;
use super::transition::TransitionKind;
use thiserror::Error;

/// Errors that can occur when editing an automaton's structure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// A transition or marker referenced a state the automaton does not own
    #[error("State {state} is not part of this automaton")]
    InvalidReference { state: StateId },

    /// A transition's label does not match the automaton's declared kind
    #[error("Transition of kind {found} cannot be added to a {expected} automaton")]
    KindMismatch {
        expected: TransitionKind,
        found: TransitionKind,
    },

    /// A state id was reused
    #[error("State {0} already exists")]
    DuplicateState(StateId),

    /// Every state id is already in use
    #[error("No free state id left")]
    StateIdsExhausted,
}

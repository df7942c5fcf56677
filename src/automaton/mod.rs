//! Automaton graph model.
//!
//! This module contains the structural model shared by every machine kind:
//! - `State` nodes identified by `StateId`
//! - `Transition` edges whose label is tagged with a `TransitionKind`
//! - `Automaton`, a multigraph restricted to one transition kind
//! - `VariableDependencyGraph`, the dependency-edge specialization
//!
//! Mutation is in place and single-writer; callers sharing an automaton
//! across threads must synchronize externally.

mod dependency;
mod error;
mod machine;
mod state;
mod transition;

pub use dependency::VariableDependencyGraph;
pub use error::AutomatonError;
pub use machine::Automaton;
pub use state::{State, StateId};
pub use transition::{Transition, TransitionKind, TransitionLabel};

//! jflap-core: automata, grammars and their `.jff` persistence
//!
//! The crate models discrete formal-language structures and offers two
//! services over them: connectivity analysis of automaton graphs, and a
//! lossless document codec.
//!
//! # Core Concepts
//!
//! - **Automaton**: states and labeled transitions of one declared kind
//! - **Grammar**: productions in application order
//! - **Connectivity**: partition of an automaton's states into disjoint sets
//! - **Transducer**: kind-specific conversion between a structure and a document
//! - **Codec**: end-to-end encode/decode of any registered structure
//!
//! # Example
//!
//! ```rust
//! use jflap_core::automaton::{Automaton, Transition, TransitionKind};
//! use jflap_core::codec::{Codec, XmlCodec};
//! use jflap_core::connectivity::disjoint_sets;
//! use jflap_core::Structure;
//!
//! let mut fa = Automaton::new(TransitionKind::Finite);
//! let q0 = fa.add_state().unwrap();
//! let q1 = fa.add_state().unwrap();
//! let q2 = fa.add_state().unwrap();
//! fa.add_transition(Transition::finite(q0, q1, "a")).unwrap();
//! fa.set_initial_state(Some(q0)).unwrap();
//! fa.add_final_state(q1).unwrap();
//!
//! assert_eq!(disjoint_sets(&fa).len(), 2);
//! assert!(!disjoint_sets(&fa)[1].contains(&q0));
//! assert!(disjoint_sets(&fa)[1].contains(&q2));
//!
//! let codec = XmlCodec::new();
//! let structure = Structure::from(fa);
//! let mut bytes = Vec::new();
//! codec.encode_to_writer(&structure, &mut bytes).unwrap();
//! assert_eq!(codec.decode(&bytes).unwrap(), structure);
//! ```

pub mod automaton;
pub mod codec;
pub mod connectivity;
pub mod document;
pub mod grammar;
pub mod structure;
pub mod transducer;

// Re-export commonly used types
pub use automaton::{
    Automaton, State, StateId, Transition, TransitionKind, VariableDependencyGraph,
};
pub use codec::{Codec, CodecError, XmlCodec};
pub use grammar::{Grammar, Production, SymbolClassifier, UppercaseVariables};
pub use structure::{Chooser, Structure, StructureKind};

//! Grammar and production model.
//!
//! - `Production`: one rewrite rule with structural equality
//! - `Grammar`: productions in application order
//! - `SymbolClassifier`: pluggable variable/terminal classification
//!
//! Symbol sets are never stored; every query recomputes them from the
//! current left and right sides.

mod classifier;
mod production;
mod rules;

pub use classifier::{SymbolClassifier, UppercaseVariables};
pub use production::{Production, EMPTY_STRING};
pub use rules::Grammar;

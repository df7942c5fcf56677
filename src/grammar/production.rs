//! Grammar productions and their derived symbol queries.

use super::classifier::SymbolClassifier;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Shown in place of an empty right-hand side.
pub const EMPTY_STRING: char = 'λ';

/// One rewrite rule `lhs -> rhs`.
///
/// Equality and hashing are structural over the two strings. Either side
/// may be empty. Symbol queries are recomputed from the current strings on
/// every call, so they always reflect the latest `set_lhs`/`set_rhs`.
///
/// # Example
///
/// ```rust
/// use jflap_core::grammar::{Production, UppercaseVariables};
///
/// let p = Production::new("S", "aAb");
/// assert_eq!(p.variables_on_rhs(&UppercaseVariables), vec!['A']);
/// assert_eq!(p.terminals_on_rhs(&UppercaseVariables), vec!['a', 'b']);
/// assert_eq!(p.symbols_on_rhs(), vec!['a', 'A', 'b']);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Production {
    lhs: String,
    rhs: String,
}

impl Production {
    pub fn new(lhs: impl Into<String>, rhs: impl Into<String>) -> Self {
        Self {
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }

    pub fn lhs(&self) -> &str {
        &self.lhs
    }

    pub fn rhs(&self) -> &str {
        &self.rhs
    }

    pub fn set_lhs(&mut self, lhs: impl Into<String>) {
        self.lhs = lhs.into();
    }

    pub fn set_rhs(&mut self, rhs: impl Into<String>) {
        self.rhs = rhs.into();
    }

    /// Variables on the left side, positional.
    pub fn variables_on_lhs<C: SymbolClassifier + ?Sized>(&self, classifier: &C) -> Vec<char> {
        self.lhs
            .chars()
            .filter(|c| classifier.is_variable(*c))
            .collect()
    }

    /// Variables on the right side, positional.
    pub fn variables_on_rhs<C: SymbolClassifier + ?Sized>(&self, classifier: &C) -> Vec<char> {
        self.rhs
            .chars()
            .filter(|c| classifier.is_variable(*c))
            .collect()
    }

    /// Terminals on the left side, positional.
    pub fn terminals_on_lhs<C: SymbolClassifier + ?Sized>(&self, classifier: &C) -> Vec<char> {
        self.lhs
            .chars()
            .filter(|c| classifier.is_terminal(*c))
            .collect()
    }

    /// Terminals on the right side, positional.
    pub fn terminals_on_rhs<C: SymbolClassifier + ?Sized>(&self, classifier: &C) -> Vec<char> {
        self.rhs
            .chars()
            .filter(|c| classifier.is_terminal(*c))
            .collect()
    }

    /// Distinct variables, first-seen order: right side first, then left.
    pub fn variables<C: SymbolClassifier + ?Sized>(&self, classifier: &C) -> Vec<char> {
        first_seen(
            self.variables_on_rhs(classifier)
                .into_iter()
                .chain(self.variables_on_lhs(classifier)),
        )
    }

    /// Distinct terminals, first-seen order: right side first, then left.
    pub fn terminals<C: SymbolClassifier + ?Sized>(&self, classifier: &C) -> Vec<char> {
        first_seen(
            self.terminals_on_rhs(classifier)
                .into_iter()
                .chain(self.terminals_on_lhs(classifier)),
        )
    }

    /// Distinct variables and terminals in sorted order.
    ///
    /// Unlike [`variables`](Self::variables) and
    /// [`terminals`](Self::terminals) this is sorted, not first-seen.
    pub fn symbols<C: SymbolClassifier + ?Sized>(&self, classifier: &C) -> Vec<char> {
        let sorted: BTreeSet<char> = self
            .variables(classifier)
            .into_iter()
            .chain(self.terminals(classifier))
            .collect();
        sorted.into_iter().collect()
    }

    /// Every character of the right side, positional.
    pub fn symbols_on_rhs(&self) -> Vec<char> {
        self.rhs.chars().collect()
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rhs.is_empty() {
            write!(f, "{}→{}", self.lhs, EMPTY_STRING)
        } else {
            write!(f, "{}→{}", self.lhs, self.rhs)
        }
    }
}

fn first_seen(symbols: impl IntoIterator<Item = char>) -> Vec<char> {
    let mut out: Vec<char> = Vec::new();
    for symbol in symbols {
        if !out.contains(&symbol) {
            out.push(symbol);
        }
    }
    out
}

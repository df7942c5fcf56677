//! Ordered collections of productions.

use super::classifier::SymbolClassifier;
use super::production::Production;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A grammar: productions in application order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grammar {
    productions: Vec<Production>,
}

impl Grammar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a production.
    pub fn add_production(&mut self, production: Production) {
        self.productions.push(production);
    }

    /// Remove the first production equal to `production`.
    pub fn remove_production(&mut self, production: &Production) -> bool {
        match self.productions.iter().position(|p| p == production) {
            Some(index) => {
                self.productions.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    pub fn productions_mut(&mut self) -> &mut [Production] {
        &mut self.productions
    }

    pub fn len(&self) -> usize {
        self.productions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.productions.is_empty()
    }

    /// Productions whose left side equals `lhs`, in order.
    pub fn productions_on_lhs<'a>(&'a self, lhs: &'a str) -> impl Iterator<Item = &'a Production> {
        self.productions.iter().filter(move |p| p.lhs() == lhs)
    }

    /// The start variable: left side of the first production, when that
    /// side is a single variable.
    pub fn start_variable<C: SymbolClassifier + ?Sized>(&self, classifier: &C) -> Option<char> {
        let first = self.productions.first()?;
        let mut lhs = first.lhs().chars();
        match (lhs.next(), lhs.next()) {
            (Some(symbol), None) if classifier.is_variable(symbol) => Some(symbol),
            _ => None,
        }
    }

    /// Distinct variables across all productions, first-seen order.
    pub fn variables<C: SymbolClassifier + ?Sized>(&self, classifier: &C) -> Vec<char> {
        let mut out = Vec::new();
        for symbol in self.productions.iter().flat_map(|p| p.variables(classifier)) {
            if !out.contains(&symbol) {
                out.push(symbol);
            }
        }
        out
    }

    /// Distinct terminals across all productions, first-seen order.
    pub fn terminals<C: SymbolClassifier + ?Sized>(&self, classifier: &C) -> Vec<char> {
        let mut out = Vec::new();
        for symbol in self.productions.iter().flat_map(|p| p.terminals(classifier)) {
            if !out.contains(&symbol) {
                out.push(symbol);
            }
        }
        out
    }
}

impl FromIterator<Production> for Grammar {
    fn from_iter<I: IntoIterator<Item = Production>>(iter: I) -> Self {
        Self {
            productions: iter.into_iter().collect(),
        }
    }
}

impl Extend<Production> for Grammar {
    fn extend<I: IntoIterator<Item = Production>>(&mut self, iter: I) {
        self.productions.extend(iter);
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for production in &self.productions {
            writeln!(f, "{production}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::UppercaseVariables;

    fn balanced() -> Grammar {
        vec![
            Production::new("S", "aSb"),
            Production::new("S", ""),
            Production::new("T", "cS"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn keeps_production_order() {
        let g = balanced();
        let rhs: Vec<_> = g.productions().iter().map(Production::rhs).collect();
        assert_eq!(rhs, vec!["aSb", "", "cS"]);
        assert_eq!(g.len(), 3);
    }

    #[test]
    fn start_variable_is_first_lhs() {
        let g = balanced();
        assert_eq!(g.start_variable(&UppercaseVariables), Some('S'));

        let odd: Grammar = std::iter::once(Production::new("aS", "b")).collect();
        assert_eq!(odd.start_variable(&UppercaseVariables), None);
        assert_eq!(Grammar::new().start_variable(&UppercaseVariables), None);
    }

    #[test]
    fn grammar_wide_symbols() {
        let g = balanced();
        assert_eq!(g.variables(&UppercaseVariables), vec!['S', 'T']);
        assert_eq!(g.terminals(&UppercaseVariables), vec!['a', 'b', 'c']);
    }

    #[test]
    fn productions_on_lhs_filters() {
        let g = balanced();
        assert_eq!(g.productions_on_lhs("S").count(), 2);
        assert_eq!(g.productions_on_lhs("U").count(), 0);
    }

    #[test]
    fn remove_production_removes_first_match() {
        let mut g = balanced();
        g.add_production(Production::new("S", ""));
        assert!(g.remove_production(&Production::new("S", "")));
        assert_eq!(g.len(), 3);
        assert_eq!(g.productions()[2], Production::new("S", ""));
    }

    #[test]
    fn display_lists_productions() {
        let g = balanced();
        assert_eq!(g.to_string(), "S→aSb\nS→λ\nT→cS\n");
    }
}

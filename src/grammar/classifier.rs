//! Per-character symbol classification.

/// Decides which characters of a production are variables and which are
/// terminals.
///
/// The two predicates are applied independently. A classifier is free to
/// leave a character unclassified, so callers must not assume every
/// character is one or the other.
pub trait SymbolClassifier {
    fn is_variable(&self, symbol: char) -> bool;

    fn is_terminal(&self, symbol: char) -> bool;
}

/// ASCII uppercase letters are variables, everything else is a terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UppercaseVariables;

impl SymbolClassifier for UppercaseVariables {
    fn is_variable(&self, symbol: char) -> bool {
        symbol.is_ascii_uppercase()
    }

    fn is_terminal(&self, symbol: char) -> bool {
        !self.is_variable(symbol)
    }
}

impl<F> SymbolClassifier for F
where
    F: Fn(char) -> bool,
{
    fn is_variable(&self, symbol: char) -> bool {
        self(symbol)
    }

    fn is_terminal(&self, symbol: char) -> bool {
        !self(symbol)
    }
}

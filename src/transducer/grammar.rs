//! Grammar documents.

use super::{unsupported, Transducer};
use crate::codec::CodecError;
use crate::document::{Document, Element};
use crate::grammar::{Grammar, Production};
use crate::structure::{Structure, StructureKind};
use tracing::debug;

pub const GRAMMAR_TAG: &str = "grammar";
pub const PRODUCTION_NAME: &str = "production";
pub const PRODUCTION_LEFT_NAME: &str = "left";
pub const PRODUCTION_RIGHT_NAME: &str = "right";

const COMMENT_PRODUCTIONS: &str = "The list of productions.";

/// Encodes grammars as a list of `production` elements.
///
/// ```xml
/// <grammar>
///   <!--The list of productions.-->
///   <production>
///     <left>S</left>
///     <right>aSb</right>
///   </production>
/// </grammar>
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct GrammarTransducer;

impl GrammarTransducer {
    /// Element for a single production. Empty sides still get an element.
    pub fn production_element(production: &Production) -> Element {
        let mut element = Element::new(PRODUCTION_NAME);
        element.append_element(Element::with_text(PRODUCTION_LEFT_NAME, production.lhs()));
        element.append_element(Element::with_text(PRODUCTION_RIGHT_NAME, production.rhs()));
        element
    }

    /// Production read from a `production` element. A missing side reads
    /// as the empty string.
    pub fn production_from(element: &Element) -> Production {
        let side = |tag: &str| {
            element
                .child(tag)
                .map(Element::text)
                .unwrap_or_default()
        };
        Production::new(side(PRODUCTION_LEFT_NAME), side(PRODUCTION_RIGHT_NAME))
    }
}

impl Transducer for GrammarTransducer {
    fn type_tag(&self) -> &str {
        GRAMMAR_TAG
    }

    fn kind(&self) -> StructureKind {
        StructureKind::Grammar
    }

    fn to_document(&self, structure: &Structure) -> Result<Document, CodecError> {
        let Structure::Grammar(grammar) = structure else {
            return Err(unsupported(structure));
        };

        let mut document = Document::new(GRAMMAR_TAG);
        let root = document.root_mut();
        if !grammar.is_empty() {
            root.append_comment(COMMENT_PRODUCTIONS);
        }
        for production in grammar.productions() {
            root.append_element(Self::production_element(production));
        }
        Ok(document)
    }

    fn from_document(&self, document: &Document) -> Result<Structure, CodecError> {
        let grammar: Grammar = document
            .root()
            .descendants_by_tag(PRODUCTION_NAME)
            .into_iter()
            .map(Self::production_from)
            .collect();
        debug!(productions = grammar.len(), "decoded grammar");
        Ok(Structure::Grammar(grammar))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Node;

    fn decode(xml: &str) -> Grammar {
        let document = Document::parse(xml.as_bytes()).unwrap();
        match GrammarTransducer.from_document(&document).unwrap() {
            Structure::Grammar(grammar) => grammar,
            other => panic!("expected grammar, got {other:?}"),
        }
    }

    #[test]
    fn empty_grammar_has_no_comment() {
        let document = GrammarTransducer
            .to_document(&Structure::Grammar(Grammar::new()))
            .unwrap();
        assert_eq!(document.root_tag(), "grammar");
        assert!(document.root().children().is_empty());
        assert!(decode("<grammar/>").is_empty());
    }

    #[test]
    fn comment_precedes_productions() {
        let grammar: Grammar = vec![Production::new("S", "aSb"), Production::new("S", "")]
            .into_iter()
            .collect();
        let document = GrammarTransducer
            .to_document(&Structure::Grammar(grammar))
            .unwrap();
        let children = document.root().children();
        assert_eq!(children.len(), 3);
        assert!(matches!(&children[0], Node::Comment(text) if text == COMMENT_PRODUCTIONS));

        let empty_right = document.root().descendants_by_tag(PRODUCTION_RIGHT_NAME)[1];
        assert_eq!(empty_right.text(), "");
    }

    #[test]
    fn missing_sides_decode_as_empty() {
        let grammar = decode(
            "<grammar><production><left>S</left></production>\
             <production><right>a</right></production></grammar>",
        );
        assert_eq!(
            grammar.productions(),
            &[Production::new("S", ""), Production::new("", "a")]
        );
    }

    #[test]
    fn nested_and_unknown_elements_are_tolerated() {
        let grammar = decode(
            "<structure><type>grammar</type><!-- note -->\
             <extra>ignored</extra>\
             <group><production><right>b</right><left>A</left><x/></production></group>\
             <production><left>S</left><right>A</right></production>\
             </structure>",
        );
        assert_eq!(
            grammar.productions(),
            &[Production::new("A", "b"), Production::new("S", "A")]
        );
    }

    #[test]
    fn rejects_other_structures() {
        use crate::automaton::{Automaton, TransitionKind};
        let result =
            GrammarTransducer.to_document(&Structure::from(Automaton::new(TransitionKind::Finite)));
        assert!(matches!(
            result,
            Err(CodecError::UnsupportedStructure { .. })
        ));
    }
}

//! Automaton documents, one transducer per transition kind.

use super::{unsupported, Transducer};
use crate::automaton::{
    Automaton, State, StateId, Transition, TransitionKind, TransitionLabel,
    VariableDependencyGraph,
};
use crate::codec::CodecError;
use crate::document::{Document, Element};
use crate::structure::{Structure, StructureKind};
use tracing::{debug, warn};

pub const STATE_NAME: &str = "state";
pub const STATE_ID_NAME: &str = "id";
pub const STATE_NAME_NAME: &str = "name";
pub const STATE_LABEL_NAME: &str = "label";
pub const STATE_INITIAL_NAME: &str = "initial";
pub const STATE_FINAL_NAME: &str = "final";
pub const TRANSITION_NAME: &str = "transition";
pub const TRANSITION_FROM_NAME: &str = "from";
pub const TRANSITION_TO_NAME: &str = "to";
pub const TRANSITION_READ_NAME: &str = "read";
pub const TRANSITION_OUTPUT_NAME: &str = "transout";

const COMMENT_STATES: &str = "The list of states.";
const COMMENT_TRANSITIONS: &str = "The list of transitions.";

/// Encodes automata of one [`TransitionKind`].
///
/// ```xml
/// <fa>
///   <!--The list of states.-->
///   <state id="0" name="q0">
///     <initial/>
///   </state>
///   <state id="1" name="q1">
///     <final/>
///   </state>
///   <!--The list of transitions.-->
///   <transition>
///     <from>0</from>
///     <to>1</to>
///     <read>a</read>
///   </transition>
/// </fa>
/// ```
///
/// Dependency graphs decode to [`Structure::DependencyGraph`].
#[derive(Clone, Copy, Debug)]
pub struct AutomatonTransducer {
    kind: TransitionKind,
}

impl AutomatonTransducer {
    pub fn new(kind: TransitionKind) -> Self {
        Self { kind }
    }

    fn state_element(automaton: &Automaton, state: &State) -> Element {
        let mut element = Element::new(STATE_NAME)
            .with_attribute(STATE_ID_NAME, state.id().0.to_string())
            .with_attribute(STATE_NAME_NAME, state.name());
        if let Some(label) = state.label() {
            element.append_element(Element::with_text(STATE_LABEL_NAME, label));
        }
        if automaton.initial_state() == Some(state.id()) {
            element.append_element(Element::new(STATE_INITIAL_NAME));
        }
        if automaton.is_final(state.id()) {
            element.append_element(Element::new(STATE_FINAL_NAME));
        }
        element
    }

    fn transition_element(transition: &Transition) -> Element {
        let mut element = Element::new(TRANSITION_NAME);
        element.append_element(Element::with_text(
            TRANSITION_FROM_NAME,
            transition.from().0.to_string(),
        ));
        element.append_element(Element::with_text(
            TRANSITION_TO_NAME,
            transition.to().0.to_string(),
        ));
        match transition.label() {
            TransitionLabel::Finite { read } | TransitionLabel::Moore { read } => {
                element.append_element(Element::with_text(TRANSITION_READ_NAME, read.as_str()));
            }
            TransitionLabel::Mealy { read, output } => {
                element.append_element(Element::with_text(TRANSITION_READ_NAME, read.as_str()));
                element.append_element(Element::with_text(
                    TRANSITION_OUTPUT_NAME,
                    output.as_str(),
                ));
            }
            TransitionLabel::Dependency => {}
        }
        element
    }

    fn label_from(&self, element: &Element) -> TransitionLabel {
        let text = |tag: &str| element.child(tag).map(Element::text).unwrap_or_default();
        match self.kind {
            TransitionKind::Finite => TransitionLabel::Finite {
                read: text(TRANSITION_READ_NAME),
            },
            TransitionKind::Mealy => TransitionLabel::Mealy {
                read: text(TRANSITION_READ_NAME),
                output: text(TRANSITION_OUTPUT_NAME),
            },
            TransitionKind::Moore => TransitionLabel::Moore {
                read: text(TRANSITION_READ_NAME),
            },
            TransitionKind::Dependency => TransitionLabel::Dependency,
        }
    }

    fn automaton_from(&self, document: &Document) -> Result<Automaton, CodecError> {
        let root = document.root();
        let mut automaton = Automaton::new(self.kind);

        for element in root.descendants_by_tag(STATE_NAME) {
            let id = parse_id(element.attribute(STATE_ID_NAME), STATE_ID_NAME)?;
            let mut state = match element.attribute(STATE_NAME_NAME) {
                Some(name) => State::named(id, name),
                None => State::new(id),
            };
            if let Some(label) = element.child(STATE_LABEL_NAME) {
                state = state.with_label(label.text());
            }
            automaton.insert_state(state)?;
            if element.child(STATE_INITIAL_NAME).is_some() {
                match automaton.initial_state() {
                    None => automaton.set_initial_state(Some(id))?,
                    Some(first) => warn!(
                        %first,
                        ignored = %id,
                        "second initial state marker, keeping the first"
                    ),
                }
            }
            if element.child(STATE_FINAL_NAME).is_some() {
                automaton.add_final_state(id)?;
            }
        }

        for element in root.descendants_by_tag(TRANSITION_NAME) {
            let from = parse_id(
                element.child(TRANSITION_FROM_NAME).map(Element::text).as_deref(),
                TRANSITION_FROM_NAME,
            )?;
            let to = parse_id(
                element.child(TRANSITION_TO_NAME).map(Element::text).as_deref(),
                TRANSITION_TO_NAME,
            )?;
            automaton.add_transition(Transition::new(from, to, self.label_from(element)))?;
        }
        Ok(automaton)
    }
}

impl Transducer for AutomatonTransducer {
    fn type_tag(&self) -> &str {
        self.kind.tag()
    }

    fn kind(&self) -> StructureKind {
        StructureKind::Automaton(self.kind)
    }

    fn to_document(&self, structure: &Structure) -> Result<Document, CodecError> {
        let automaton = match structure.as_automaton() {
            Some(automaton)
                if automaton.kind() == self.kind && !structure.is_bare_dependency_automaton() =>
            {
                automaton
            }
            _ => return Err(unsupported(structure)),
        };

        let mut document = Document::new(self.type_tag());
        let root = document.root_mut();
        if !automaton.is_empty() {
            root.append_comment(COMMENT_STATES);
        }
        for state in automaton.states() {
            root.append_element(Self::state_element(automaton, state));
        }
        if !automaton.transitions().is_empty() {
            root.append_comment(COMMENT_TRANSITIONS);
        }
        for transition in automaton.transitions() {
            root.append_element(Self::transition_element(transition));
        }
        Ok(document)
    }

    fn from_document(&self, document: &Document) -> Result<Structure, CodecError> {
        let automaton = self.automaton_from(document)?;
        debug!(
            kind = %self.kind,
            states = automaton.states().len(),
            transitions = automaton.transitions().len(),
            "decoded automaton"
        );
        match self.kind {
            TransitionKind::Dependency => Ok(Structure::DependencyGraph(
                VariableDependencyGraph::try_from(automaton)?,
            )),
            _ => Ok(Structure::Automaton(automaton)),
        }
    }
}

fn parse_id(text: Option<&str>, field: &str) -> Result<StateId, CodecError> {
    let Some(text) = text else {
        warn!(field, "missing state reference");
        return Err(CodecError::ParseFailure(format!("missing state {field}")));
    };
    text.trim().parse::<u32>().map(StateId).map_err(|_| {
        warn!(field, value = text, "state reference is not an integer");
        CodecError::ParseFailure(format!("state {field} '{text}' is not an integer"))
    })
}

//! Two-way transducer lookup.

use super::{AutomatonTransducer, GrammarTransducer, Transducer};
use crate::automaton::TransitionKind;
use crate::codec::CodecError;
use crate::document::Document;
use crate::structure::{Structure, StructureKind};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Root tag of the older wrapped layout, `<structure><type>...</type>`.
const LEGACY_ROOT: &str = "structure";
const LEGACY_TYPE_NAME: &str = "type";

/// Tag naming the structure kind a document holds.
///
/// This is the root tag, except for the wrapped layout where the root is
/// `structure` and the kind is the text of its `type` child.
pub fn document_type(document: &Document) -> String {
    let root = document.root();
    if root.tag() == LEGACY_ROOT {
        if let Some(kind) = root.child(LEGACY_TYPE_NAME) {
            return kind.text().trim().to_string();
        }
    }
    root.tag().to_string()
}

/// Maps structure kinds and document tags to transducers.
///
/// Both maps are filled by [`register`](Self::register), so the transducer
/// used to encode a structure is always the one selected to decode it.
#[derive(Clone, Default)]
pub struct TransducerRegistry {
    by_kind: HashMap<StructureKind, Arc<dyn Transducer>>,
    by_tag: HashMap<String, Arc<dyn Transducer>>,
}

impl TransducerRegistry {
    /// A registry with no transducers.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the grammar transducer and one automaton transducer
    /// per transition kind.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(GrammarTransducer);
        for kind in TransitionKind::ALL {
            registry.register(AutomatonTransducer::new(kind));
        }
        registry
    }

    /// Register `transducer`, replacing any earlier one for the same kind
    /// or tag.
    pub fn register<T: Transducer + 'static>(&mut self, transducer: T) {
        let transducer: Arc<dyn Transducer> = Arc::new(transducer);
        self.by_kind.insert(transducer.kind(), Arc::clone(&transducer));
        self.by_tag
            .insert(transducer.type_tag().to_string(), transducer);
    }

    /// Transducer for encoding `structure`.
    ///
    /// Choosers must be resolved by the caller; they are never registered.
    pub fn for_structure(&self, structure: &Structure) -> Result<&dyn Transducer, CodecError> {
        let kind = structure.kind();
        let transducer = self
            .by_kind
            .get(&kind)
            .ok_or_else(|| CodecError::UnsupportedStructure {
                kind: kind.to_string(),
            })?;
        debug!(%kind, tag = transducer.type_tag(), "selected transducer for structure");
        Ok(transducer.as_ref())
    }

    /// Transducer for decoding `document`.
    pub fn for_document(&self, document: &Document) -> Result<&dyn Transducer, CodecError> {
        let tag = document_type(document);
        let transducer = self
            .by_tag
            .get(&tag)
            .ok_or_else(|| CodecError::UnsupportedFormat { tag: tag.clone() })?;
        debug!(%tag, "selected transducer for document");
        Ok(transducer.as_ref())
    }

    /// Whether a transducer is registered for `kind`.
    pub fn supports(&self, kind: StructureKind) -> bool {
        self.by_kind.contains_key(&kind)
    }

    /// Registered document tags.
    pub fn tags(&self) -> impl Iterator<Item = &str> + '_ {
        self.by_tag.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for TransducerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tags: Vec<_> = self.tags().collect();
        tags.sort_unstable();
        f.debug_struct("TransducerRegistry")
            .field("tags", &tags)
            .finish()
    }
}

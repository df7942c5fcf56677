//! Transducers between structures and document trees.
//!
//! A transducer knows how to turn one kind of structure into a document and
//! back. The [`TransducerRegistry`] picks the transducer for a structure when
//! encoding and for a document when decoding.

mod automaton;
mod grammar;
mod registry;

pub use automaton::AutomatonTransducer;
pub use grammar::GrammarTransducer;
pub use registry::{document_type, TransducerRegistry};

use crate::codec::CodecError;
use crate::document::Document;
use crate::structure::{Structure, StructureKind};

/// Type-specific encoder/decoder between a structure and a document tree.
///
/// Implementations must agree with themselves: decoding the document
/// produced by [`to_document`](Self::to_document) yields an equal structure,
/// and the document's root tag equals [`type_tag`](Self::type_tag).
pub trait Transducer: Send + Sync {
    /// Root tag of the documents this transducer produces and reads.
    fn type_tag(&self) -> &str;

    /// Structure kind this transducer encodes.
    fn kind(&self) -> StructureKind;

    /// Build a document describing `structure`.
    fn to_document(&self, structure: &Structure) -> Result<Document, CodecError>;

    /// Rebuild a structure from `document`.
    fn from_document(&self, document: &Document) -> Result<Structure, CodecError>;
}

pub(crate) fn unsupported(structure: &Structure) -> CodecError {
    CodecError::UnsupportedStructure {
        kind: structure.kind().to_string(),
    }
}

//! Codec error types.

use crate::automaton::AutomatonError;
use crate::document::DocumentError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while encoding or decoding structures
#[derive(Debug, Error)]
pub enum CodecError {
    /// Input was not a well-formed document, could not be read, or held
    /// content a transducer could not interpret
    #[error("Could not parse document: {0}")]
    ParseFailure(String),

    /// No transducer is registered for the document's type
    #[error("No transducer available for documents of type '{tag}'")]
    UnsupportedFormat { tag: String },

    /// No transducer is registered for the structure's kind
    #[error("No transducer available for {kind} structures")]
    UnsupportedStructure { kind: String },

    /// Serialized output could not be written
    #[error("Could not write {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A decoded transition or marker names a state that was never declared
    #[error("Document is inconsistent: {0}")]
    InvalidReference(AutomatonError),
}

impl From<DocumentError> for CodecError {
    fn from(error: DocumentError) -> Self {
        CodecError::ParseFailure(error.to_string())
    }
}

impl From<AutomatonError> for CodecError {
    fn from(error: AutomatonError) -> Self {
        match error {
            AutomatonError::InvalidReference { .. } => CodecError::InvalidReference(error),
            other => CodecError::ParseFailure(other.to_string()),
        }
    }
}

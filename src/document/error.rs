//! Document tree errors.

use thiserror::Error;

/// Errors that can occur while parsing or writing a document tree.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Input was not a well-formed document
    #[error("Malformed document at byte {position}: {message}")]
    Malformed { position: u64, message: String },

    /// Writing the serialized tree failed
    #[error("Failed to write document: {0}")]
    Io(#[from] std::io::Error),
}

//! Encoding and decoding structures to files.
//!
//! The codec is independent of any one structure kind: it parses bytes
//! into a document, asks the transducer registry who handles the document,
//! and lets that transducer rebuild the structure. Encoding runs the same
//! steps in reverse and writes the result atomically.

use crate::structure::Structure;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod error;
pub mod options;
mod xml;

pub use error::CodecError;
pub use options::CodecOptions;
pub use xml::XmlCodec;

/// A file format structures can be persisted in.
pub trait Codec {
    /// Whether `path` is worth offering: directories and files with a
    /// recognized extension.
    fn accept(&self, path: &Path) -> bool;

    /// Coarse check that `structure` has a transducer. Not a validation.
    fn can_encode(&self, structure: &Structure) -> bool;

    /// Decode a structure from raw bytes.
    fn decode(&self, bytes: &[u8]) -> Result<Structure, CodecError>;

    /// Decode a structure from a file. An unreadable file is a parse failure.
    fn decode_file(&self, path: &Path) -> Result<Structure, CodecError> {
        let bytes = std::fs::read(path).map_err(|e| {
            CodecError::ParseFailure(format!("could not read {}: {e}", path.display()))
        })?;
        self.decode(&bytes)
    }

    /// Encode `structure` into `writer`.
    fn encode_to_writer(
        &self,
        structure: &Structure,
        writer: &mut dyn Write,
    ) -> Result<(), CodecError>;

    /// Encode `structure` to `path`, replacing it atomically. Returns the
    /// path written.
    fn encode(&self, structure: &Structure, path: &Path) -> Result<PathBuf, CodecError>;

    /// Human-readable format name.
    fn description(&self) -> &str;

    /// `name` with the format's canonical extension appended if missing.
    fn propose_filename(&self, name: &str, structure: &Structure) -> String;
}

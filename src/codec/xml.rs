//! The `.jff` XML codec.

use super::error::CodecError;
use super::options::CodecOptions;
use super::Codec;
use crate::document::{Document, DocumentError};
use crate::structure::{Structure, StructureKind};
use crate::transducer::TransducerRegistry;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

const DESCRIPTION: &str = "JFLAP 4 File";

/// Reads and writes structures as XML documents.
///
/// # Example
///
/// ```rust
/// use jflap_core::codec::{Codec, XmlCodec};
/// use jflap_core::grammar::{Grammar, Production};
/// use jflap_core::Structure;
///
/// let codec = XmlCodec::new();
/// let grammar: Grammar = vec![Production::new("S", "aSb"), Production::new("S", "")]
///     .into_iter()
///     .collect();
/// let structure = Structure::from(grammar);
///
/// let mut bytes = Vec::new();
/// codec.encode_to_writer(&structure, &mut bytes).unwrap();
/// assert_eq!(codec.decode(&bytes).unwrap(), structure);
/// ```
#[derive(Clone, Debug)]
pub struct XmlCodec {
    registry: TransducerRegistry,
    options: CodecOptions,
}

impl XmlCodec {
    /// Codec with the default transducers and options.
    pub fn new() -> Self {
        Self::with_registry(TransducerRegistry::with_defaults())
    }

    pub fn with_registry(registry: TransducerRegistry) -> Self {
        Self {
            registry,
            options: CodecOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    pub fn registry(&self) -> &TransducerRegistry {
        &self.registry
    }

    /// Resolve choosers and build the normalized document for `structure`.
    fn document_for(&self, structure: &Structure) -> Result<Document, CodecError> {
        let target = structure
            .resolve()
            .ok_or_else(|| CodecError::UnsupportedStructure {
                kind: StructureKind::Chooser.to_string(),
            })?;
        let transducer = self.registry.for_structure(target)?;
        let mut document = transducer.to_document(target)?;
        document.normalize_whitespace();
        Ok(document)
    }
}

impl Default for XmlCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Codec for XmlCodec {
    fn accept(&self, path: &Path) -> bool {
        if path.is_dir() {
            return true;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.options.extensions.iter().any(|known| known == ext))
    }

    fn can_encode(&self, structure: &Structure) -> bool {
        structure
            .resolve()
            .is_some_and(|target| {
                !target.is_bare_dependency_automaton() && self.registry.supports(target.kind())
            })
    }

    fn decode(&self, bytes: &[u8]) -> Result<Structure, CodecError> {
        let document = Document::parse(bytes)?;
        let transducer = self.registry.for_document(&document)?;
        let structure = transducer.from_document(&document)?;
        debug!(tag = transducer.type_tag(), "decoded document");
        Ok(structure)
    }

    fn encode_to_writer(
        &self,
        structure: &Structure,
        writer: &mut dyn Write,
    ) -> Result<(), CodecError> {
        let document = self.document_for(structure)?;
        document
            .write_to(writer, self.options.write_options())
            .map_err(|e| write_failure(PathBuf::new(), e))
    }

    fn encode(&self, structure: &Structure, path: &Path) -> Result<PathBuf, CodecError> {
        let document = self.document_for(structure)?;

        // staged in the destination's directory; only persist replaces it
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut staged = NamedTempFile::new_in(dir).map_err(|source| CodecError::WriteFailure {
            path: path.to_path_buf(),
            source,
        })?;
        document
            .write_to(staged.as_file_mut(), self.options.write_options())
            .map_err(|e| write_failure(path.to_path_buf(), e))?;
        staged
            .as_file()
            .sync_all()
            .map_err(|source| CodecError::WriteFailure {
                path: path.to_path_buf(),
                source,
            })?;
        staged
            .persist(path)
            .map_err(|e| CodecError::WriteFailure {
                path: path.to_path_buf(),
                source: e.error,
            })?;

        debug!(path = %path.display(), tag = document.root_tag(), "encoded structure");
        Ok(path.to_path_buf())
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn propose_filename(&self, name: &str, _structure: &Structure) -> String {
        if name.ends_with(self.options.suffix.as_str()) {
            name.to_string()
        } else {
            format!("{name}{}", self.options.suffix)
        }
    }
}

fn write_failure(path: PathBuf, error: DocumentError) -> CodecError {
    let source = match error {
        DocumentError::Io(source) => source,
        other => io::Error::other(other.to_string()),
    };
    CodecError::WriteFailure { path, source }
}

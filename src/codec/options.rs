//! Codec configuration.

use crate::document::WriteOptions;
use serde::{Deserialize, Serialize};

/// Settings for [`XmlCodec`](super::XmlCodec).
///
/// Missing fields take their defaults when deserialized, so a partial
/// configuration is enough.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecOptions {
    /// Spaces per nesting level in written files; 0 writes a single line
    pub indent: usize,
    /// Extension appended by `propose_filename`, including the dot
    pub suffix: String,
    /// Extensions (without dot) `accept` recognizes
    pub extensions: Vec<String>,
    /// Write the `<?xml ...?>` declaration
    pub write_declaration: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            suffix: ".jff".to_string(),
            extensions: vec!["jff".to_string(), "xml".to_string()],
            write_declaration: true,
        }
    }
}

impl CodecOptions {
    pub(crate) fn write_options(&self) -> WriteOptions {
        WriteOptions {
            indent: self.indent,
            declaration: self.write_declaration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_jff_files() {
        let options = CodecOptions::default();
        assert_eq!(options.suffix, ".jff");
        assert_eq!(options.extensions, vec!["jff", "xml"]);
        assert_eq!(options.write_options(), WriteOptions::default());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let options: CodecOptions = serde_json::from_str(r#"{"indent": 4}"#).unwrap();
        assert_eq!(options.indent, 4);
        assert_eq!(options.suffix, ".jff");
        assert!(options.write_declaration);
    }
}

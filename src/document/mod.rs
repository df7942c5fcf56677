//! Document trees used as the serialization target.
//!
//! A small builder/reader over an ordered element tree:
//! - build with `Document::new`, `Element::with_text`, `append_*`
//! - read with `Document::parse`, `root_tag`, `children_by_tag`, `text`
//! - write with `Document::write_to`
//!
//! The tree knows nothing about automata or grammars.

mod error;
mod tree;
mod xml;

pub use error::DocumentError;
pub use tree::{Document, Element, Node};
pub use xml::WriteOptions;

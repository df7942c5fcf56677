//! XML reading and writing for document trees, backed by `quick-xml`.

use super::error::DocumentError;
use super::tree::{Document, Element, Node};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::io::Write;

/// How a document is laid out when written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WriteOptions {
    /// Spaces per nesting level
    pub indent: usize,
    /// Emit the `<?xml ...?>` declaration first
    pub declaration: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            declaration: true,
        }
    }
}

impl Document {
    /// Parse a well-formed XML document.
    ///
    /// Comments are kept, processing instructions and doctype are skipped.
    /// Whitespace between child elements is dropped.
    pub fn parse(bytes: &[u8]) -> Result<Document, DocumentError> {
        let mut reader = Reader::from_reader(bytes);
        let mut buf = Vec::new();
        let mut open: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let event = reader
                .read_event_into(&mut buf)
                .map_err(|e| malformed(reader.buffer_position(), e))?;
            let position = reader.buffer_position();

            match event {
                Event::Start(start) => open.push(element_from(&start, position)?),
                Event::Empty(start) => {
                    let element = element_from(&start, position)?;
                    close(element, &mut open, &mut root, position)?;
                }
                Event::End(_) => {
                    let element = open
                        .pop()
                        .ok_or_else(|| malformed(position, "unexpected closing tag"))?;
                    close(element, &mut open, &mut root, position)?;
                }
                Event::Text(text) => {
                    let text = text.unescape().map_err(|e| malformed(position, e))?;
                    push_text(&mut open, text.into_owned(), position)?;
                }
                Event::CData(data) => {
                    let text = String::from_utf8_lossy(&data).into_owned();
                    push_text(&mut open, text, position)?;
                }
                Event::Comment(comment) => {
                    if let Some(parent) = open.last_mut() {
                        parent.append_comment(String::from_utf8_lossy(&comment).into_owned());
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if let Some(unclosed) = open.last() {
            return Err(malformed(
                reader.buffer_position(),
                format!("element <{}> is never closed", unclosed.tag()),
            ));
        }
        root.map(Document::from_root)
            .ok_or_else(|| malformed(0, "document has no root element"))
    }

    /// Serialize the tree as XML into `out`.
    pub fn write_to<W: Write>(&self, out: W, options: WriteOptions) -> Result<(), DocumentError> {
        let mut writer = if options.indent > 0 {
            Writer::new_with_indent(out, b' ', options.indent)
        } else {
            Writer::new(out)
        };
        if options.declaration {
            writer
                .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("no"))))
                .map_err(write_failed)?;
        }
        write_element(&mut writer, self.root())?;
        writer.into_inner().flush()?;
        Ok(())
    }

    /// Serialize the tree as an XML string.
    pub fn to_xml_string(&self, options: WriteOptions) -> Result<String, DocumentError> {
        let mut out = Vec::new();
        self.write_to(&mut out, options)?;
        String::from_utf8(out).map_err(|e| DocumentError::Io(std::io::Error::other(e)))
    }
}

fn element_from(start: &BytesStart<'_>, position: u64) -> Result<Element, DocumentError> {
    let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()).into_owned());
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| malformed(position, e))?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|e| malformed(position, e))?
            .into_owned();
        element = element.with_attribute(key, value);
    }
    Ok(element)
}

fn close(
    mut element: Element,
    open: &mut [Element],
    root: &mut Option<Element>,
    position: u64,
) -> Result<(), DocumentError> {
    if element.has_element_children() {
        element.children.retain(|node| match node {
            Node::Text(text) => !text.trim().is_empty(),
            _ => true,
        });
    }
    if let Some(parent) = open.last_mut() {
        parent.append_element(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(malformed(position, "more than one root element"));
    }
    *root = Some(element);
    Ok(())
}

fn push_text(open: &mut [Element], text: String, position: u64) -> Result<(), DocumentError> {
    match open.last_mut() {
        Some(parent) => {
            parent.append_child(Node::Text(text));
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(malformed(position, "text outside the root element")),
    }
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<(), DocumentError> {
    let mut start = BytesStart::new(element.tag());
    for (name, value) in element.attributes() {
        start.push_attribute((name.as_str(), value.as_str()));
    }
    if element.children().is_empty() {
        return writer.write_event(Event::Empty(start)).map_err(write_failed);
    }

    writer.write_event(Event::Start(start)).map_err(write_failed)?;
    for child in element.children() {
        match child {
            Node::Element(inner) => write_element(writer, inner)?,
            Node::Text(text) => writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(write_failed)?,
            Node::Comment(text) => writer
                .write_event(Event::Comment(BytesText::from_escaped(text.as_str())))
                .map_err(write_failed)?,
        }
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.tag())))
        .map_err(write_failed)
}

fn malformed(position: u64, message: impl ToString) -> DocumentError {
    DocumentError::Malformed {
        position,
        message: message.to_string(),
    }
}

fn write_failed(error: impl ToString) -> DocumentError {
    DocumentError::Io(std::io::Error::other(error.to_string()))
}

//! XML parser that builds XmlDocument trees.

use crate::{Error, Result, XmlAttribute, XmlChild, XmlChildren, XmlDocument, XmlElement};
use quick_xml::Reader;
use quick_xml::events::{BytesCData, BytesEnd, BytesStart, BytesText, Event};
use std::path::Path;

/// Parse XML from a string, producing an XmlDocument tree.
///
/// # Example
///
/// ```rust
/// use regdoc_xml::parse;
///
/// let doc = parse("<root><child/></root>").unwrap();
/// assert_eq!(doc.root.name, "root");
/// ```
///
/// # Errors
///
/// Returns an error if the XML is malformed or if parsing fails.
pub fn parse(content: &str) -> Result<XmlDocument> {
    let mut parser = XmlParser::new(content);
    parser.parse()
}

/// Read and parse an XML document from disk.
pub fn parse_file(path: impl AsRef<Path>) -> Result<XmlDocument> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "Parsing XML document");
    parse(&content)
}

/// Internal parser state.
struct XmlParser<'a> {
    /// The source content being parsed.
    source: &'a str,

    /// The quick-xml reader.
    reader: Reader<&'a [u8]>,

    /// Stack of elements being built.
    stack: Vec<BuildNode>,
}

/// A node being constructed during parsing.
struct BuildNode {
    name: String,
    prefix: Option<String>,
    attributes: Vec<XmlAttribute>,

    /// Byte offset where this element started (the `<` character).
    start_offset: usize,

    /// Child elements and text accumulated so far.
    children: Vec<XmlChild>,
}

impl<'a> XmlParser<'a> {
    fn new(source: &'a str) -> Self {
        let mut reader = Reader::from_str(source);
        reader.config_mut().trim_text_start = false;
        reader.config_mut().trim_text_end = false;

        Self {
            source,
            reader,
            stack: Vec::new(),
        }
    }

    fn parse(&mut self) -> Result<XmlDocument> {
        let mut root: Option<XmlElement> = None;

        loop {
            // Capture position before reading the event
            let event_start = self.reader.buffer_position() as usize;

            match self.reader.read_event() {
                Ok(Event::Start(e)) => {
                    self.handle_start(&e, event_start)?;
                }
                Ok(Event::End(e)) => {
                    let element = self.handle_end(&e)?;
                    self.attach(element, &mut root)?;
                }
                Ok(Event::Empty(e)) => {
                    let element = self.handle_empty(&e, event_start)?;
                    self.attach(element, &mut root)?;
                }
                Ok(Event::Text(e)) => {
                    self.handle_text(&e, event_start)?;
                }
                Ok(Event::CData(e)) => {
                    self.handle_cdata(&e);
                }
                Ok(Event::Comment(_) | Event::PI(_) | Event::Decl(_) | Event::DocType(_)) => {
                    // Skip comments, processing instructions, declarations and DOCTYPE
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::XmlSyntax {
                        message: e.to_string(),
                        position: Some(self.reader.error_position()),
                    });
                }
            }
        }

        // Check for unclosed elements
        if let Some(node) = self.stack.last() {
            return Err(Error::UnexpectedEof {
                expected: format!("closing tag </{}>", node.name),
                offset: node.start_offset,
            });
        }

        let root = root.ok_or(Error::EmptyDocument)?;

        Ok(XmlDocument {
            root,
            source_len: self.source.len(),
        })
    }

    /// Hand a finished element to its parent, or make it the document root.
    fn attach(&mut self, element: XmlElement, root: &mut Option<XmlElement>) -> Result<()> {
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(XmlChild::Element(element)),
            None => {
                if root.is_some() {
                    return Err(Error::MultipleRoots {
                        offset: element.offset,
                    });
                }
                *root = Some(element);
            }
        }
        Ok(())
    }

    fn handle_start(&mut self, e: &BytesStart<'_>, event_start: usize) -> Result<()> {
        let (name, prefix) = split_name(e.name().as_ref());
        let attributes = parse_attributes(e, event_start)?;

        self.stack.push(BuildNode {
            name,
            prefix,
            attributes,
            start_offset: event_start,
            children: Vec::new(),
        });

        Ok(())
    }

    fn handle_end(&mut self, e: &BytesEnd<'_>) -> Result<XmlElement> {
        let (end_local_name, _) = split_name(e.name().as_ref());

        let node = self.stack.pop().ok_or_else(|| Error::InvalidStructure {
            message: format!("Unexpected closing tag </{}>", end_local_name),
        })?;

        // Verify tag names match
        if node.name != end_local_name {
            return Err(Error::MismatchedEndTag {
                expected: node.name,
                found: end_local_name,
                offset: node.start_offset,
            });
        }

        Ok(XmlElement {
            name: node.name,
            prefix: node.prefix,
            attributes: node.attributes,
            children: finalize_children(node.children),
            offset: node.start_offset,
        })
    }

    fn handle_empty(&mut self, e: &BytesStart<'_>, event_start: usize) -> Result<XmlElement> {
        let (name, prefix) = split_name(e.name().as_ref());
        let attributes = parse_attributes(e, event_start)?;

        Ok(XmlElement {
            name,
            prefix,
            attributes,
            children: XmlChildren::Empty,
            offset: event_start,
        })
    }

    fn handle_text(&mut self, e: &BytesText<'_>, event_start: usize) -> Result<()> {
        let text = e.unescape().map_err(|err| Error::XmlSyntax {
            message: format!("Invalid text content: {}", err),
            position: Some(event_start as u64),
        })?;

        // Indentation between elements carries no data
        if text.trim().is_empty() {
            return Ok(());
        }

        if let Some(node) = self.stack.last_mut() {
            node.children.push(XmlChild::Text(text.into_owned()));
        }
        Ok(())
    }

    fn handle_cdata(&mut self, e: &BytesCData<'_>) {
        let text = String::from_utf8_lossy(e.as_ref()).to_string();

        if let Some(node) = self.stack.last_mut() {
            node.children.push(XmlChild::Text(text));
        }
    }
}

/// Split a qualified name into its local name and optional prefix.
fn split_name(raw: &[u8]) -> (String, Option<String>) {
    let full_name = String::from_utf8_lossy(raw);

    match full_name.split_once(':') {
        Some((prefix, local_name)) => (local_name.to_string(), Some(prefix.to_string())),
        None => (full_name.into_owned(), None),
    }
}

fn parse_attributes(e: &BytesStart<'_>, tag_start: usize) -> Result<Vec<XmlAttribute>> {
    let mut attributes = Vec::new();

    for attr_result in e.attributes() {
        let attr = attr_result?;
        let (name, prefix) = split_name(attr.key.as_ref());

        let value = attr.unescape_value().map_err(|err| Error::XmlSyntax {
            message: format!("Invalid attribute value: {}", err),
            position: Some(tag_start as u64),
        })?;

        attributes.push(XmlAttribute {
            name,
            prefix,
            value: value.into_owned(),
        });
    }

    Ok(attributes)
}

fn finalize_children(children: Vec<XmlChild>) -> XmlChildren {
    if children.is_empty() {
        return XmlChildren::Empty;
    }

    let all_elements = children.iter().all(|c| matches!(c, XmlChild::Element(_)));
    let all_text = children.iter().all(|c| matches!(c, XmlChild::Text(_)));

    if all_elements {
        let elements = children
            .into_iter()
            .filter_map(|c| match c {
                XmlChild::Element(e) => Some(e),
                XmlChild::Text(_) => None,
            })
            .collect();
        XmlChildren::Elements(elements)
    } else if all_text {
        // Text split around CDATA sections is merged back together
        let text = children
            .into_iter()
            .filter_map(|c| match c {
                XmlChild::Text(t) => Some(t),
                XmlChild::Element(_) => None,
            })
            .collect();
        XmlChildren::Text(text)
    } else {
        XmlChildren::Mixed(children)
    }
}

//! Core types for XML data documents.

/// A parsed XML document.
#[derive(Debug, Clone)]
pub struct XmlDocument {
    /// The root element of the document.
    pub root: XmlElement,

    /// Length of the source in bytes.
    pub source_len: usize,
}

/// An XML element.
///
/// Tracks the element name, attributes and children, plus the byte offset of
/// its start tag for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement {
    /// The local name of the element (without namespace prefix).
    pub name: String,

    /// Namespace prefix, if any (e.g., "ns1" in `<ns1:Company>`).
    pub prefix: Option<String>,

    /// Attributes of this element, in document order.
    pub attributes: Vec<XmlAttribute>,

    /// Child content of this element.
    pub children: XmlChildren,

    /// Byte offset of the `<` that opens this element.
    pub offset: usize,
}

/// An XML attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlAttribute {
    /// The local name of the attribute (without namespace prefix).
    pub name: String,

    /// Namespace prefix, if any.
    pub prefix: Option<String>,

    /// The attribute value (after unescaping XML entities).
    pub value: String,
}

/// Children of an XML element.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlChildren {
    /// Element contains only child elements.
    Elements(Vec<XmlElement>),

    /// Element contains only text content.
    Text(String),

    /// Element contains mixed content (text and elements).
    Mixed(Vec<XmlChild>),

    /// Element is empty (no content).
    Empty,
}

/// A single child in mixed content.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlChild {
    /// A child element.
    Element(XmlElement),

    /// Text content.
    Text(String),
}

impl XmlElement {
    /// Create a new empty element.
    pub fn new(name: impl Into<String>, prefix: Option<String>, attributes: Vec<XmlAttribute>) -> Self {
        Self {
            name: name.into(),
            prefix,
            attributes,
            children: XmlChildren::Empty,
            offset: 0,
        }
    }

    /// Replace the content of this element.
    pub fn with_children(mut self, children: XmlChildren) -> Self {
        self.children = children;
        self
    }

    /// Get an attribute value by local name.
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Whether an attribute is a namespace declaration (`xmlns` or `xmlns:*`).
    pub fn is_namespace_declaration(attribute: &XmlAttribute) -> bool {
        attribute.prefix.as_deref() == Some("xmlns")
            || (attribute.prefix.is_none() && attribute.name == "xmlns")
    }

    /// Check if this element has child elements.
    pub fn has_elements(&self) -> bool {
        !self.all_children().is_empty()
    }

    /// Check if this element is empty.
    pub fn is_empty(&self) -> bool {
        matches!(&self.children, XmlChildren::Empty)
    }

    /// Get text content, if this element contains only text.
    pub fn text(&self) -> Option<&str> {
        match &self.children {
            XmlChildren::Text(content) => Some(content),
            _ => None,
        }
    }

    /// Concatenated text of this element and all its descendants, in
    /// document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.children {
            XmlChildren::Text(content) => out.push_str(content),
            XmlChildren::Elements(elements) => {
                for element in elements {
                    element.collect_text(out);
                }
            }
            XmlChildren::Mixed(children) => {
                for child in children {
                    match child {
                        XmlChild::Element(element) => element.collect_text(out),
                        XmlChild::Text(text) => out.push_str(text),
                    }
                }
            }
            XmlChildren::Empty => {}
        }
    }

    /// Get child elements by local name.
    pub fn get_children(&self, name: &str) -> Vec<&XmlElement> {
        self.all_children()
            .into_iter()
            .filter(|e| e.name == name)
            .collect()
    }

    /// Get all child elements (ignoring text in mixed content).
    pub fn all_children(&self) -> Vec<&XmlElement> {
        match &self.children {
            XmlChildren::Elements(elements) => elements.iter().collect(),
            XmlChildren::Mixed(children) => children
                .iter()
                .filter_map(|c| match c {
                    XmlChild::Element(e) => Some(e),
                    XmlChild::Text(_) => None,
                })
                .collect(),
            _ => vec![],
        }
    }

    /// Find the first element reached by following local names.
    ///
    /// `"a/b"` starts below this element; a leading `/` anchors the first
    /// step at this element itself, so `"/Response/Company"` only matches
    /// when this element is named `Response`.
    pub fn find_path(&self, path: &str) -> Option<&XmlElement> {
        let (mut current, rest) = match path.strip_prefix('/') {
            Some(anchored) => {
                let mut steps = anchored.splitn(2, '/');
                let first = steps.next().unwrap_or_default();
                if first != self.name {
                    return None;
                }
                (self, steps.next().unwrap_or_default())
            }
            None => (self, path),
        };

        for step in rest.split('/').filter(|s| !s.is_empty()) {
            current = current.all_children().into_iter().find(|e| e.name == step)?;
        }
        Some(current)
    }
}

impl XmlAttribute {
    /// Create a new attribute.
    pub fn new(name: impl Into<String>, prefix: Option<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str, text: &str) -> XmlElement {
        XmlElement::new(name, None, vec![]).with_children(XmlChildren::Text(text.to_string()))
    }

    #[test]
    fn test_element_get_attribute() {
        let element = XmlElement::new("test", None, vec![XmlAttribute::new("name", None, "value")]);

        assert_eq!(element.get_attribute("name"), Some("value"));
        assert_eq!(element.get_attribute("missing"), None);
    }

    #[test]
    fn test_namespace_declarations() {
        assert!(XmlElement::is_namespace_declaration(&XmlAttribute::new(
            "xmlns", None, "urn:a"
        )));
        assert!(XmlElement::is_namespace_declaration(&XmlAttribute::new(
            "ns1",
            Some("xmlns".to_string()),
            "urn:a"
        )));
        assert!(!XmlElement::is_namespace_declaration(&XmlAttribute::new(
            "lang",
            Some("xml".to_string()),
            "en"
        )));
    }

    #[test]
    fn test_text_content_concatenates_descendants() {
        let parent = XmlElement::new("p", None, vec![]).with_children(XmlChildren::Mixed(vec![
            XmlChild::Text("a".to_string()),
            XmlChild::Element(leaf("b", "b")),
            XmlChild::Text("c".to_string()),
        ]));

        assert_eq!(parent.text_content(), "abc");
        assert_eq!(parent.text(), None);
        assert_eq!(parent.all_children().len(), 1);
    }

    #[test]
    fn test_find_path() {
        let inner = XmlElement::new("Inner", None, vec![])
            .with_children(XmlChildren::Elements(vec![leaf("Leaf", "x")]));
        let root = XmlElement::new("Root", None, vec![])
            .with_children(XmlChildren::Elements(vec![leaf("Other", "y"), inner]));

        assert_eq!(root.find_path("Inner/Leaf").and_then(|e| e.text()), Some("x"));
        assert_eq!(root.find_path("/Root/Other").and_then(|e| e.text()), Some("y"));
        assert_eq!(root.find_path("/Root").map(|e| e.name.as_str()), Some("Root"));
        assert!(root.find_path("/Wrong/Other").is_none());
        assert!(root.find_path("Inner/Missing").is_none());
        assert_eq!(root.find_path("").map(|e| e.name.as_str()), Some("Root"));
    }
}

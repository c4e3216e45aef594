/*
 * data.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Data documents as seen by the matcher.
//!
//! The matcher only needs names, values and children of data nodes, so it
//! works against the [`DataNode`] trait rather than a concrete document
//! type. [`XmlElement`] implements it.

use std::collections::HashMap;

use regdoc_xml::XmlElement;

/// Read-only view of one element of a data document.
pub trait DataNode {
    /// Name without namespace prefix.
    fn local_name(&self) -> &str;

    /// The node's own value, if it has one. Elements usually do not.
    fn value(&self) -> Option<&str>;

    /// Concatenated text of the node and all its descendants.
    fn text_content(&self) -> String;

    /// Attributes as `(local name, value)` pairs, in document order.
    fn attributes(&self) -> Vec<(&str, &str)>;

    /// Child elements, in document order.
    fn element_children(&self) -> Vec<&Self>;
}

impl DataNode for XmlElement {
    fn local_name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> Option<&str> {
        None
    }

    fn text_content(&self) -> String {
        XmlElement::text_content(self)
    }

    fn attributes(&self) -> Vec<(&str, &str)> {
        self.attributes
            .iter()
            .filter(|a| !XmlElement::is_namespace_declaration(a))
            .map(|a| (a.name.as_str(), a.value.as_str()))
            .collect()
    }

    fn element_children(&self) -> Vec<&Self> {
        self.all_children()
    }
}

/// A data item a schema rule matched: an attribute or an element.
#[derive(Debug)]
pub enum DataMatch<'a, N> {
    Attribute { name: &'a str, value: &'a str },
    Element(&'a N),
}

impl<N> Clone for DataMatch<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for DataMatch<'_, N> {}

impl<'a, N: DataNode> DataMatch<'a, N> {
    pub fn local_name(&self) -> &'a str {
        match *self {
            DataMatch::Attribute { name, .. } => name,
            DataMatch::Element(node) => node.local_name(),
        }
    }

    /// The value shown for this item: the attribute value, or the element's
    /// own value falling back to its text content.
    pub fn raw_value(&self) -> String {
        match self {
            DataMatch::Attribute { value, .. } => (*value).to_string(),
            DataMatch::Element(node) => node
                .value()
                .map_or_else(|| node.text_content(), str::to_string),
        }
    }

    /// Group this item's children by local name.
    ///
    /// Elements are grouped in document order. Each attribute forms a
    /// one-item group that replaces any element group of the same name.
    /// Attributes have no children.
    pub fn group_children(&self) -> DataGroups<'a, N> {
        let mut groups: HashMap<&'a str, Vec<DataMatch<'a, N>>> = HashMap::new();

        if let DataMatch::Element(node) = *self {
            for child in node.element_children() {
                groups
                    .entry(child.local_name())
                    .or_default()
                    .push(DataMatch::Element(child));
            }
            for (name, value) in node.attributes() {
                groups.insert(name, vec![DataMatch::Attribute { name, value }]);
            }
        }

        DataGroups { groups }
    }
}

/// Children of a data item grouped by local name.
#[derive(Debug)]
pub struct DataGroups<'a, N> {
    groups: HashMap<&'a str, Vec<DataMatch<'a, N>>>,
}

impl<'a, N> DataGroups<'a, N> {
    /// Items named `name`, in document order; empty when there are none.
    pub fn get(&self, name: &str) -> &[DataMatch<'a, N>] {
        self.groups.get(name).map_or(&[], Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(xml: &str) -> XmlElement {
        regdoc_xml::parse(xml).unwrap().root
    }

    #[test]
    fn test_groups_preserve_document_order() {
        let root = element("<p><Phone>1</Phone><Email>e</Email><Phone>2</Phone><Phone>3</Phone></p>");
        let groups = DataMatch::Element(&root).group_children();

        let phones: Vec<String> = groups.get("Phone").iter().map(DataMatch::raw_value).collect();
        assert_eq!(phones, vec!["1", "2", "3"]);
        assert_eq!(groups.get("Email").len(), 1);
        assert!(groups.get("Fax").is_empty());
        assert!(!groups.contains("Fax"));
    }

    #[test]
    fn test_attribute_overrides_element_group() {
        let root = element(r#"<p code="attr"><code>elem1</code><code>elem2</code></p>"#);
        let groups = DataMatch::Element(&root).group_children();

        let codes = groups.get("code");
        assert_eq!(codes.len(), 1);
        assert!(matches!(codes[0], DataMatch::Attribute { value: "attr", .. }));
    }

    #[test]
    fn test_namespace_declarations_are_not_data() {
        let root = element(r#"<ns1:p xmlns:ns1="urn:x" xmlns="urn:y" id="1"/>"#);
        assert_eq!(root.attributes(), vec![("id", "1")]);

        let groups = DataMatch::Element(&root).group_children();
        assert!(groups.get("ns1").is_empty());
        assert!(groups.get("xmlns").is_empty());
    }

    #[test]
    fn test_element_value_falls_back_to_text() {
        let root = element("<Address><Region>Moscow</Region><Street>Tverskaya</Street></Address>");
        let item = DataMatch::Element(&root);
        assert_eq!(item.raw_value(), "MoscowTverskaya");
        assert_eq!(item.local_name(), "Address");
    }

    #[test]
    fn test_attribute_has_no_children() {
        let item: DataMatch<'_, XmlElement> = DataMatch::Attribute {
            name: "id",
            value: "1",
        };
        assert!(item.group_children().is_empty());
        assert_eq!(item.raw_value(), "1");
    }
}

/*
 * outline.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! A serializable outline of a schema tree, for inspecting layout files.

use serde::Serialize;

use crate::node::SchemaNode;

/// Outline of one schema node with its full data path.
///
/// Containers list their params and children; leaves only carry a path
/// and a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaOutline {
    /// `/`-joined field paths from the root down to this node.
    pub path: String,
    pub name: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<SchemaOutline>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<SchemaOutline>>,
}

impl SchemaOutline {
    /// Outline a schema tree starting at `node`.
    pub fn new(node: &SchemaNode) -> Self {
        Self::with_parent_path(node, "")
    }

    fn with_parent_path(node: &SchemaNode, parent_path: &str) -> Self {
        let path = format!("{}/{}", parent_path, node.field_path);
        let nested = |nodes: &[SchemaNode]| {
            nodes
                .iter()
                .map(|n| Self::with_parent_path(n, &path))
                .collect::<Vec<_>>()
        };

        let (params, children) = if node.is_container {
            (Some(nested(&node.params)), Some(nested(&node.children)))
        } else {
            (None, None)
        };

        Self {
            name: node.display_name.clone(),
            required: node.is_required,
            type_tag: node.type_tag.clone(),
            params,
            children,
            path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::RuleRow;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_outline_paths() {
        let mut company = SchemaNode::from_row(&RuleRow::container("1", "Company", "Company", true));
        company.push(SchemaNode::from_row(
            &RuleRow::leaf("1.1", "IssueDate", "Issue date", false).with_type_tag("date"),
        ));
        let mut root = SchemaNode::root("Response", "root");
        root.push(company);

        let outline = SchemaOutline::new(&root);
        let json = serde_json::to_value(&outline).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "path": "/Response",
                "name": "root",
                "required": true,
                "params": [],
                "children": [{
                    "path": "/Response/Company",
                    "name": "Company",
                    "required": true,
                    "params": [{
                        "path": "/Response/Company/IssueDate",
                        "name": "Issue date",
                        "type": "date"
                    }],
                    "children": []
                }]
            })
        );
    }
}

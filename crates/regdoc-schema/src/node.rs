/*
 * node.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Schema tree nodes.

use serde::Serialize;

use crate::row::RuleRow;

/// One node of the layout schema tree.
///
/// Containers hold leaf rules in `params` (rendered as rows of their own
/// section) and nested containers in `children` (rendered as subsections).
/// A leaf always has empty `params` and `children`.
///
/// Each node is owned by exactly one parent. Nodes that reuse a type
/// template hold their own deep copy of the template content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaNode {
    pub field_path: String,
    pub display_name: String,
    pub is_container: bool,
    pub is_required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_tag: Option<String>,
    pub params: Vec<SchemaNode>,
    pub children: Vec<SchemaNode>,

    /// Rule table line the node was declared on (0 for the synthetic root).
    #[serde(skip)]
    pub line: usize,

    /// Set only on the synthetic root created by [`SchemaNode::root`].
    #[serde(skip)]
    pub is_root: bool,
}

impl SchemaNode {
    /// The synthetic root: a required container with no content.
    pub fn root(field_path: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            field_path: field_path.into(),
            display_name: display_name.into(),
            is_container: true,
            is_required: true,
            type_tag: None,
            params: Vec::new(),
            children: Vec::new(),
            line: 0,
            is_root: true,
        }
    }

    /// Create a node without content from a rule row.
    pub fn from_row(row: &RuleRow) -> Self {
        Self {
            field_path: row.field_path.clone(),
            display_name: row.display_name.clone(),
            is_container: row.is_container,
            is_required: row.is_required,
            type_tag: row.type_tag.clone(),
            params: Vec::new(),
            children: Vec::new(),
            line: row.line,
            is_root: false,
        }
    }

    /// Append a node to `params` or `children` depending on its kind.
    pub fn push(&mut self, node: SchemaNode) {
        if node.is_container {
            self.children.push(node);
        } else {
            self.params.push(node);
        }
    }

    /// Whether the node declares no content of its own.
    pub fn has_no_content(&self) -> bool {
        self.params.is_empty() && self.children.is_empty()
    }

    /// Direct content in declaration order, params and children interleaved
    /// by source line.
    pub fn members(&self) -> Vec<&SchemaNode> {
        let mut members: Vec<&SchemaNode> = self.params.iter().chain(&self.children).collect();
        // Stable, so copies of a template keep their relative order
        members.sort_by_key(|node| node.line);
        members
    }

    /// Depth-first pre-order traversal, starting with this node.
    pub fn pre_order(&self) -> Vec<&SchemaNode> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.members().into_iter().rev());
        }
        out
    }

    /// Number of nodes below this one.
    pub fn descendant_count(&self) -> usize {
        self.params.len()
            + self
                .children
                .iter()
                .map(|child| 1 + child.descendant_count())
                .sum::<usize>()
    }

    /// Maximum container nesting below this node (0 for a node without
    /// children).
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.depth())
            .max()
            .unwrap_or(0)
    }
}

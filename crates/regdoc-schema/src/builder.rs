/*
 * builder.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Schema tree construction from flat rule rows.
//!
//! Rows arrive in table order with nesting implied by their index depth.
//! The builder keeps an explicit stack of open nodes; a row closes every
//! open node at its own level or deeper and then opens beneath the
//! remaining top. Closing a node resolves its type tag against the
//! [`TypeTemplates`] table and attaches it to its parent, so nested
//! templates are registered before the containers enclosing them.

use std::collections::HashMap;

use crate::error::SchemaStructureError;
use crate::node::SchemaNode;
use crate::options::SchemaOptions;
use crate::row::RuleRow;

/// Build a schema tree under the default synthetic root.
///
/// # Errors
///
/// Returns [`SchemaStructureError`] when a row has no index, skips a
/// nesting level, or is nested below a leaf.
pub fn build(rows: &[RuleRow]) -> Result<SchemaNode, SchemaStructureError> {
    build_with_options(rows, &SchemaOptions::default())
}

/// Build a schema tree whose root is named by `options`.
pub fn build_with_options(
    rows: &[RuleRow],
    options: &SchemaOptions,
) -> Result<SchemaNode, SchemaStructureError> {
    let mut builder = SchemaBuilder::new(SchemaNode::root(
        options.root_path.as_str(),
        options.root_name.as_str(),
    ));
    for row in rows {
        builder.push_row(row)?;
    }
    let root = builder.finish();
    tracing::debug!(
        nodes = root.descendant_count(),
        depth = root.depth(),
        "Built schema tree"
    );
    Ok(root)
}

/// Type tags mapped to the first container declared with them.
#[derive(Debug, Default)]
pub struct TypeTemplates {
    templates: HashMap<String, SchemaNode>,
}

impl TypeTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    /// The template registered for a tag, if any.
    pub fn get(&self, tag: &str) -> Option<&SchemaNode> {
        self.templates.get(tag)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Resolve a closed node's type tag.
    ///
    /// An unseen tag registers the node as its template. A seen tag fills a
    /// node without inline content with copies of the template's content; a
    /// node with inline content keeps it and the template is left alone.
    /// A leaf can register a tag but never inherits one.
    pub fn resolve(&mut self, node: &mut SchemaNode) {
        let Some(tag) = node.type_tag.as_deref() else {
            return;
        };

        match self.templates.get(tag) {
            None => {
                tracing::debug!(tag, line = node.line, "Registered type template");
                self.templates.insert(tag.to_string(), node.clone());
            }
            Some(template) if node.is_container && node.has_no_content() => {
                tracing::debug!(
                    tag,
                    line = node.line,
                    template_line = template.line,
                    "Expanded type template"
                );
                node.params = template.params.clone();
                node.children = template.children.clone();
            }
            Some(_) => {}
        }
    }
}

/// A row whose content is still being collected.
#[derive(Debug)]
struct OpenNode {
    node: SchemaNode,
    level: usize,
    index: String,
}

/// Incremental schema tree builder.
#[derive(Debug)]
pub struct SchemaBuilder {
    root: SchemaNode,
    stack: Vec<OpenNode>,
    templates: TypeTemplates,
}

impl SchemaBuilder {
    pub fn new(root: SchemaNode) -> Self {
        Self {
            root,
            stack: Vec::new(),
            templates: TypeTemplates::new(),
        }
    }

    /// The type templates registered so far.
    pub fn templates(&self) -> &TypeTemplates {
        &self.templates
    }

    /// Add the next row in table order.
    pub fn push_row(&mut self, row: &RuleRow) -> Result<(), SchemaStructureError> {
        if row.index.trim().is_empty() {
            return Err(SchemaStructureError::MissingIndex { line: row.line });
        }

        let level = row.level();
        while self.stack.last().is_some_and(|open| open.level >= level) {
            self.close_top();
        }

        let expected = match self.stack.last() {
            Some(open) if !open.node.is_container => {
                return Err(SchemaStructureError::ChildOfLeaf {
                    line: row.line,
                    index: row.index.clone(),
                    parent: open.index.clone(),
                });
            }
            Some(open) => open.level + 1,
            None => 0,
        };

        if level != expected {
            return Err(SchemaStructureError::LevelGap {
                line: row.line,
                index: row.index.clone(),
                level,
                expected,
            });
        }

        self.stack.push(OpenNode {
            node: SchemaNode::from_row(row),
            level,
            index: row.index.clone(),
        });
        Ok(())
    }

    /// Close all open rows and return the root.
    pub fn finish(mut self) -> SchemaNode {
        while !self.stack.is_empty() {
            self.close_top();
        }
        self.root
    }

    fn close_top(&mut self) {
        let Some(OpenNode { mut node, .. }) = self.stack.pop() else {
            return;
        };
        self.templates.resolve(&mut node);
        match self.stack.last_mut() {
            Some(parent) => parent.node.push(node),
            None => self.root.push(node),
        }
    }
}

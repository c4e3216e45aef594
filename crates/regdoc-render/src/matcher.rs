/*
 * matcher.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Walks a schema tree and a data tree together.
//!
//! Every container renders into its own [`EmissionBuffer`]. When the
//! branch turns out to have no matching data, an optional container's
//! buffer is dropped (header included), while a required one gets a
//! placeholder row. Only kept branches reach the enclosing sink.

use regdoc_schema::SchemaNode;
use regdoc_xml::XmlElement;

use crate::data::{DataMatch, DataNode};
use crate::dates::DateFormatter;
use crate::error::{InvariantViolation, RenderResult};
use crate::options::RenderOptions;
use crate::sink::{EmissionBuffer, EmissionSink};
use crate::style::HeaderStyle;

/// State of one render pass over one data document.
///
/// The schema tree is only borrowed, so several passes can share it. Row
/// sequence numbers run across the whole pass.
pub struct RenderPass<'a> {
    options: &'a RenderOptions,
    dates: &'a dyn DateFormatter,
    sequence: usize,
    violations: Vec<InvariantViolation>,
}

impl<'a> RenderPass<'a> {
    pub fn new(options: &'a RenderOptions, dates: &'a dyn DateFormatter) -> Self {
        Self {
            options,
            dates,
            sequence: 0,
            violations: Vec::new(),
        }
    }

    /// Number of rows emitted so far.
    pub fn sequence(&self) -> usize {
        self.sequence
    }

    /// Violations logged during the pass, oldest first.
    pub fn violations(&self) -> &[InvariantViolation] {
        &self.violations
    }

    /// Render one schema branch at `depth` against an optional data item.
    ///
    /// Returns whether the branch produced output, so that callers can prune
    /// empty optional sections.
    pub fn render<N: DataNode>(
        &mut self,
        rule: Option<&SchemaNode>,
        data: Option<DataMatch<'_, N>>,
        depth: usize,
        sink: &mut dyn EmissionSink,
    ) -> bool {
        self.render_branch(rule, data, Some(depth), sink)
    }

    /// Render a whole document: the root itself gets no header and its
    /// top-level content renders at depth 0.
    pub fn render_document<N: DataNode>(
        &mut self,
        root: &SchemaNode,
        data: &N,
        sink: &mut dyn EmissionSink,
    ) -> bool {
        tracing::debug!(root = %root.field_path, data = data.local_name(), "Rendering document");
        self.render_branch(Some(root), Some(DataMatch::Element(data)), None, sink)
    }

    /// `depth` is `None` for a headerless root.
    fn render_branch<N: DataNode>(
        &mut self,
        rule: Option<&SchemaNode>,
        data: Option<DataMatch<'_, N>>,
        depth: Option<usize>,
        sink: &mut dyn EmissionSink,
    ) -> bool {
        let Some(rule) = rule else {
            self.violation(InvariantViolation::MissingRule {
                depth: depth.unwrap_or(0),
            });
            return false;
        };

        if depth.is_some_and(|d| d > self.options.max_depth) {
            self.violation(InvariantViolation::DepthLimit {
                field_path: rule.field_path.clone(),
                limit: self.options.max_depth,
            });
            return false;
        }

        let Some(item) = data else {
            if !rule.is_required {
                return false;
            }
            if let Some(depth) = depth {
                let style = HeaderStyle::for_depth(depth, sink.max_style_level());
                sink.emit_section_header(&rule.display_name, style);
            }
            sink.emit_placeholder_row(&self.options.placeholder);
            return true;
        };

        // Leaf values are rendered as rows by their container
        if !rule.is_container {
            return false;
        }
        if rule.is_root && rule.has_no_content() {
            return false;
        }

        let groups = item.group_children();
        let mut branch = EmissionBuffer::new(sink.max_style_level());
        if let Some(depth) = depth {
            let style = HeaderStyle::for_depth(depth, branch.max_style_level());
            branch.emit_section_header(&rule.display_name, style);
        }

        let mut any_content = false;

        for param in &rule.params {
            for found in groups.get(&param.field_path) {
                any_content = true;
                self.sequence += 1;
                let value = self.normalize(param, found.raw_value());
                branch.emit_row(self.sequence, &param.display_name, &value);
            }
        }

        let child_depth = depth.map_or(0, |d| d + 1);
        for child in &rule.children {
            let found = groups.get(&child.field_path);
            if found.is_empty() {
                self.render_branch::<N>(Some(child), None, Some(child_depth), &mut branch);
                continue;
            }
            any_content = true;
            for matched in found {
                self.render_branch(Some(child), Some(*matched), Some(child_depth), &mut branch);
            }
        }

        if !any_content {
            if !rule.is_required {
                tracing::debug!(field = %rule.field_path, "Pruned empty optional branch");
                return false;
            }
            branch.emit_placeholder_row(&self.options.placeholder);
        }

        branch.replay_into(sink);
        true
    }

    fn normalize(&self, param: &SchemaNode, value: String) -> String {
        if self.options.is_date_tag(param.type_tag.as_deref()) {
            self.dates.reformat(
                &self.options.source_date_format,
                &self.options.display_date_format,
                &value,
            )
        } else {
            value
        }
    }

    fn violation(&mut self, violation: InvariantViolation) {
        tracing::error!(%violation, "Skipping branch");
        self.violations.push(violation);
    }
}

/// Parse an XML document and render it against `schema` in a fresh pass.
pub fn render_xml(
    schema: &SchemaNode,
    xml: &str,
    options: &RenderOptions,
    dates: &dyn DateFormatter,
    sink: &mut dyn EmissionSink,
) -> RenderResult<bool> {
    let document = regdoc_xml::parse(xml)?;
    let mut pass = RenderPass::new(options, dates);
    Ok(pass.render_document::<XmlElement>(schema, &document.root, sink))
}

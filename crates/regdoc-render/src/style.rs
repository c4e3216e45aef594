/*
 * style.rs
 * Copyright (c) 2025 Posit, PBC
 */

use serde::Serialize;

/// How a section header is styled.
///
/// Depth 0 sections use the document title style, depth 1 the section
/// style, and deeper sections one of the nested styles the sink supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderStyle {
    Title,
    Section,
    Nested(usize),
}

impl HeaderStyle {
    /// Style for a section at `depth`, with nested levels clamped to
    /// `max_style_level`.
    pub fn for_depth(depth: usize, max_style_level: usize) -> Self {
        match depth {
            0 => HeaderStyle::Title,
            1 => HeaderStyle::Section,
            _ => HeaderStyle::Nested((depth - 1).min(max_style_level)),
        }
    }

    /// Numeric style level: 0 for the title, 1 for sections, then nested.
    pub fn level(&self) -> usize {
        match self {
            HeaderStyle::Title => 0,
            HeaderStyle::Section => 1,
            HeaderStyle::Nested(level) => level + 1,
        }
    }
}

/*
 * row.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Flat rule rows, one per line of a layout file.

/// A single row of the rule table.
///
/// Rows are immutable inputs to [`crate::build`]. Nesting is implied by the
/// number of dot separators in [`RuleRow::index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleRow {
    /// Dot-separated hierarchical position, e.g. `"2.1.3"`.
    pub index: String,

    /// Name or attribute this rule matches in the data tree.
    pub field_path: String,

    /// Label shown in the rendered document.
    pub display_name: String,

    pub is_container: bool,
    pub is_required: bool,

    /// Reusable type identifier, taken from `<...>` in the description.
    pub type_tag: Option<String>,

    /// 1-based record number in the source table.
    pub line: usize,
}

impl RuleRow {
    /// Create a leaf row.
    pub fn leaf(index: &str, field_path: &str, display_name: &str, is_required: bool) -> Self {
        Self {
            index: index.to_string(),
            field_path: field_path.to_string(),
            display_name: display_name.to_string(),
            is_container: false,
            is_required,
            type_tag: None,
            line: 0,
        }
    }

    /// Create a container row.
    pub fn container(index: &str, field_path: &str, display_name: &str, is_required: bool) -> Self {
        Self {
            is_container: true,
            ..Self::leaf(index, field_path, display_name, is_required)
        }
    }

    /// Attach a type tag.
    pub fn with_type_tag(mut self, tag: &str) -> Self {
        self.type_tag = Some(tag.to_string());
        self
    }

    /// Set the source line.
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    /// Nesting depth: the number of dot separators in the index.
    ///
    /// Trailing dots do not count, so `"1."` and `"1"` are both top level.
    pub fn level(&self) -> usize {
        index_level(&self.index)
    }
}

/// Nesting depth of a hierarchical index.
pub fn index_level(index: &str) -> usize {
    index.trim().trim_end_matches('.').matches('.').count()
}

/// Extract the type tag embedded in a free-text description.
///
/// The tag is the text between the first `<` and the first `>` after it.
/// A missing delimiter or an empty `<>` yields `None`.
pub fn extract_type_tag(description: &str) -> Option<String> {
    let start = description.find('<')? + 1;
    let len = description[start..].find('>')?;
    let tag = description[start..start + len].trim();
    (!tag.is_empty()).then(|| tag.to_string())
}

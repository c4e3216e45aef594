/*
 * options.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Options controlling how rule tables are read.

use serde::Deserialize;

/// How a rule table is tokenized and decoded.
///
/// The defaults describe the registry layout files: comma separated, no
/// header row, `О` marking required fields and `С` marking containers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SchemaOptions {
    /// Leading character of the required column that marks a required field.
    pub required_marker: char,

    /// Leading character of the container column that marks a container.
    pub container_marker: char,

    /// Field delimiter.
    pub delimiter: char,

    /// Whether the first record is a header to skip.
    pub has_header: bool,

    /// Field path of the synthetic root.
    pub root_path: String,

    /// Display name of the synthetic root.
    pub root_name: String,
}

impl Default for SchemaOptions {
    fn default() -> Self {
        Self {
            required_marker: 'О',
            container_marker: 'С',
            delimiter: ',',
            has_header: false,
            root_path: "Response".to_string(),
            root_name: "root".to_string(),
        }
    }
}

impl SchemaOptions {
    /// Whether a required-column value marks the field as required.
    pub fn is_required(&self, column: &str) -> bool {
        column.trim_start().starts_with(self.required_marker)
    }

    /// Whether a container-column value marks the field as a container.
    pub fn is_container(&self, column: &str) -> bool {
        column.trim_start().starts_with(self.container_marker)
    }
}

/*
 * options.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Options for a render pass.

use serde::Deserialize;

/// Text and formats used while matching.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RenderOptions {
    /// Row shown for required fields that have no data.
    pub placeholder: String,

    /// Type tags containing this text mark date values.
    pub date_tag: String,

    /// strftime pattern of dates in data documents.
    pub source_date_format: String,

    /// strftime pattern of dates in rendered output.
    pub display_date_format: String,

    /// Deepest schema nesting a pass will follow.
    pub max_depth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            placeholder: "Сведения не найдены".to_string(),
            date_tag: "date".to_string(),
            source_date_format: "%Y-%m-%d".to_string(),
            display_date_format: "%d.%m.%Y".to_string(),
            max_depth: 64,
        }
    }
}

impl RenderOptions {
    /// Whether values of a field with this type tag are dates.
    pub fn is_date_tag(&self, type_tag: Option<&str>) -> bool {
        !self.date_tag.is_empty() && type_tag.is_some_and(|tag| tag.contains(&self.date_tag))
    }
}

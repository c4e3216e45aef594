/*
 * output.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Writers for rendered documents
 */

//! Text and JSON output of rendered documents.

use anyhow::Result;
use regdoc_render::{Emission, EmissionSink, HeaderStyle};
use serde::Serialize;

use crate::config::OutputStyle;

/// The emissions of one data document.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedDocument {
    pub source: String,
    pub rows: usize,
    pub emissions: Vec<Emission>,
}

/// Text sink laying rows out as a `№ | name | value` table.
pub struct TextTable {
    width: usize,
    max_style_level: usize,
    /// Lines per emission, so an emission can be retracted as a whole.
    blocks: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new(style: &OutputStyle) -> Self {
        Self {
            width: style.width,
            max_style_level: style.max_style_level,
            blocks: Vec::new(),
        }
    }

    pub fn finish(self) -> String {
        let mut out = row_line("№", "Field", "Value");
        out.push('\n');
        for line in self.blocks.iter().flatten() {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

fn row_line(number: &str, name: &str, value: &str) -> String {
    format!("{number:>4} | {name} | {value}")
}

impl EmissionSink for TextTable {
    fn emit_section_header(&mut self, text: &str, style: HeaderStyle) {
        let width = text.chars().count();
        let block = match style {
            HeaderStyle::Title => {
                let pad = self.width.saturating_sub(width) / 2;
                vec![
                    String::new(),
                    format!("{}{}", " ".repeat(pad), text),
                    format!("{}{}", " ".repeat(pad), "=".repeat(width)),
                ]
            }
            HeaderStyle::Section => vec![text.to_string(), "-".repeat(width)],
            HeaderStyle::Nested(level) => vec![format!("{}{}", "  ".repeat(level), text)],
        };
        self.blocks.push(block);
    }

    fn emit_row(&mut self, sequence: usize, name: &str, value: &str) {
        self.blocks.push(vec![row_line(&sequence.to_string(), name, value)]);
    }

    fn emit_placeholder_row(&mut self, text: &str) {
        self.blocks.push(vec![format!("{:>4} | {text}", "")]);
    }

    fn retract_last_emission(&mut self) -> bool {
        self.blocks.pop().is_some()
    }

    fn max_style_level(&self) -> usize {
        self.max_style_level
    }
}

/// Text of all documents, each document's table under its source name.
pub fn to_text(documents: &[RenderedDocument], style: &OutputStyle) -> String {
    let mut out = String::new();
    for (i, document) in documents.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if documents.len() > 1 {
            out.push_str(&format!("[{}]\n", document.source));
        }
        let mut table = TextTable::new(style);
        for emission in &document.emissions {
            emission.replay(&mut table);
        }
        out.push_str(&table.finish());
    }
    out
}

pub fn to_json(documents: &[RenderedDocument]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(documents)?;
    json.push('\n');
    Ok(json)
}

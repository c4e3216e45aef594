/*
 * sink.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Emission sinks: where rendered sections and rows go.

use serde::Serialize;

use crate::style::HeaderStyle;

/// Receiver of rendering instructions.
pub trait EmissionSink {
    fn emit_section_header(&mut self, text: &str, style: HeaderStyle);

    fn emit_row(&mut self, sequence: usize, name: &str, value: &str);

    fn emit_placeholder_row(&mut self, text: &str);

    /// Drop the most recent emission. Returns false when there was none.
    fn retract_last_emission(&mut self) -> bool;

    /// Highest nested header style this sink can show.
    fn max_style_level(&self) -> usize;
}

/// One recorded rendering instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Emission {
    SectionHeader { text: String, style: HeaderStyle },
    Row {
        sequence: usize,
        name: String,
        value: String,
    },
    Placeholder { text: String },
}

impl Emission {
    /// Send this instruction to another sink.
    pub fn replay(&self, sink: &mut dyn EmissionSink) {
        match self {
            Emission::SectionHeader { text, style } => sink.emit_section_header(text, *style),
            Emission::Row {
                sequence,
                name,
                value,
            } => sink.emit_row(*sequence, name, value),
            Emission::Placeholder { text } => sink.emit_placeholder_row(text),
        }
    }
}

/// In-memory sink that records emissions in order.
///
/// The matcher renders each container into a fresh buffer and only
/// replays it into the enclosing sink once the branch is known to be kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmissionBuffer {
    #[serde(skip)]
    max_style_level: usize,
    emissions: Vec<Emission>,
}

impl EmissionBuffer {
    pub fn new(max_style_level: usize) -> Self {
        Self {
            max_style_level,
            emissions: Vec::new(),
        }
    }

    pub fn emissions(&self) -> &[Emission] {
        &self.emissions
    }

    pub fn into_emissions(self) -> Vec<Emission> {
        self.emissions
    }

    pub fn len(&self) -> usize {
        self.emissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emissions.is_empty()
    }

    /// Move everything recorded so far into `sink`, in order.
    pub fn replay_into(self, sink: &mut dyn EmissionSink) {
        for emission in &self.emissions {
            emission.replay(sink);
        }
    }
}

impl EmissionSink for EmissionBuffer {
    fn emit_section_header(&mut self, text: &str, style: HeaderStyle) {
        self.emissions.push(Emission::SectionHeader {
            text: text.to_string(),
            style,
        });
    }

    fn emit_row(&mut self, sequence: usize, name: &str, value: &str) {
        self.emissions.push(Emission::Row {
            sequence,
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    fn emit_placeholder_row(&mut self, text: &str) {
        self.emissions.push(Emission::Placeholder {
            text: text.to_string(),
        });
    }

    fn retract_last_emission(&mut self) -> bool {
        self.emissions.pop().is_some()
    }

    fn max_style_level(&self) -> usize {
        self.max_style_level
    }
}

/*
 * config.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * YAML configuration for the regdoc CLI
 */

//! Configuration file loading.
//!
//! Every key is optional:
//!
//! ```yaml
//! schema:
//!   delimiter: ";"
//!   has-header: true
//! render:
//!   placeholder: "No data"
//! output:
//!   max-style-level: 2
//!   format: json
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use regdoc_render::RenderOptions;
use regdoc_schema::SchemaOptions;
use serde::Deserialize;

/// Complete configuration for one CLI run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    pub schema: SchemaOptions,
    pub render: RenderOptions,
    pub output: OutputStyle,
}

impl Config {
    /// Load configuration from `path`, or the defaults when there is none.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}

/// How rendered documents are written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OutputStyle {
    /// Highest nested header style the output distinguishes.
    pub max_style_level: usize,

    /// Line width used to center document titles in text output.
    pub width: usize,

    pub format: OutputFormat,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            max_style_level: 1,
            width: 80,
            format: OutputFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Numbered three-column table
    #[default]
    Text,
    /// Emission list per document
    Json,
}

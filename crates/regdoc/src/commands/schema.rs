/*
 * schema.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Schema command implementation
 */

//! Print the outline of a layout file as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use regdoc_schema::{SchemaOutline, load_schema};
use tracing::info;

use crate::config::Config;

#[derive(Debug)]
pub struct SchemaArgs {
    pub schema: PathBuf,
    pub config: Option<PathBuf>,
}

pub fn execute(args: SchemaArgs) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;
    let root = load_schema(&args.schema, &config.schema)
        .with_context(|| format!("Failed to load schema {}", args.schema.display()))?;

    info!(
        nodes = root.descendant_count(),
        depth = root.depth(),
        "Loaded schema {}",
        args.schema.display()
    );

    let json = serde_json::to_string_pretty(&SchemaOutline::new(&root))?;
    println!("{json}");
    Ok(())
}

/*
 * render.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Render command implementation
 */

//! Render command implementation.
//!
//! Loads one layout file and renders every data document against it. A
//! document that fails to load is reported and skipped; the remaining
//! documents are still rendered and written, and the command fails at the
//! end.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regdoc_render::{ChronoDates, EmissionBuffer, RenderPass};
use regdoc_schema::{SchemaNode, load_schema};
use tracing::{debug, error, info, warn};

use crate::config::{Config, OutputFormat};
use crate::output::{self, RenderedDocument};

/// Arguments for the render command
#[derive(Debug)]
pub struct RenderArgs {
    /// Layout file
    pub schema: PathBuf,
    /// YAML configuration file
    pub config: Option<PathBuf>,
    /// Path of the element rendered as the root
    pub start: Option<String>,
    /// Overrides the configured output format
    pub format: Option<OutputFormat>,
    /// Output file (stdout when absent)
    pub output: Option<PathBuf>,
    /// Data documents
    pub data: Vec<PathBuf>,
}

/// Execute the render command
pub fn execute(args: RenderArgs) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;
    let schema = load_schema(&args.schema, &config.schema)
        .with_context(|| format!("Failed to load schema {}", args.schema.display()))?;
    debug!(nodes = schema.descendant_count(), "Loaded schema {}", args.schema.display());

    let mut documents = Vec::new();
    let mut error_count = 0;

    for path in &args.data {
        match render_document(path, &schema, &config, args.start.as_deref()) {
            Ok(document) => {
                info!(rows = document.rows, "Rendered {}", path.display());
                documents.push(document);
            }
            Err(e) => {
                error!("{:#}", e);
                error_count += 1;
            }
        }
    }

    let format = args.format.unwrap_or(config.output.format);
    let rendered = match format {
        OutputFormat::Text => output::to_text(&documents, &config.output),
        OutputFormat::Json => output::to_json(&documents)?,
    };

    match &args.output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("Failed to write output file {}", path.display()))?,
        None => print!("{rendered}"),
    }

    info!(
        "Processed {} documents: {} succeeded, {} failed",
        args.data.len(),
        documents.len(),
        error_count
    );

    if error_count > 0 {
        anyhow::bail!("{} of {} documents failed to render", error_count, args.data.len());
    }

    Ok(())
}

/// Render one data document in its own pass.
pub fn render_document(
    path: &Path,
    schema: &SchemaNode,
    config: &Config,
    start: Option<&str>,
) -> Result<RenderedDocument> {
    let document = regdoc_xml::parse_file(path)
        .with_context(|| format!("Failed to load data document {}", path.display()))?;

    let root = match start {
        Some(start) => document.root.find_path(start).with_context(|| {
            format!("Start element `{}` not found in {}", start, path.display())
        })?,
        None => &document.root,
    };

    if root.name != schema.field_path {
        warn!(
            expected = %schema.field_path,
            found = %root.name,
            "Data root does not match schema root in {}",
            path.display()
        );
    }

    let mut sink = EmissionBuffer::new(config.output.max_style_level);
    let mut pass = RenderPass::new(&config.render, &ChronoDates);
    pass.render_document(schema, root, &mut sink);

    if !pass.violations().is_empty() {
        warn!(
            count = pass.violations().len(),
            "Skipped broken schema branches in {}",
            path.display()
        );
    }

    Ok(RenderedDocument {
        source: path.display().to_string(),
        rows: pass.sequence(),
        emissions: sink.into_emissions(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use regdoc_render::Emission;

    fn fixture_path(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("test-fixtures").join(name)
    }

    fn company_schema(config: &Config) -> SchemaNode {
        load_schema(fixture_path("company.csv"), &config.schema).unwrap()
    }

    #[test]
    fn test_render_document() {
        let config = Config::default();
        let schema = company_schema(&config);
        let document = render_document(&fixture_path("company.xml"), &schema, &config, None).unwrap();

        assert_eq!(document.rows, 14);
        assert!(document.source.ends_with("company.xml"));
        assert!(matches!(
            &document.emissions[0],
            Emission::SectionHeader { text, .. } if text == "Company details"
        ));
    }

    #[test]
    fn test_start_path_not_found() {
        let config = Config::default();
        let err = render_document(
            &fixture_path("company.xml"),
            &company_schema(&config),
            &config,
            Some("Company/Missing"),
        )
        .unwrap_err();

        assert!(err.to_string().contains("Start element `Company/Missing` not found"));
    }

    #[test]
    fn test_start_path_selects_root() {
        let config = Config::default();
        let schema = company_schema(&config);
        let mut root = SchemaNode::root("Company", "root");
        root.params = schema.children[0].params.clone();

        let document = render_document(&fixture_path("company.xml"), &root, &config, Some("Company")).unwrap();

        // RegNumber, IssueDate and three phones
        assert_eq!(document.rows, 5);
    }
}

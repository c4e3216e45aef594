/*
 * inspect.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Inspect command implementation
 */

//! Print the element tree of a data document.

use std::path::PathBuf;

use anyhow::{Context, Result};
use regdoc_xml::XmlElement;

#[derive(Debug)]
pub struct InspectArgs {
    pub data: PathBuf,
}

pub fn execute(args: InspectArgs) -> Result<()> {
    let document = regdoc_xml::parse_file(&args.data)
        .with_context(|| format!("Failed to load data document {}", args.data.display()))?;

    print!("{}", element_tree(&document.root));
    Ok(())
}

/// One line per element, indented by depth, with attributes in brackets
/// and text after `=`.
pub fn element_tree(root: &XmlElement) -> String {
    let mut out = String::new();
    write_element(&mut out, root, 0);
    out
}

fn write_element(out: &mut String, element: &XmlElement, depth: usize) {
    out.push_str(&"  ".repeat(depth));
    if let Some(prefix) = &element.prefix {
        out.push_str(prefix);
        out.push(':');
    }
    out.push_str(&element.name);

    let attributes: Vec<String> = element
        .attributes
        .iter()
        .filter(|a| !XmlElement::is_namespace_declaration(a))
        .map(|a| format!("{}: {}", a.name, a.value))
        .collect();
    if !attributes.is_empty() {
        out.push_str(&format!(" [{}]", attributes.join(", ")));
    }

    if let Some(text) = element.text() {
        out.push_str(" = ");
        out.push_str(text.trim());
    }
    out.push('\n');

    for child in element.all_children() {
        write_element(out, child, depth + 1);
    }
}

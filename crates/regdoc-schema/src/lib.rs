/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Layout schema trees built from flat rule tables.
//!
//! A layout file lists one field per row:
//!
//! ```text
//! 1,Company,Company,О,С,
//! 1.1,RegNumber,Registration number,О,П,
//! 1.2,IssueDate,Issue date,Н,П,Date of issue <date>
//! 1.3,Director,Director,Н,С,Person <person>
//! 1.3.1,LastName,Last name,О,П,
//! 1.4,Founder,Founder,Н,С,Person <person>
//! ```
//!
//! The dotted index gives the nesting, the marker columns say whether a
//! field is required and whether it is a container, and a `<tag>` in the
//! description names a reusable type. [`build`] turns the rows into a
//! [`SchemaNode`] tree under a synthetic root; a container declared with a
//! known tag and no rows of its own (like `Founder` above) receives copies
//! of the content of the first container declared with that tag.
//!
//! # Example
//!
//! ```rust
//! use regdoc_schema::{SchemaOptions, build, read_rows_from_str};
//!
//! let rows = read_rows_from_str(
//!     "1,Person,Person,О,С,\n1.1,name,Name,О,П,\n",
//!     &SchemaOptions::default(),
//! ).unwrap();
//! let root = build(&rows).unwrap();
//!
//! assert_eq!(root.children[0].field_path, "Person");
//! assert_eq!(root.children[0].params[0].display_name, "Name");
//! ```

pub mod builder;
pub mod error;
pub mod node;
pub mod options;
pub mod outline;
pub mod reader;
pub mod row;

pub use builder::{SchemaBuilder, TypeTemplates, build, build_with_options};
pub use error::{SchemaError, SchemaResult, SchemaStructureError};
pub use node::SchemaNode;
pub use options::SchemaOptions;
pub use outline::SchemaOutline;
pub use reader::{read_rows, read_rows_from_path, read_rows_from_str};
pub use row::{RuleRow, extract_type_tag, index_level};

/// Read a layout file and build its schema tree.
pub fn load_schema(path: impl AsRef<std::path::Path>, options: &SchemaOptions) -> SchemaResult<SchemaNode> {
    let rows = read_rows_from_path(path, options)?;
    Ok(build_with_options(&rows, options)?)
}

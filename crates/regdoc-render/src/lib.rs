/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Render data documents by following a layout schema.
//!
//! A [`RenderPass`] walks a [`regdoc_schema::SchemaNode`] tree and a data
//! tree side by side and sends section headers and numbered value rows to
//! an [`EmissionSink`]. Optional sections whose data is missing disappear
//! entirely; required ones show a placeholder row.
//!
//! # Example
//!
//! ```rust
//! use regdoc_render::{ChronoDates, Emission, EmissionBuffer, RenderOptions, render_xml};
//! use regdoc_schema::{SchemaOptions, build, read_rows_from_str};
//!
//! let rows = read_rows_from_str(
//!     "1,Person,Person,О,С,\n1.1,name,Name,О,П,\n",
//!     &SchemaOptions::default(),
//! ).unwrap();
//! let schema = build(&rows).unwrap();
//!
//! let mut sink = EmissionBuffer::new(1);
//! render_xml(
//!     &schema,
//!     r#"<Response><Person name="Ann"/></Response>"#,
//!     &RenderOptions::default(),
//!     &ChronoDates,
//!     &mut sink,
//! ).unwrap();
//!
//! assert_eq!(sink.len(), 2);
//! assert!(matches!(&sink.emissions()[1], Emission::Row { sequence: 1, value, .. } if value == "Ann"));
//! ```

pub mod data;
pub mod dates;
pub mod error;
pub mod matcher;
pub mod options;
pub mod sink;
pub mod style;

pub use data::{DataGroups, DataMatch, DataNode};
pub use dates::{ChronoDates, DateFormatter};
pub use error::{InvariantViolation, RenderError, RenderResult};
pub use matcher::{RenderPass, render_xml};
pub use options::RenderOptions;
pub use sink::{Emission, EmissionBuffer, EmissionSink};
pub use style::HeaderStyle;

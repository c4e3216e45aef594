//! XML data documents for regdoc.
//!
//! This crate loads the source documents that regdoc renders. It wraps
//! [`quick-xml`] to build an owned tree of [`XmlElement`]s that the renderer
//! walks in lock-step with a layout schema.
//!
//! # Overview
//!
//! The main types are:
//! - [`XmlDocument`]: The parsed document and its root element
//! - [`XmlElement`]: An element with local name, prefix, attributes and children
//! - [`XmlAttribute`]: An attribute with local name, prefix and unescaped value
//! - [`XmlChildren`]: Element content (elements, text, mixed, or empty)
//!
//! # Example
//!
//! ```rust
//! use regdoc_xml::parse;
//!
//! let doc = parse(r#"<ns1:Response xmlns:ns1="urn:example">
//!   <ns1:Company inn="7701234567">
//!     <ns1:Phone>+7 495 000-00-00</ns1:Phone>
//!   </ns1:Company>
//! </ns1:Response>"#).unwrap();
//!
//! assert_eq!(doc.root.name, "Response");
//! assert_eq!(doc.root.prefix.as_deref(), Some("ns1"));
//!
//! let company = doc.root.find_path("Company").unwrap();
//! assert_eq!(company.get_attribute("inn"), Some("7701234567"));
//! assert_eq!(company.get_children("Phone")[0].text(), Some("+7 495 000-00-00"));
//! ```
//!
//! Names are always split into a local name and an optional prefix. The
//! renderer matches on local names only, so documents using different
//! namespace prefixes for the same vocabulary render identically.

pub mod error;
pub mod parser;
pub mod types;

// Re-export main types
pub use error::{Error, Result};
pub use parser::{parse, parse_file};
pub use types::{XmlAttribute, XmlChild, XmlChildren, XmlDocument, XmlElement};

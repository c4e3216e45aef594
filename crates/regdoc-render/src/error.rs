/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for rendering.

use thiserror::Error;

/// Errors that abort the render of one document.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The data document could not be loaded.
    #[error("Failed to load data document: {0}")]
    DataAccess(#[from] regdoc_xml::Error),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// A broken assumption reached while matching.
///
/// Violations never abort a render: they are logged, the offending branch
/// is skipped, and its siblings render as usual.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// A branch was rendered without a schema rule.
    #[error("No schema rule for branch at depth {depth}")]
    MissingRule { depth: usize },

    /// Schema nesting went past the recursion ceiling.
    #[error("Schema branch `{field_path}` is nested deeper than the limit of {limit}")]
    DepthLimit { field_path: String, limit: usize },
}

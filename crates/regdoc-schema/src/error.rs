/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for rule table loading and schema tree construction.

use thiserror::Error;

/// Malformed nesting in the rule rows.
///
/// These are fatal to the build phase: no schema tree is produced and no
/// rendering starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaStructureError {
    /// A row without a hierarchical index.
    #[error("Row {line}: missing hierarchical index")]
    MissingIndex { line: usize },

    /// A row nested deeper than the open container allows.
    #[error(
        "Row {line}: index `{index}` is at level {level}, but the enclosing container only admits level {expected}"
    )]
    LevelGap {
        line: usize,
        index: String,
        level: usize,
        expected: usize,
    },

    /// A row nested below a leaf row.
    #[error("Row {line}: index `{index}` is nested under `{parent}`, which is not a container")]
    ChildOfLeaf {
        line: usize,
        index: String,
        parent: String,
    },
}

impl SchemaStructureError {
    /// The 1-based rule table row the error refers to.
    pub fn line(&self) -> usize {
        match self {
            SchemaStructureError::MissingIndex { line }
            | SchemaStructureError::LevelGap { line, .. }
            | SchemaStructureError::ChildOfLeaf { line, .. } => *line,
        }
    }
}

/// Errors that can occur while loading a schema file.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The rows do not form a valid tree.
    #[error(transparent)]
    Structure(#[from] SchemaStructureError),

    /// A record with too few columns.
    #[error("Row {line}: expected at least 5 columns, found {found}")]
    MissingColumns { line: usize, found: usize },

    /// The configured delimiter does not fit in one byte.
    #[error("Delimiter {0:?} is not a single-byte character")]
    InvalidDelimiter(char),

    /// The delimited file could not be tokenized.
    #[error("Malformed rule table: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error reading the schema file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

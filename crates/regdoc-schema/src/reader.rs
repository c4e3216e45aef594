/*
 * reader.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Tokenizing delimited layout files into rule rows.
//!
//! Each record carries the columns
//! `[index, field path, display name, required marker, container marker, description]`.
//! The description is optional; the first five columns are not.

use std::io::Read;
use std::path::Path;

use crate::error::{SchemaError, SchemaResult, SchemaStructureError};
use crate::options::SchemaOptions;
use crate::row::{RuleRow, extract_type_tag};

const REQUIRED_COLUMNS: usize = 5;

/// Read rule rows from any reader.
pub fn read_rows<R: Read>(input: R, options: &SchemaOptions) -> SchemaResult<Vec<RuleRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter_byte(options.delimiter)?)
        .has_headers(options.has_header)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map_or(idx + 1, |position| position.line() as usize);

        if record.len() < REQUIRED_COLUMNS {
            return Err(SchemaError::MissingColumns {
                line,
                found: record.len(),
            });
        }

        let column = |i: usize| record.get(i).unwrap_or_default();
        if column(0).is_empty() {
            return Err(SchemaStructureError::MissingIndex { line }.into());
        }

        rows.push(RuleRow {
            index: column(0).to_string(),
            field_path: column(1).to_string(),
            display_name: column(2).to_string(),
            is_required: options.is_required(column(3)),
            is_container: options.is_container(column(4)),
            type_tag: extract_type_tag(column(5)),
            line,
        });
    }

    tracing::debug!(rows = rows.len(), "Read rule table");
    Ok(rows)
}

/// Read rule rows from a string.
pub fn read_rows_from_str(content: &str, options: &SchemaOptions) -> SchemaResult<Vec<RuleRow>> {
    read_rows(content.as_bytes(), options)
}

/// Read rule rows from a file.
pub fn read_rows_from_path(path: impl AsRef<Path>, options: &SchemaOptions) -> SchemaResult<Vec<RuleRow>> {
    let file = std::fs::File::open(path.as_ref())?;
    read_rows(std::io::BufReader::new(file), options)
}

fn delimiter_byte(delimiter: char) -> SchemaResult<u8> {
    u8::try_from(delimiter).map_err(|_| SchemaError::InvalidDelimiter(delimiter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_rows() {
        let rows = read_rows_from_str(
            "1,Company,Company,О,С,\n\
             1.1,RegNumber,Registration number,О,П,\n\
             1.2,IssueDate,Issue date,Н,П,Date of issue <date>\n",
            &SchemaOptions::default(),
        )
        .unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            RuleRow::container("1", "Company", "Company", true).at_line(1)
        );
        assert_eq!(
            rows[1],
            RuleRow::leaf("1.1", "RegNumber", "Registration number", true).at_line(2)
        );
        assert_eq!(
            rows[2],
            RuleRow::leaf("1.2", "IssueDate", "Issue date", false)
                .with_type_tag("date")
                .at_line(3)
        );
    }

    #[test]
    fn test_quoted_fields_and_missing_description() {
        let rows = read_rows_from_str(
            "1,Name,\"Name, full\",О,П\n2,Note,\"He said \"\"hi\"\"\",Н,П,\"text, <str>\"\n",
            &SchemaOptions::default(),
        )
        .unwrap();

        assert_eq!(rows[0].display_name, "Name, full");
        assert_eq!(rows[0].type_tag, None);
        assert_eq!(rows[1].display_name, "He said \"hi\"");
        assert_eq!(rows[1].type_tag.as_deref(), Some("str"));
    }

    #[test]
    fn test_header_and_delimiter_options() {
        let options = SchemaOptions {
            delimiter: ';',
            has_header: true,
            ..SchemaOptions::default()
        };
        let rows = read_rows_from_str(
            "№;Path;Name;Req;Kind;Description\n1;Company;Company;О;С;\n",
            &options,
        )
        .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].field_path, "Company");
        assert!(rows[0].is_container);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let rows =
            read_rows_from_str("1,A,A,О,С,\n\n1.1,B,B,О,П,\n", &SchemaOptions::default()).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_missing_columns() {
        let result = read_rows_from_str("1,A,A,О,С,\n2,B\n", &SchemaOptions::default());
        assert!(matches!(
            result,
            Err(SchemaError::MissingColumns { line: 2, found: 2 })
        ));
    }

    #[test]
    fn test_missing_index() {
        let result = read_rows_from_str(",A,A,О,С,\n", &SchemaOptions::default());
        assert!(matches!(
            result,
            Err(SchemaError::Structure(SchemaStructureError::MissingIndex { line: 1 }))
        ));
    }

    #[test]
    fn test_wide_delimiter_rejected() {
        let options = SchemaOptions {
            delimiter: '→',
            ..SchemaOptions::default()
        };
        assert!(matches!(
            read_rows_from_str("1→A→A→О→С", &options),
            Err(SchemaError::InvalidDelimiter('→'))
        ));
    }
}

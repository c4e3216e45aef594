/*
 * dates.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Date normalization for values of date-typed fields.

use std::fmt::Write;

use chrono::NaiveDate;

/// Reformats date strings between two patterns.
///
/// Implementations never fail: empty input comes back unchanged and so
/// does anything that cannot be reformatted.
pub trait DateFormatter {
    fn reformat(&self, source_pattern: &str, target_pattern: &str, value: &str) -> String;
}

/// [`DateFormatter`] over chrono strftime patterns.
///
/// Parsing is lenient about trailing input, so `2017-10-01+03:00` or
/// `2017-10-01T12:00:00` read as `2017-10-01` with `%Y-%m-%d`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoDates;

impl DateFormatter for ChronoDates {
    fn reformat(&self, source_pattern: &str, target_pattern: &str, value: &str) -> String {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return value.to_string();
        }

        let date = match NaiveDate::parse_and_remainder(trimmed, source_pattern) {
            Ok((date, _)) => date,
            Err(err) => {
                tracing::warn!(value, pattern = source_pattern, %err, "Unparseable date, keeping original");
                return value.to_string();
            }
        };

        let mut out = String::new();
        if write!(out, "{}", date.format(target_pattern)).is_err() {
            tracing::warn!(value, pattern = target_pattern, "Invalid display date pattern");
            return value.to_string();
        }
        out
    }
}

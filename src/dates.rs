// Date normalization - "Jan 1, 1800" → "January 01, 1800"
//
// Both date columns arrive in the source format (abbreviated month). A few
// cells already spell the month out; those are left untouched.

use crate::error::{LifespanError, Result};
use crate::loader::{RawRow, SCHEMA};
use chrono::{NaiveDate, ParseError};
use log::debug;
use serde::{Deserialize, Serialize};

/// Source format: abbreviated month, day, 4-digit year
pub const SOURCE_FORMAT: &str = "%b %d, %Y";

/// Canonical format: full month, zero-padded day, 4-digit year
pub const CANONICAL_FORMAT: &str = "%B %d, %Y";

/// Leading tokens that mark a value as already spelled out
pub const PASS_THROUGH_MONTHS: [&str; 2] = ["June", "July"];

/// DateNormalizer - rewrites one date cell into the canonical form
pub trait DateNormalizer {
    fn normalize_date(&self, date: &str) -> std::result::Result<String, ParseError>;
}

/// The normalizer used for office-holder tables
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceDateNormalizer;

impl DateNormalizer for SourceDateNormalizer {
    fn normalize_date(&self, date: &str) -> std::result::Result<String, ParseError> {
        normalize_date(date)
    }
}

/// Reformat a source-format date, passing June/July values through as-is.
pub fn normalize_date(value: &str) -> std::result::Result<String, ParseError> {
    if is_pass_through(value) {
        debug!("Passing through already spelled-out date {:?}", value);
        return Ok(value.to_string());
    }

    let date = NaiveDate::parse_from_str(value.trim(), SOURCE_FORMAT)?;
    Ok(date.format(CANONICAL_FORMAT).to_string())
}

/// Absent cells stay absent
pub fn normalize_column(value: Option<&str>) -> std::result::Result<Option<String>, ParseError> {
    value.map(normalize_date).transpose()
}

pub fn is_pass_through(value: &str) -> bool {
    value
        .split_whitespace()
        .next()
        .is_some_and(|token| PASS_THROUGH_MONTHS.contains(&token))
}

/// Parse a canonical-format date. `%B` also accepts abbreviated month names.
pub fn parse_canonical(value: &str) -> std::result::Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(value.trim(), CANONICAL_FORMAT)
}

/// A loaded row with both date columns normalized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRow {
    pub line: u64,
    pub name: String,
    pub raw_birth: Option<String>,
    pub raw_death: Option<String>,
    pub birth_formatted: Option<String>,
    pub death_formatted: Option<String>,
}

/// Normalize both date columns of every row.
///
/// The first unparseable value aborts the run, naming the row and column.
pub fn normalize_rows<N: DateNormalizer>(
    normalizer: &N,
    rows: Vec<RawRow>,
) -> Result<Vec<NormalizedRow>> {
    rows.into_iter()
        .map(|row| {
            let birth_formatted =
                normalize_cell(normalizer, &row, SCHEMA.birth_date, row.birth_date.as_deref())?;
            let death_formatted =
                normalize_cell(normalizer, &row, SCHEMA.death_date, row.death_date.as_deref())?;

            Ok(NormalizedRow {
                line: row.line,
                name: row.name,
                raw_birth: row.birth_date,
                raw_death: row.death_date,
                birth_formatted,
                death_formatted,
            })
        })
        .collect()
}

fn normalize_cell<N: DateNormalizer>(
    normalizer: &N,
    row: &RawRow,
    column: &'static str,
    value: Option<&str>,
) -> Result<Option<String>> {
    let Some(value) = value else {
        return Ok(None);
    };

    normalizer
        .normalize_date(value)
        .map(Some)
        .map_err(|source| LifespanError::DateParseFailure {
            line: row.line,
            name: row.name.clone(),
            column,
            value: value.to_string(),
            source,
        })
}

// ============================================================================
// TESTS
// ============================================================================

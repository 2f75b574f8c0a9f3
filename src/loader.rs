// Table loading - CSV → raw office-holder rows

use crate::error::{LifespanError, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// Column names the input table must carry.
///
/// Everything else in the file (birth place, location of death, ...) is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    pub name: &'static str,
    pub birth_date: &'static str,
    pub death_date: &'static str,
}

pub const SCHEMA: TableSchema = TableSchema {
    name: "PRESIDENT",
    birth_date: "BIRTH DATE",
    death_date: "DEATH DATE",
};

impl TableSchema {
    pub fn columns(&self) -> [&'static str; 3] {
        [self.name, self.birth_date, self.death_date]
    }

    /// Fail with the first required column the header does not contain
    pub fn check_headers(&self, headers: &StringRecord) -> Result<()> {
        for column in self.columns() {
            if !headers.iter().any(|h| h == column) {
                return Err(LifespanError::MissingColumn { column });
            }
        }
        Ok(())
    }
}

/// Row shape as it appears in the CSV
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "PRESIDENT")]
    name: String,

    #[serde(rename = "BIRTH DATE")]
    birth_date: Option<String>,

    #[serde(rename = "DEATH DATE")]
    death_date: Option<String>,
}

/// One data row of the input table, dates still in source form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    pub line: u64,           // Line in the input file (header = 1)
    pub name: String,
    pub birth_date: Option<String>,
    pub death_date: Option<String>, // None = still living
}

/// Read the table at `path`, dropping its trailing footer row.
pub fn load_table(path: &Path) -> Result<Vec<RawRow>> {
    let file = File::open(path).map_err(|source| LifespanError::FileNotAccessible {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file);

    let headers = reader.headers()?.clone();
    SCHEMA.check_headers(&headers)?;

    let mut records = reader.records().collect::<std::result::Result<Vec<_>, _>>()?;

    // Source files always end in a footer row
    if records.pop().is_some() {
        debug!("Dropped trailing footer row from {}", path.display());
    }

    let rows = records
        .iter()
        .enumerate()
        .map(|(idx, record)| to_raw_row(record, &headers, idx))
        .collect::<Result<Vec<_>>>()?;

    info!("Loaded {} rows from {}", rows.len(), path.display());

    Ok(rows)
}

fn to_raw_row(record: &StringRecord, headers: &StringRecord, idx: usize) -> Result<RawRow> {
    // +2 because: 1-indexed + header row
    let line = record
        .position()
        .map(|p| p.line())
        .unwrap_or(idx as u64 + 2);

    let row: CsvRow = record.deserialize(Some(headers))?;

    if row.name.is_empty() {
        return Err(LifespanError::MissingField {
            line,
            field: SCHEMA.name,
        });
    }

    Ok(RawRow {
        line,
        name: row.name,
        birth_date: non_empty(row.birth_date),
        death_date: non_empty(row.death_date),
    })
}

fn non_empty(cell: Option<String>) -> Option<String> {
    cell.filter(|s| !s.trim().is_empty())
}

// ============================================================================
// TESTS
// ============================================================================

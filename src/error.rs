// Error taxonomy for the lifespan pipeline
// Library code returns these; the binary wraps them in anyhow at the edge

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LifespanError {
    /// Input path missing or unreadable
    #[error("cannot open {}: {source}", path.display())]
    FileNotAccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A date cell did not match the expected format
    #[error("line {line} ({name}): cannot parse {column} {value:?}: {source}")]
    DateParseFailure {
        line: u64,
        name: String,
        column: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Header lacks a column the schema requires
    #[error("input is missing required column {column:?}")]
    MissingColumn { column: &'static str },

    /// A required cell is empty
    #[error("line {line}: required field {field:?} is empty")]
    MissingField { line: u64, field: &'static str },

    #[error("malformed table: {0}")]
    Csv(#[from] csv::Error),
}

impl LifespanError {
    pub fn is_file_not_accessible(&self) -> bool {
        matches!(self, LifespanError::FileNotAccessible { .. })
    }
}

pub type Result<T> = std::result::Result<T, LifespanError>;

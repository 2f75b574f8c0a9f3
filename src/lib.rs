// Lifespan Statistics - Core Library
// Exposes the pipeline stages for the CLI and tests

pub mod config;
pub mod dates;
pub mod error;
pub mod histogram;
pub mod lifespan;
pub mod loader;
pub mod pipeline;
pub mod ranking;
pub mod statistics;

// Only compile the interactive chart when the TUI feature is enabled
#[cfg(feature = "tui")]
pub mod ui;

// Re-export commonly used types
pub use config::Config;
pub use dates::{
    normalize_date, normalize_rows, parse_canonical, DateNormalizer, NormalizedRow,
    SourceDateNormalizer,
};
pub use error::{LifespanError, Result};
pub use histogram::Histogram;
pub use lifespan::{derive_records, Lifespan, Record, DAYS_PER_MONTH, DAYS_PER_YEAR};
pub use loader::{load_table, RawRow, TableSchema, SCHEMA};
pub use pipeline::Analysis;
pub use ranking::{completed_lifespans, longest_lived, shortest_lived, RankingReport};
pub use statistics::{format_thousands, mode, LifespanStatistics, Mode};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

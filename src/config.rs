// Run configuration, built from command-line arguments

use crate::histogram::DEFAULT_BINS;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

pub const DEFAULT_TOP_N: usize = 10;

/// Lifespan statistics, rankings and histogram for a table of office-holders
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "lifespan-stats", version)]
pub struct Cli {
    /// CSV file with PRESIDENT, BIRTH DATE and DEATH DATE columns
    pub input: Option<PathBuf>,

    /// Print the histogram as text instead of opening the interactive chart
    #[arg(long)]
    pub no_plot: bool,

    /// Rows in each ranking table
    #[arg(long, default_value_t = DEFAULT_TOP_N, value_parser = parse_count)]
    pub top: usize,

    /// Histogram buckets
    #[arg(long, default_value_t = DEFAULT_BINS, value_parser = parse_count)]
    pub bins: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub show_plot: bool, // false = text histogram on stdout
    pub top_n: usize,
    pub bins: usize,
}

impl Config {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Config {
            input: input.into(),
            show_plot: true,
            top_n: DEFAULT_TOP_N,
            bins: DEFAULT_BINS,
        }
    }

    /// Builder pattern: headless run
    pub fn without_plot(mut self) -> Self {
        self.show_plot = false;
        self
    }

    /// `None` when no input file was given; the caller prints usage.
    pub fn from_cli(cli: Cli) -> Option<Self> {
        let input = cli.input?;
        Some(Config {
            input,
            show_plot: !cli.no_plot,
            top_n: cli.top,
            bins: cli.bins,
        })
    }

    /// Parse a full argument list, program name first.
    pub fn from_args<I, T>(args: I) -> Result<Option<Self>, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Cli::try_parse_from(args).map(Self::from_cli)
    }
}

fn parse_count(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("expected a positive integer, got {value:?}")),
    }
}

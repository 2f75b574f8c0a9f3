// Summary statistics over lived days

use crate::lifespan::Record;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Write;

pub const RULE_WIDTH: usize = 50;

/// Most frequent value(s) of a series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Every value occurs once, so there is no mode (printed as "nan")
    Unique,
    /// All values sharing the highest frequency, in first-seen order
    Tied(Vec<i64>),
}

impl Mode {
    pub fn values(&self) -> &[i64] {
        match self {
            Mode::Unique => &[],
            Mode::Tied(values) => values,
        }
    }
}

/// Compute the mode of `values`.
pub fn mode(values: &[i64]) -> Mode {
    let mut counts: HashMap<i64, usize> = HashMap::new();
    let mut first_seen: Vec<i64> = Vec::new();
    for &value in values {
        let count = counts.entry(value).or_insert(0);
        if *count == 0 {
            first_seen.push(value);
        }
        *count += 1;
    }

    let max_count = counts.values().copied().max().unwrap_or(0);
    if max_count <= 1 {
        return Mode::Unique;
    }

    Mode::Tied(
        first_seen
            .into_iter()
            .filter(|v| counts[v] == max_count)
            .collect(),
    )
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Σ(days × years) / Σ(years)
pub fn weighted_average(pairs: &[(f64, f64)]) -> f64 {
    let weight: f64 = pairs.iter().map(|(_, years)| years).sum();
    let weighted: f64 = pairs.iter().map(|(days, years)| days * years).sum();
    weighted / weight
}

pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Sample standard deviation (N − 1 divisor)
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

/// Descriptive statistics of lived days across completed lifespans
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifespanStatistics {
    pub count: usize,
    pub mean: f64,
    pub weighted_average: f64,
    pub median: f64,
    pub mode: Mode,
    pub max: i64,
    pub min: i64,
    pub std_dev: f64,
}

impl LifespanStatistics {
    /// `None` when no record has a lifespan.
    pub fn compute<'a, I>(records: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let lifespans: Vec<_> = records.into_iter().filter_map(|r| r.lifespan).collect();
        if lifespans.is_empty() {
            return None;
        }

        let days: Vec<i64> = lifespans.iter().map(|l| l.days).collect();
        let days_f: Vec<f64> = days.iter().map(|&d| d as f64).collect();
        let pairs: Vec<(f64, f64)> = lifespans.iter().map(|l| (l.days as f64, l.years)).collect();

        Some(LifespanStatistics {
            count: days.len(),
            mean: mean(&days_f),
            weighted_average: weighted_average(&pairs),
            median: median(&days_f),
            mode: mode(&days),
            max: days.iter().copied().max()?,
            min: days.iter().copied().min()?,
            std_dev: std_dev(&days_f),
        })
    }

    pub fn render(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut out = String::new();

        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "{:^width$}", "Statistics for Lived Days", width = RULE_WIDTH);
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "Mean: {}", format_thousands(self.mean));
        let _ = writeln!(out, "Weighted Average: {}", format_thousands(self.weighted_average));
        let _ = writeln!(out, "Median: {}", format_thousands(self.median));
        match &self.mode {
            Mode::Unique => {
                let _ = writeln!(out, "Mode: nan");
            }
            Mode::Tied(values) => {
                let joined = values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ");
                let _ = writeln!(out, "Mode(s): {joined}");
            }
        }
        let _ = writeln!(out, "Max: {}", format_thousands(self.max as f64));
        let _ = writeln!(out, "Min: {}", format_thousands(self.min as f64));
        let _ = writeln!(out, "Standard Deviation: {}", format_thousands(self.std_dev));

        out
    }
}

/// Zero decimals with comma thousands separators: 1234567.4 → "1,234,567".
/// Non-finite values print as "nan" / "inf" / "-inf".
pub fn format_thousands(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let rounded = format!("{:.0}", value);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) if rest != "0" => ("-", rest),
        Some(rest) => ("", rest),
        None => ("", rounded.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}")
}

// ============================================================================
// TESTS
// ============================================================================

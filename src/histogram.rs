// Histogram buckets for the lived-days distribution
//
// Bucket computation is pure; drawing happens either here as plain text or
// in the interactive chart (ui module).

use crate::statistics::format_thousands;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

pub const X_LABEL: &str = "Lived Days";
pub const Y_LABEL: &str = "Frequency";

pub const DEFAULT_BINS: usize = 10;

/// Equal-width buckets over the observed range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// `counts.len() + 1` bucket edges, ascending
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bucket `values` into `bins` equal-width buckets spanning `[min, max]`.
    ///
    /// Every bucket is half-open except the last, which also takes `max`.
    /// A degenerate range (all values equal) is widened by 0.5 on each side.
    pub fn from_values(values: &[f64], bins: usize) -> Self {
        let bins = bins.max(1);
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();

        let (mut lo, mut hi) = finite
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));

        if finite.is_empty() {
            lo = 0.0;
            hi = 1.0;
        } else if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let edges: Vec<f64> = (0..=bins)
            .map(|i| if i == bins { hi } else { lo + width * i as f64 })
            .collect();

        let mut counts = vec![0usize; bins];
        for v in finite {
            let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Histogram { edges, counts }
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// `(low, high)` edges of bucket `i`
    pub fn bucket_range(&self, i: usize) -> Option<(f64, f64)> {
        Some((*self.edges.get(i)?, *self.edges.get(i + 1)?))
    }

    /// Short label for bucket `i`, e.g. "24,000-25,500"
    pub fn bucket_label(&self, i: usize) -> String {
        match self.bucket_range(i) {
            Some((lo, hi)) => format!("{}-{}", format_thousands(lo), format_thousands(hi)),
            None => String::new(),
        }
    }

    /// Horizontal bar rendering for terminals without the interactive chart
    pub fn render_text(&self, bar_width: usize) -> String {
        let labels: Vec<String> = (0..self.bins()).map(|i| self.bucket_label(i)).collect();
        let label_width = labels.iter().map(|l| l.len()).max().unwrap_or(0).max(X_LABEL.len());
        let max = self.max_count();

        let mut out = String::new();
        let _ = writeln!(out, "{:<w$} | {}", X_LABEL, Y_LABEL, w = label_width);
        let _ = writeln!(out, "{}-+-{}", "-".repeat(label_width), "-".repeat(bar_width));

        for (label, &count) in labels.iter().zip(&self.counts) {
            let len = if max == 0 { 0 } else { count * bar_width / max };
            let _ = writeln!(
                out,
                "{:>w$} | {} {}",
                label,
                "#".repeat(len),
                count,
                w = label_width
            );
        }

        out
    }
}

// ============================================================================
// TESTS
// ============================================================================

// Rankings - longest and shortest completed lifespans

use crate::lifespan::Record;
use crate::statistics::{format_thousands, RULE_WIDTH};
use std::cmp::Ordering;
use std::fmt::Write;

/// Records with a death date, plus how many living ones were left out
pub fn completed_lifespans(records: &[Record]) -> (Vec<&Record>, usize) {
    let completed: Vec<&Record> = records.iter().filter(|r| !r.is_living()).collect();
    let excluded = records.len() - completed.len();
    (completed, excluded)
}

fn by_years(a: &Record, b: &Record) -> Ordering {
    let a = a.lived_years().unwrap_or(f64::NAN);
    let b = b.lived_years().unwrap_or(f64::NAN);
    a.total_cmp(&b)
}

/// Top `n` by lived years, longest first. Ties keep table order.
pub fn longest_lived<'a>(records: &[&'a Record], n: usize) -> Vec<&'a Record> {
    let mut ranked = records.to_vec();
    ranked.sort_by(|a, b| by_years(b, a));
    ranked.truncate(n);
    ranked
}

/// Bottom `n` by lived years, shortest first. Ties keep table order.
pub fn shortest_lived<'a>(records: &[&'a Record], n: usize) -> Vec<&'a Record> {
    let mut ranked = records.to_vec();
    ranked.sort_by(|a, b| by_years(a, b));
    ranked.truncate(n);
    ranked
}

const NAME_WIDTH: usize = 24;

/// Fixed-width table of ranked records.
///
/// Rows come from [`completed_lifespans`]; a living row here is a caller bug
/// and trips a debug assertion. Release builds print it with "-" cells so
/// rank numbers stay contiguous.
pub fn render_ranking(title: &str, rows: &[&Record]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    let _ = writeln!(
        out,
        "{:>4}  {:<name$}  {:>13}  {:>11}  {:>12}  {:>10}",
        "",
        "PRESIDENT",
        "YEAR_OF_BIRTH",
        "LIVED_YEARS",
        "LIVED_MONTHS",
        "LIVED_DAYS",
        name = NAME_WIDTH,
    );

    for (rank, record) in rows.iter().enumerate() {
        debug_assert!(
            record.lifespan.is_some(),
            "living row {:?} passed to a ranking",
            record.name
        );
        let (years, months, days) = match record.lifespan {
            Some(lifespan) => (
                format_thousands(lifespan.years),
                format_thousands(lifespan.months),
                format_thousands(lifespan.days as f64),
            ),
            None => ("-".to_string(), "-".to_string(), "-".to_string()),
        };
        let _ = writeln!(
            out,
            "{:>4}  {:<name$}  {:>13}  {:>11}  {:>12}  {:>10}",
            rank + 1,
            truncate(&record.name, NAME_WIDTH),
            record.birth_year,
            years,
            months,
            days,
            name = NAME_WIDTH,
        );
    }

    out
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{kept}...")
    }
}

/// Both rankings over the completed lifespans
#[derive(Debug, Clone)]
pub struct RankingReport<'a> {
    pub longest: Vec<&'a Record>,
    pub shortest: Vec<&'a Record>,
    pub excluded_living: usize,
    pub size: usize,
}

impl<'a> RankingReport<'a> {
    pub fn build(records: &'a [Record], n: usize) -> Self {
        let (completed, excluded_living) = completed_lifespans(records);
        RankingReport {
            longest: longest_lived(&completed, n),
            shortest: shortest_lived(&completed, n),
            excluded_living,
            size: n,
        }
    }

    pub fn render(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let banner = format!("Table of Top {} Presidents", self.size);

        let mut out = String::new();
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "{:^width$}", banner, width = RULE_WIDTH);
        let _ = writeln!(out, "{rule}");
        out.push_str(&render_ranking(
            &format!("Top {} Presidents from longest lived to shortest lived:", self.size),
            &self.longest,
        ));
        out.push_str(&render_ranking(
            &format!("Top {} presidents from shortest lived to longest lived:", self.size),
            &self.shortest,
        ));
        out
    }
}

// ============================================================================
// TESTS
// ============================================================================

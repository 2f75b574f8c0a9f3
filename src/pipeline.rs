// Pipeline - load → normalize → derive → report
//
// Holds every intermediate product so the CLI can print it and tests can
// inspect it.

use crate::config::Config;
use crate::dates::{normalize_rows, SourceDateNormalizer};
use crate::error::Result;
use crate::histogram::Histogram;
use crate::lifespan::{derive_records, Record};
use crate::loader::load_table;
use crate::ranking::{completed_lifespans, RankingReport};
use crate::statistics::LifespanStatistics;
use log::{info, warn};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Analysis {
    /// Every loaded row, living ones included
    pub records: Vec<Record>,
    pub statistics: Option<LifespanStatistics>,
    pub histogram: Histogram,
    pub excluded_living: usize,
    pub top_n: usize,
}

impl Analysis {
    pub fn from_path(path: &Path, config: &Config) -> Result<Self> {
        let rows = load_table(path)?;
        let normalized = normalize_rows(&SourceDateNormalizer, rows)?;
        let records = derive_records(normalized)?;
        Ok(Self::from_records(records, config))
    }

    pub fn from_records(records: Vec<Record>, config: &Config) -> Self {
        let (completed, excluded_living) = completed_lifespans(&records);
        info!(
            "Excluded {} still-living rows; {} completed lifespans remain",
            excluded_living,
            completed.len()
        );

        let statistics = LifespanStatistics::compute(completed.iter().copied());
        if statistics.is_none() {
            warn!("No completed lifespans to summarize");
        }

        let days: Vec<f64> = completed
            .iter()
            .filter_map(|r| r.lived_days())
            .map(|d| d as f64)
            .collect();
        let histogram = Histogram::from_values(&days, config.bins);

        Analysis {
            records,
            statistics,
            histogram,
            excluded_living,
            top_n: config.top_n,
        }
    }

    pub fn rankings(&self) -> RankingReport<'_> {
        RankingReport::build(&self.records, self.top_n)
    }

    /// Rankings then the statistics block, as printed by the CLI
    pub fn render_report(&self) -> String {
        let mut out = self.rankings().render();
        match &self.statistics {
            Some(stats) => out.push_str(&stats.render()),
            None => out.push_str("No completed lifespans to summarize.\n"),
        }
        out
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LifespanError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const THREE_ROWS: &str = "\
PRESIDENT,BIRTH DATE,BIRTH PLACE,DEATH DATE,LOCATION OF DEATH
George Washington,\"Feb 22, 1732\",\"Westmoreland Co., Va.\",\"Dec 14, 1799\",\"Mount Vernon, Va.\"
John Adams,\"Oct 30, 1735\",\"Quincy, Mass.\",\"July 4, 1826\",\"Quincy, Mass.\"
Joe Biden,\"Nov 20, 1942\",\"Scranton, Pa.\",,
Reference: Presidents of the United States,,,,
";

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_end_to_end_excludes_living() {
        let file = write_csv(THREE_ROWS);
        let config = Config::new(file.path()).without_plot();

        let analysis = Analysis::from_path(file.path(), &config).unwrap();

        // Living row survives derivation with no lifespan
        assert_eq!(analysis.records.len(), 3);
        assert!(analysis.records[2].is_living());
        assert_eq!(analysis.records[2].birth_year, 1942);
        assert_eq!(analysis.excluded_living, 1);

        // ...but is left out of statistics, rankings and histogram
        let stats = analysis.statistics.as_ref().unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(analysis.histogram.total(), 2);

        let rankings = analysis.rankings();
        assert_eq!(rankings.longest.len(), 2);
        assert!(rankings.longest.iter().all(|r| r.name != "Joe Biden"));
        assert!(rankings.shortest.iter().all(|r| r.name != "Joe Biden"));

        // John Adams: Oct 30, 1735 → July 4, 1826
        assert_eq!(rankings.longest[0].name, "John Adams");
        assert_eq!(rankings.longest[0].death_formatted.as_deref(), Some("July 4, 1826"));
        assert_eq!(rankings.longest[0].lived_days(), Some(33_119));
        assert_eq!(rankings.shortest[0].name, "George Washington");
    }

    #[test]
    fn test_report_sections_in_order() {
        let file = write_csv(THREE_ROWS);
        let config = Config::new(file.path()).without_plot();

        let report = Analysis::from_path(file.path(), &config).unwrap().render_report();

        let ranking_at = report.find("Table of Top 10 Presidents").unwrap();
        let stats_at = report.find("Statistics for Lived Days").unwrap();
        assert!(ranking_at < stats_at);
        assert!(!report.contains("Joe Biden"));
    }

    #[test]
    fn test_missing_file_aborts() {
        let config = Config::new("/no/such/file.csv");
        let err = Analysis::from_path(&config.input, &config).unwrap_err();
        assert!(matches!(err, LifespanError::FileNotAccessible { .. }));
    }

    #[test]
    fn test_bad_date_aborts_run() {
        let file = write_csv(
            "PRESIDENT,BIRTH DATE,DEATH DATE\n\
             A,\"Jan 1, 1800\",\"Jan 1, 1870\"\n\
             B,\"Smarch 1, 1800\",\n\
             footer,,\n",
        );
        let config = Config::new(file.path());

        let err = Analysis::from_path(file.path(), &config).unwrap_err();
        assert!(matches!(
            err,
            LifespanError::DateParseFailure { line: 3, column: "BIRTH DATE", .. }
        ));
    }

    #[test]
    fn test_all_living_has_no_statistics() {
        let file = write_csv(
            "PRESIDENT,BIRTH DATE,DEATH DATE\nA,\"Jan 1, 1950\",\nfooter,,\n",
        );
        let config = Config::new(file.path());

        let analysis = Analysis::from_path(file.path(), &config).unwrap();

        assert!(analysis.statistics.is_none());
        assert_eq!(analysis.histogram.total(), 0);
        assert!(analysis.render_report().contains("No completed lifespans"));
    }
}

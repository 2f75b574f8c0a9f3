// End-to-end runs of the lifespan-stats binary

use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

const THREE_ROWS: &str = "\
PRESIDENT,BIRTH DATE,BIRTH PLACE,DEATH DATE,LOCATION OF DEATH
George Washington,\"Feb 22, 1732\",\"Westmoreland Co., Va.\",\"Dec 14, 1799\",\"Mount Vernon, Va.\"
John Adams,\"Oct 30, 1735\",\"Quincy, Mass.\",\"July 4, 1826\",\"Quincy, Mass.\"
Joe Biden,\"Nov 20, 1942\",\"Scranton, Pa.\",,
Reference: Presidents of the United States,,,,
";

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lifespan-stats"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run lifespan-stats")
}

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_no_arguments_prints_usage_and_succeeds() {
    let output = run(&[]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage: lifespan-stats"), "stdout: {stdout}");
}

#[test]
fn test_missing_file_reports_and_fails() {
    let output = run(&["/definitely/not/here.csv", "--no-plot"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("File not found. Please check the file path and try again."));
    // No report, no histogram
    assert!(output.stdout.is_empty());
}

#[test]
fn test_no_plot_prints_report_and_text_histogram() {
    let file = write_csv(THREE_ROWS);
    let path = file.path().to_str().unwrap();

    let output = run(&[path, "--no-plot"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let ranking_at = stdout.find("Table of Top 10 Presidents").unwrap();
    let stats_at = stdout.find("Statistics for Lived Days").unwrap();
    let histogram_at = stdout.find("| Frequency").unwrap();
    assert!(ranking_at < stats_at && stats_at < histogram_at);
    assert!(stdout.contains("Lived Days"));
    assert!(stdout.contains("John Adams"));
    assert!(!stdout.contains("Joe Biden"));
}

#[test]
fn test_bad_date_fails_with_row_diagnostic() {
    let file = write_csv(
        "PRESIDENT,BIRTH DATE,DEATH DATE\nA,\"Smarch 1, 1800\",\nfooter,,\n",
    );
    let path = file.path().to_str().unwrap();

    let output = run(&[path, "--no-plot"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 2 (A)"), "stderr: {stderr}");
}

#[test]
fn test_invalid_bins_rejected() {
    let output = run(&["presidents.csv", "--bins", "0"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

use anyhow::Result;
use clap::{CommandFactory, Parser};
use log::info;
use std::process::ExitCode;

use lifespan_stats::config::Cli;
use lifespan_stats::{Analysis, Config, LifespanError};

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Bad flags and --help are handled (and exit) inside clap
    let Some(config) = Config::from_cli(Cli::parse()) else {
        println!("{}", Cli::command().render_usage());
        return Ok(ExitCode::SUCCESS);
    };

    let analysis = match Analysis::from_path(&config.input, &config) {
        Ok(analysis) => analysis,
        Err(LifespanError::FileNotAccessible { path, source }) => {
            info!("Cannot open {}: {}", path.display(), source);
            eprintln!("File not found. Please check the file path and try again.");
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => {
            eprintln!("Error: {err}");
            return Ok(ExitCode::FAILURE);
        }
    };

    print!("{}", analysis.render_report());

    show_distribution(&analysis, &config)?;

    Ok(ExitCode::SUCCESS)
}

#[cfg(feature = "tui")]
fn show_distribution(analysis: &Analysis, config: &Config) -> Result<()> {
    if !config.show_plot {
        print!("{}", analysis.histogram.render_text(50));
        return Ok(());
    }

    let summary = analysis
        .statistics
        .as_ref()
        .map(|s| s.render())
        .unwrap_or_default();

    lifespan_stats::ui::show_histogram(&analysis.histogram, &summary)
}

#[cfg(not(feature = "tui"))]
fn show_distribution(analysis: &Analysis, _config: &Config) -> Result<()> {
    print!("{}", analysis.histogram.render_text(50));
    Ok(())
}

//! covid-econ - COVID-19 Economic Impact Analysis
//!
//! Command line entry point: runs the analysis pipeline, prints the
//! diagnostics and model metrics, and optionally opens the viewer.

use anyhow::{anyhow, Context};
use clap::Parser;
use covid_econ_analysis::cli::Cli;
use covid_econ_analysis::config::AnalysisConfig;
use covid_econ_analysis::report::Reporter;
use covid_econ_analysis::{gui, pipeline};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AnalysisConfig::from(Cli::parse());
    let analysis = pipeline::run(&config)
        .with_context(|| format!("analysis of {} failed", config.csv_path.display()))?;
    let report = &analysis.report;

    println!("{}", Reporter::missing_table(&report.missing));
    println!("{}", Reporter::stats_table(&report.stats));
    println!("Correlation matrix:");
    println!("{}", Reporter::correlation_table(&report.correlation));
    if config.print_summary {
        println!("{}", Reporter::coefficient_table(&report.evaluation.model));
    }
    print!("{}", Reporter::metrics_lines(&report.evaluation));

    if config.show_window {
        gui::launch(analysis).map_err(|e| anyhow!("viewer failed: {e}"))?;
    }

    Ok(())
}

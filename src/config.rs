//! Run settings for one analysis.

use crate::cli::Cli;
use crate::model::{DEFAULT_SEED, DEFAULT_TRAIN_FRACTION};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_CSV: &str = "covid_economic_impact.csv";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("--train-fraction must lie strictly between 0 and 1, got {0}")]
    InvalidTrainFraction(f64),
}

/// User settings for the analysis pipeline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisConfig {
    pub csv_path: PathBuf,
    pub output_dir: PathBuf,
    pub train_fraction: f64,
    pub seed: u64,
    pub render_charts: bool,
    pub show_window: bool,
    pub print_summary: bool,
    pub report_path: Option<PathBuf>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV),
            output_dir: PathBuf::from("."),
            train_fraction: DEFAULT_TRAIN_FRACTION,
            seed: DEFAULT_SEED,
            render_charts: true,
            show_window: false,
            print_summary: false,
            report_path: None,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.train_fraction > 0.0 && self.train_fraction < 1.0) {
            return Err(ConfigError::InvalidTrainFraction(self.train_fraction));
        }
        Ok(())
    }
}

impl From<Cli> for AnalysisConfig {
    fn from(cli: Cli) -> Self {
        Self {
            csv_path: cli.csv,
            output_dir: cli.output_dir,
            train_fraction: cli.train_fraction,
            seed: cli.seed,
            render_charts: !cli.no_charts,
            show_window: cli.show,
            print_summary: cli.summary,
            report_path: cli.report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_match_bare_invocation() {
        let cli = Cli::try_parse_from(["covid-econ"]).unwrap();
        assert_eq!(AnalysisConfig::from(cli), AnalysisConfig::default());
    }

    #[test]
    fn flags_map_onto_settings() {
        let cli = Cli::try_parse_from([
            "covid-econ",
            "data.csv",
            "--output-dir",
            "out",
            "--train-fraction",
            "0.7",
            "--seed",
            "7",
            "--no-charts",
            "--summary",
            "--report",
            "run.json",
        ])
        .unwrap();
        let config = AnalysisConfig::from(cli);
        assert_eq!(config.csv_path, PathBuf::from("data.csv"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.train_fraction, 0.7);
        assert_eq!(config.seed, 7);
        assert!(!config.render_charts);
        assert!(config.print_summary);
        assert!(!config.show_window);
        assert_eq!(config.report_path, Some(PathBuf::from("run.json")));
    }

    #[test]
    fn rejects_bad_fraction() {
        let config = AnalysisConfig {
            train_fraction: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTrainFraction(_))
        ));
        assert!(AnalysisConfig::default().validate().is_ok());
    }
}

use crate::config::DEFAULT_CSV;
use crate::model::{DEFAULT_SEED, DEFAULT_TRAIN_FRACTION};
use clap::{Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "covid-econ",
    author,
    version,
    about = "COVID-19 economic impact analysis: charts and GDP growth regression",
    long_about = None
)]
pub struct Cli {
    /// CSV with columns country, date, gdp_growth, unemployment_rate, poverty_rate
    #[arg(default_value = DEFAULT_CSV, value_hint = ValueHint::FilePath)]
    pub csv: PathBuf,

    /// Directory for the rendered PNG charts
    #[arg(short, long, default_value = ".", value_hint = ValueHint::DirPath)]
    pub output_dir: PathBuf,

    /// Share of cleaned rows used for training
    #[arg(long, default_value_t = DEFAULT_TRAIN_FRACTION)]
    pub train_fraction: f64,

    /// Seed for the train/test shuffle
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Skip writing the PNG charts
    #[arg(long)]
    pub no_charts: bool,

    /// Open an interactive window with the charts after the run
    #[arg(long)]
    pub show: bool,

    /// Print the fitted coefficient table
    #[arg(long)]
    pub summary: bool,

    /// Write a JSON report of the run to this path
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub report: Option<PathBuf>,
}

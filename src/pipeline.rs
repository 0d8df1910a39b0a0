//! Pipeline Module
//! Runs load, clean, summarize, render and model in order. The first
//! failure aborts the run.

use crate::charts::{RenderError, StaticChartRenderer};
use crate::config::{AnalysisConfig, ConfigError};
use crate::data::{CleanerError, DataCleaner, DataLoader, Dataset, LoaderError};
use crate::model::{ModelError, Modeler};
use crate::report::{AnalysisReport, ReportError, Reporter};
use crate::stats::{CorrelationMatrix, StatsCalculator};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error(transparent)]
    Clean(#[from] CleanerError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Result of a full run: the cleaned rows plus everything derived from them.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub dataset: Dataset,
    pub report: AnalysisReport,
}

pub fn run(config: &AnalysisConfig) -> Result<Analysis, PipelineError> {
    config.validate()?;

    let df = DataLoader::load_csv(&config.csv_path)?;

    let (dataset, missing) = DataCleaner::clean(&df)?;
    log::info!(
        "Cleaned dataset: {} rows across {} countries",
        dataset.len(),
        dataset.countries().len()
    );

    let stats = StatsCalculator::describe_dataset(&dataset);
    let correlation = CorrelationMatrix::from_dataset(&dataset);

    let charts = if config.render_charts {
        StaticChartRenderer::render_all(&dataset, &correlation, &config.output_dir)?
    } else {
        log::debug!("Chart rendering disabled");
        Vec::new()
    };

    let evaluation = Modeler::new(config.train_fraction, config.seed).evaluate(&dataset)?;
    log::info!(
        "Model evaluated on {} held-out rows",
        evaluation.split.test.len()
    );

    let report = AnalysisReport {
        config: config.clone(),
        missing,
        stats,
        correlation,
        evaluation,
        charts,
    };

    if let Some(path) = &config.report_path {
        Reporter::write_json(&report, path)?;
    }

    Ok(Analysis { dataset, report })
}

//! Report Module
//! Text tables for the terminal and the JSON run report.

use crate::config::AnalysisConfig;
use crate::data::MissingReport;
use crate::model::{LinearModel, ModelEvaluation};
use crate::stats::{CorrelationMatrix, IndicatorStats};
use serde::Serialize;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything one run produced.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub config: AnalysisConfig,
    pub missing: MissingReport,
    pub stats: Vec<IndicatorStats>,
    pub correlation: CorrelationMatrix,
    pub evaluation: ModelEvaluation,
    pub charts: Vec<PathBuf>,
}

pub struct Reporter;

impl Reporter {
    pub fn missing_table(report: &MissingReport) -> String {
        let mut s = String::from("Missing values per column:\n");
        for c in &report.columns {
            let _ = writeln!(s, "  {:<20}{:>6}", c.column, c.missing);
        }
        let _ = writeln!(
            s,
            "Rows: {} loaded, {} dropped, {} kept",
            report.rows_before,
            report.rows_dropped(),
            report.rows_after
        );
        s
    }

    pub fn stats_table(stats: &[IndicatorStats]) -> String {
        let mut s = format!(
            "{:<20}{:>6}{:>10}{:>10}{:>10}{:>10}{:>10}\n",
            "indicator", "n", "mean", "median", "std", "min", "max"
        );
        for st in stats {
            let _ = writeln!(
                s,
                "{:<20}{:>6}{:>10.3}{:>10.3}{:>10.3}{:>10.3}{:>10.3}",
                st.indicator.column_name(),
                st.count,
                st.mean,
                st.median,
                st.std,
                st.min,
                st.max
            );
        }
        s
    }

    pub fn correlation_table(correlation: &CorrelationMatrix) -> String {
        let mut s = format!("{:<20}", "");
        for i in &correlation.indicators {
            let _ = write!(s, "{:>20}", i.column_name());
        }
        s.push('\n');
        for (indicator, row) in correlation.indicators.iter().zip(&correlation.values) {
            let _ = write!(s, "{:<20}", indicator.column_name());
            for v in row {
                let _ = write!(s, "{:>20.4}", v);
            }
            s.push('\n');
        }
        s
    }

    pub fn coefficient_table(model: &LinearModel) -> String {
        let mut s = String::from("Coefficients:\n");
        let _ = writeln!(
            s,
            "  {:<20}{:>12}{:>12}{:>10}{:>10}",
            "", "Estimate", "Std. Error", "t value", "Pr(>|t|)"
        );
        for c in &model.coefficients {
            let _ = writeln!(
                s,
                "  {:<20}{:>12.6}{:>12.6}{:>10.3}{:>10.4}{}",
                c.name,
                c.estimate,
                c.std_error,
                c.t_value,
                c.p_value,
                if c.is_significant() { " *" } else { "" }
            );
        }
        let _ = writeln!(
            s,
            "Residual standard error: {:.4} on {} observations",
            model.residual_std_error, model.n_obs
        );
        let _ = writeln!(s, "Training R²: {:.4}", model.train_r2);
        s
    }

    /// The two result lines of every run.
    pub fn metrics_lines(evaluation: &ModelEvaluation) -> String {
        format!(
            "Mean Squared Error: {}\nR² Score: {}\n",
            evaluation.mse(),
            evaluation.r2()
        )
    }

    pub fn write_json(report: &AnalysisReport, path: &Path) -> Result<(), ReportError> {
        let file = File::create(path).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, report)?;
        writer.flush().map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Wrote report {}", path.display());
        Ok(())
    }
}

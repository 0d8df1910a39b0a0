//! Model module - GDP growth regression on labour-market indicators

mod linear;
mod metrics;
mod split;

pub use linear::{
    Coefficient, LinearModel, LinearRegression, INTERCEPT, SIGNIFICANCE_THRESHOLD,
};
pub use metrics::RegressionMetrics;
pub use split::{train_test_split, Split};

use crate::data::{Dataset, Indicator};
use chrono::NaiveDate;
use ndarray::{Array1, Array2};
use serde::Serialize;
use thiserror::Error;

/// Regression target.
pub const TARGET: Indicator = Indicator::GdpGrowth;
/// Regression features, in coefficient order.
pub const FEATURES: [Indicator; 2] = [Indicator::UnemploymentRate, Indicator::PovertyRate];

pub const DEFAULT_TRAIN_FRACTION: f64 = 0.8;
pub const DEFAULT_SEED: u64 = 42;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Train fraction must lie strictly between 0 and 1, got {0}")]
    InvalidProportion(f64),
    #[error("Not enough rows to fit the model: {rows} available, {required} required")]
    InsufficientData { rows: usize, required: usize },
    #[error("Test partition is empty; need more rows or a smaller train fraction")]
    EmptyTestSet,
    #[error("Matrix is singular and cannot be inverted")]
    SingularMatrix,
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Held-out prediction for one test row.
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub row: usize,
    pub country: String,
    pub date: NaiveDate,
    pub actual: f64,
    pub predicted: f64,
}

/// Everything produced by one train/evaluate cycle.
#[derive(Debug, Clone, Serialize)]
pub struct ModelEvaluation {
    pub split: Split,
    pub model: LinearModel,
    pub metrics: RegressionMetrics,
    pub predictions: Vec<Prediction>,
}

impl ModelEvaluation {
    pub fn mse(&self) -> f64 {
        self.metrics.mse
    }

    pub fn r2(&self) -> f64 {
        self.metrics.r2
    }
}

/// Splits, fits and scores the GDP growth model.
#[derive(Debug, Clone, Copy)]
pub struct Modeler {
    pub train_fraction: f64,
    pub seed: u64,
}

impl Default for Modeler {
    fn default() -> Self {
        Self::new(DEFAULT_TRAIN_FRACTION, DEFAULT_SEED)
    }
}

impl Modeler {
    pub fn new(train_fraction: f64, seed: u64) -> Self {
        Self {
            train_fraction,
            seed,
        }
    }

    pub fn evaluate(&self, dataset: &Dataset) -> Result<ModelEvaluation, ModelError> {
        let split = train_test_split(dataset.len(), self.train_fraction, self.seed)?;
        if split.test.is_empty() {
            return Err(ModelError::EmptyTestSet);
        }
        log::info!(
            "Split {} rows into {} train / {} test (seed {})",
            dataset.len(),
            split.train.len(),
            split.test.len(),
            self.seed
        );

        let (x_train, y_train) = design_matrix(dataset, &split.train);
        let names = FEATURES.map(Indicator::column_name);
        let model = LinearRegression::fit(&x_train, &y_train, &names)?;

        let (x_test, y_test) = design_matrix(dataset, &split.test);
        let y_pred = model.predict(&x_test)?;
        let metrics = RegressionMetrics::calculate(&y_test, &y_pred);

        let predictions = split
            .test
            .iter()
            .zip(y_test.iter().zip(y_pred.iter()))
            .filter_map(|(&row, (&actual, &predicted))| {
                let record = dataset.get(row)?;
                Some(Prediction {
                    row,
                    country: record.country.clone(),
                    date: record.date,
                    actual,
                    predicted,
                })
            })
            .collect();

        Ok(ModelEvaluation {
            split,
            model,
            metrics,
            predictions,
        })
    }
}

/// Feature matrix and target vector for the given rows.
pub fn design_matrix(dataset: &Dataset, rows: &[usize]) -> (Array2<f64>, Array1<f64>) {
    let records: Vec<_> = rows.iter().filter_map(|&r| dataset.get(r)).collect();
    let x = Array2::from_shape_fn((records.len(), FEATURES.len()), |(i, j)| {
        FEATURES[j].value(records[i])
    });
    let y = records.iter().map(|r| TARGET.value(r)).collect();
    (x, y)
}

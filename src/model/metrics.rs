//! Regression metrics for held-out predictions.

use ndarray::Array1;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RegressionMetrics {
    /// Mean Squared Error
    pub mse: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Error
    pub mae: f64,
    /// R-squared (coefficient of determination)
    pub r2: f64,
    pub n_samples: usize,
}

impl RegressionMetrics {
    pub fn calculate(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> Self {
        let mse = Self::mean_squared_error(y_true, y_pred);
        Self {
            mse,
            rmse: mse.sqrt(),
            mae: Self::mean_absolute_error(y_true, y_pred),
            r2: Self::r_squared(y_true, y_pred),
            n_samples: y_true.len(),
        }
    }

    /// Mean Squared Error: (1/n) * Σ(y_true - y_pred)²
    pub fn mean_squared_error(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> f64 {
        let n = y_true.len() as f64;
        y_true
            .iter()
            .zip(y_pred.iter())
            .map(|(&t, &p)| (t - p).powi(2))
            .sum::<f64>()
            / n
    }

    /// Mean Absolute Error: (1/n) * Σ|y_true - y_pred|
    pub fn mean_absolute_error(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> f64 {
        let n = y_true.len() as f64;
        y_true
            .iter()
            .zip(y_pred.iter())
            .map(|(&t, &p)| (t - p).abs())
            .sum::<f64>()
            / n
    }

    /// R² = 1 - SS_res / SS_tot, with SS_tot taken around the mean of `y_true`.
    ///
    /// A constant `y_true` scores 1.0 when predicted exactly and 0.0 otherwise.
    pub fn r_squared(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> f64 {
        let y_mean = y_true.mean().unwrap_or(f64::NAN);

        let ss_res: f64 = y_true
            .iter()
            .zip(y_pred.iter())
            .map(|(&t, &p)| (t - p).powi(2))
            .sum();
        let ss_tot: f64 = y_true.iter().map(|&t| (t - y_mean).powi(2)).sum();

        if ss_tot == 0.0 {
            return if ss_res == 0.0 { 1.0 } else { 0.0 };
        }
        1.0 - ss_res / ss_tot
    }
}

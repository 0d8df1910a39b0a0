//! Ordinary Least Squares regression
//!
//! Solves the normal equations β = (XᵀX)⁻¹ Xᵀy with a Cholesky
//! factorisation and reports per-coefficient inference statistics.

use crate::model::ModelError;
use ndarray::{Array1, Array2, Axis};
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Name used for the intercept term in coefficient tables.
pub const INTERCEPT: &str = "(Intercept)";

/// Significance threshold for coefficient p-values
pub const SIGNIFICANCE_THRESHOLD: f64 = 0.05;

/// A fitted coefficient with its inference statistics.
#[derive(Debug, Clone, Serialize)]
pub struct Coefficient {
    pub name: String,
    pub estimate: f64,
    pub std_error: f64,
    pub t_value: f64,
    pub p_value: f64,
}

impl Coefficient {
    pub fn is_significant(&self) -> bool {
        self.p_value <= SIGNIFICANCE_THRESHOLD
    }
}

/// Fitted linear model: intercept first, then one slope per feature.
#[derive(Debug, Clone, Serialize)]
pub struct LinearModel {
    pub coefficients: Vec<Coefficient>,
    /// Residual standard error, sqrt(SSR / (n - p))
    pub residual_std_error: f64,
    /// R² on the training rows
    pub train_r2: f64,
    pub n_obs: usize,
}

impl LinearModel {
    pub fn intercept(&self) -> f64 {
        self.coefficients[0].estimate
    }

    pub fn slopes(&self) -> Array1<f64> {
        self.coefficients[1..].iter().map(|c| c.estimate).collect()
    }

    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>, ModelError> {
        let slopes = self.slopes();
        if x.ncols() != slopes.len() {
            return Err(ModelError::DimensionMismatch {
                expected: slopes.len(),
                got: x.ncols(),
            });
        }
        Ok(x.dot(&slopes) + self.intercept())
    }
}

pub struct LinearRegression;

impl LinearRegression {
    /// Fit `y ~ 1 + x` by ordinary least squares.
    pub fn fit(
        x: &Array2<f64>,
        y: &Array1<f64>,
        feature_names: &[&str],
    ) -> Result<LinearModel, ModelError> {
        if x.nrows() != y.len() {
            return Err(ModelError::DimensionMismatch {
                expected: x.nrows(),
                got: y.len(),
            });
        }
        if x.ncols() != feature_names.len() {
            return Err(ModelError::DimensionMismatch {
                expected: feature_names.len(),
                got: x.ncols(),
            });
        }

        let n = x.nrows();
        let p = x.ncols() + 1;
        if n < p {
            return Err(ModelError::InsufficientData {
                rows: n,
                required: p,
            });
        }

        // Design matrix with a leading column of ones
        let ones = Array2::<f64>::ones((n, 1));
        let design = ndarray::concatenate(Axis(1), &[ones.view(), x.view()])
            .map_err(|e| ModelError::Computation(e.to_string()))?;

        let xtx = design.t().dot(&design);
        let xty = design.t().dot(y);

        let l = Self::cholesky(&xtx)?;
        let beta = Self::cholesky_solve(&l, &xty);

        let fitted = design.dot(&beta);
        let ss_res: f64 = y
            .iter()
            .zip(fitted.iter())
            .map(|(&yi, &fi)| (yi - fi).powi(2))
            .sum();
        let y_mean = y.mean().unwrap_or(f64::NAN);
        let ss_tot: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();
        let train_r2 = if ss_tot == 0.0 {
            if ss_res == 0.0 {
                1.0
            } else {
                0.0
            }
        } else {
            1.0 - ss_res / ss_tot
        };

        let dof = n - p;
        let sigma2 = if dof > 0 {
            ss_res / dof as f64
        } else {
            f64::NAN
        };

        // Diagonal of (XᵀX)⁻¹, one unit-vector solve per parameter
        let inv_diag: Vec<f64> = (0..p)
            .map(|k| {
                let mut unit = Array1::<f64>::zeros(p);
                unit[k] = 1.0;
                Self::cholesky_solve(&l, &unit)[k]
            })
            .collect();

        let t_dist = if dof > 0 {
            StudentsT::new(0.0, 1.0, dof as f64).ok()
        } else {
            None
        };

        let names = std::iter::once(INTERCEPT).chain(feature_names.iter().copied());
        let coefficients = names
            .zip(beta.iter())
            .zip(inv_diag)
            .map(|((name, &estimate), diag)| {
                let std_error = (sigma2 * diag).sqrt();
                let t_value = estimate / std_error;
                Coefficient {
                    name: name.to_string(),
                    estimate,
                    std_error,
                    t_value,
                    p_value: Self::two_sided_p(t_dist.as_ref(), t_value),
                }
            })
            .collect();

        log::debug!("OLS fit on {} rows, SSR = {:.6}", n, ss_res);

        Ok(LinearModel {
            coefficients,
            residual_std_error: sigma2.sqrt(),
            train_r2,
            n_obs: n,
        })
    }

    fn two_sided_p(dist: Option<&StudentsT>, t: f64) -> f64 {
        match dist {
            _ if t.is_nan() => f64::NAN,
            Some(_) if t.is_infinite() => 0.0,
            Some(d) => (2.0 * (1.0 - d.cdf(t.abs()))).clamp(0.0, 1.0),
            None => f64::NAN,
        }
    }

    /// Cholesky decomposition A = L Lᵀ. Fails when A is not positive definite.
    fn cholesky(a: &Array2<f64>) -> Result<Array2<f64>, ModelError> {
        let n = a.nrows();
        let mut l = Array2::<f64>::zeros((n, n));

        for i in 0..n {
            for j in 0..=i {
                let mut sum = 0.0;
                for k in 0..j {
                    sum += l[[i, k]] * l[[j, k]];
                }

                if i == j {
                    let diag = a[[i, i]] - sum;
                    if diag <= 1e-10 * a[[i, i]].abs().max(1.0) {
                        return Err(ModelError::SingularMatrix);
                    }
                    l[[i, j]] = diag.sqrt();
                } else {
                    l[[i, j]] = (a[[i, j]] - sum) / l[[j, j]];
                }
            }
        }

        Ok(l)
    }

    /// Solve L Lᵀ x = b by forward then backward substitution.
    fn cholesky_solve(l: &Array2<f64>, b: &Array1<f64>) -> Array1<f64> {
        let n = l.nrows();

        let mut z = Array1::<f64>::zeros(n);
        for i in 0..n {
            let mut sum = 0.0;
            for j in 0..i {
                sum += l[[i, j]] * z[j];
            }
            z[i] = (b[i] - sum) / l[[i, i]];
        }

        let mut x = Array1::<f64>::zeros(n);
        for i in (0..n).rev() {
            let mut sum = 0.0;
            for j in (i + 1)..n {
                sum += l[[j, i]] * x[j];
            }
            x[i] = (z[i] - sum) / l[[i, i]];
        }

        x
    }
}

//! Pearson correlation across the numeric indicators.

use crate::data::{Dataset, Indicator};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub indicators: Vec<Indicator>,
    /// Row-major, `values[i][j]` = corr(indicators[i], indicators[j]).
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let indicators = Indicator::ALL.to_vec();
        let columns: Vec<Vec<f64>> = indicators.iter().map(|&i| dataset.values(i)).collect();
        let n = indicators.len();

        let mut values = vec![vec![f64::NAN; n]; n];
        for i in 0..n {
            for j in i..n {
                let r = if i == j {
                    1.0
                } else {
                    Self::pearson(&columns[i], &columns[j])
                };
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        Self { indicators, values }
    }

    /// Pearson correlation coefficient. NaN when either side has no variance.
    pub fn pearson(a: &[f64], b: &[f64]) -> f64 {
        let n = a.len().min(b.len());
        if n < 2 {
            return f64::NAN;
        }
        let mean_a = a[..n].iter().sum::<f64>() / n as f64;
        let mean_b = b[..n].iter().sum::<f64>() / n as f64;

        let (mut cov, mut var_a, mut var_b) = (0.0, 0.0, 0.0);
        for (x, y) in a[..n].iter().zip(&b[..n]) {
            let dx = x - mean_a;
            let dy = y - mean_b;
            cov += dx * dy;
            var_a += dx * dx;
            var_b += dy * dy;
        }

        if var_a == 0.0 || var_b == 0.0 {
            return f64::NAN;
        }
        (cov / (var_a.sqrt() * var_b.sqrt())).clamp(-1.0, 1.0)
    }

    pub fn size(&self) -> usize {
        self.indicators.len()
    }

    pub fn get(&self, a: Indicator, b: Indicator) -> Option<f64> {
        let i = self.indicators.iter().position(|&x| x == a)?;
        let j = self.indicators.iter().position(|&x| x == b)?;
        Some(self.values[i][j])
    }
}

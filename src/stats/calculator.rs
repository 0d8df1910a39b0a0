//! Descriptive statistics
//! Per-indicator summaries over the cleaned rows.

use crate::data::{Dataset, Indicator};
use serde::Serialize;

/// Descriptive statistics for a single indicator.
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorStats {
    pub indicator: Indicator,
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub p05: f64,
    pub p95: f64,
}

impl IndicatorStats {
    fn empty(indicator: Indicator) -> Self {
        Self {
            indicator,
            count: 0,
            mean: f64::NAN,
            median: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            max: f64::NAN,
            p05: f64::NAN,
            p95: f64::NAN,
        }
    }
}

pub struct StatsCalculator;

impl StatsCalculator {
    /// Summarise one indicator column. An empty column yields NaN everywhere.
    pub fn describe(indicator: Indicator, values: &[f64]) -> IndicatorStats {
        if values.is_empty() {
            return IndicatorStats::empty(indicator);
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let mean = sorted.iter().sum::<f64>() / count as f64;
        let std = match count {
            1 => f64::NAN,
            _ => {
                let ss: f64 = sorted.iter().map(|v| (v - mean) * (v - mean)).sum();
                (ss / (count - 1) as f64).sqrt()
            }
        };

        IndicatorStats {
            indicator,
            count,
            mean,
            median: Self::percentile(&sorted, 50.0),
            std,
            min: sorted[0],
            max: sorted[count - 1],
            p05: Self::percentile(&sorted, 5.0),
            p95: Self::percentile(&sorted, 95.0),
        }
    }

    pub fn describe_dataset(dataset: &Dataset) -> Vec<IndicatorStats> {
        Indicator::ALL
            .iter()
            .map(|&indicator| Self::describe(indicator, &dataset.values(indicator)))
            .collect()
    }

    /// Linearly interpolated percentile of an ascending slice, `p` in 0..=100.
    pub fn percentile(sorted: &[f64], p: f64) -> f64 {
        match sorted {
            [] => f64::NAN,
            [only] => *only,
            _ => {
                let pos = p.clamp(0.0, 100.0) / 100.0 * (sorted.len() - 1) as f64;
                let below = pos.floor() as usize;
                let above = (below + 1).min(sorted.len() - 1);
                let weight = pos - below as f64;
                sorted[below] + (sorted[above] - sorted[below]) * weight
            }
        }
    }
}

//! Statistics module - descriptive statistics and correlation

mod calculator;
mod correlation;

pub use calculator::{IndicatorStats, StatsCalculator};
pub use correlation::CorrelationMatrix;

//! Chart Series Module
//! Backend-independent chart data: per-country trend lines, axis ranges
//! and the colour scales shared by the PNG renderer and the viewer.

use crate::data::Dataset;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

/// Line colours, cycled per country.
pub const PALETTE: [(u8, u8, u8); 10] = [
    (52, 152, 219),  // Blue
    (231, 76, 60),   // Red
    (46, 204, 113),  // Green
    (155, 89, 182),  // Purple
    (243, 156, 18),  // Orange
    (26, 188, 156),  // Teal
    (233, 30, 99),   // Pink
    (0, 188, 212),   // Cyan
    (121, 85, 72),   // Brown
    (96, 125, 139),  // Blue Grey
];

/// Heatmap cell colour for undefined correlations.
pub const NAN_COLOR: (u8, u8, u8) = (200, 200, 200);

pub fn palette_color(index: usize) -> (u8, u8, u8) {
    PALETTE[index % PALETTE.len()]
}

/// Diverging blue-white-red scale over [-1, 1].
pub fn diverging_color(r: f64) -> (u8, u8, u8) {
    if r.is_nan() {
        return NAN_COLOR;
    }
    let r = r.clamp(-1.0, 1.0);
    let (cold, hot) = ((59.0, 76.0, 192.0), (180.0, 4.0, 38.0));
    let white = (247.0, 247.0, 247.0);
    let (target, t) = if r < 0.0 { (cold, -r) } else { (hot, r) };
    let mix = |w: f64, c: f64| (w + (c - w) * t).round() as u8;
    (
        mix(white.0, target.0),
        mix(white.1, target.1),
        mix(white.2, target.2),
    )
}

/// Axis range with 15% padding on both sides.
pub fn padded_range(values: impl IntoIterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        if !v.is_nan() {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if min.is_infinite() {
        return (0.0, 1.0);
    }
    if min == max {
        return (min - 1.0, max + 1.0);
    }
    let pad = (max - min) * 0.15;
    (min - pad, max + pad)
}

/// GDP growth observations for one country, sorted by date.
#[derive(Debug, Clone, PartialEq)]
pub struct CountrySeries {
    pub country: String,
    pub points: Vec<(NaiveDate, f64)>,
}

/// Everything needed to draw the GDP growth trend chart.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendChartData {
    /// Earliest date; x coordinates are day offsets from here.
    pub origin: NaiveDate,
    pub series: Vec<CountrySeries>,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

impl TrendChartData {
    /// Group records by country. Returns `None` for an empty dataset.
    pub fn from_dataset(dataset: &Dataset) -> Option<Self> {
        let origin = dataset.records().iter().map(|r| r.date).min()?;
        let last = dataset.records().iter().map(|r| r.date).max()?;

        let mut grouped: BTreeMap<&str, Vec<(NaiveDate, f64)>> = BTreeMap::new();
        for r in dataset.records() {
            grouped
                .entry(r.country.as_str())
                .or_default()
                .push((r.date, r.gdp_growth));
        }

        let series = grouped
            .into_iter()
            .map(|(country, mut points)| {
                points.sort_by_key(|&(date, _)| date);
                CountrySeries {
                    country: country.to_string(),
                    points,
                }
            })
            .collect();

        let span = (last - origin).num_days() as f64;
        let x_range = if span == 0.0 {
            (-1.0, 1.0)
        } else {
            (0.0, span)
        };
        let y_range = padded_range(dataset.records().iter().map(|r| r.gdp_growth));

        Some(Self {
            origin,
            series,
            x_range,
            y_range,
        })
    }

    pub fn day_offset(&self, date: NaiveDate) -> f64 {
        (date - self.origin).num_days() as f64
    }

    pub fn date_at(&self, offset: f64) -> NaiveDate {
        self.origin + Duration::days(offset.round() as i64)
    }

    /// Axis label for an x coordinate.
    pub fn format_offset(&self, offset: f64) -> String {
        self.date_at(offset).format("%Y-%m-%d").to_string()
    }

    /// Plot coordinates of one series.
    pub fn points(&self, series: &CountrySeries) -> Vec<(f64, f64)> {
        series
            .points
            .iter()
            .map(|&(date, y)| (self.day_offset(date), y))
            .collect()
    }
}

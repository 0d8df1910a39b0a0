//! Static Chart Renderer
//! Writes the GDP growth trend chart and the correlation heatmap as PNG
//! files using the plotters bitmap backend.
//!
//! Layout:
//! 1. Trend chart: one line per country, x = date, y = GDP growth, legend
//!    in the upper right corner.
//! 2. Heatmap: 3x3 grid on a diverging colour scale, each cell annotated
//!    with its coefficient.

use crate::charts::series::{diverging_color, palette_color, TrendChartData};
use crate::data::{Dataset, Indicator};
use crate::stats::CorrelationMatrix;
use plotters::prelude::*;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const TREND_FILE: &str = "gdp_growth_trend.png";
pub const HEATMAP_FILE: &str = "correlation_heatmap.png";

const TREND_SIZE: (u32, u32) = (1200, 700);
const HEATMAP_SIZE: (u32, u32) = (800, 700);
const FONT: &str = "sans-serif";

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("No data to plot")]
    NoData,
    #[error("Failed to create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Drawing failed: {0}")]
    Drawing(String),
}

impl RenderError {
    fn drawing(err: impl Display) -> Self {
        RenderError::Drawing(err.to_string())
    }
}

/// Heatmap cells as `(column, row, value)` in chart coordinates, row 0 on top.
pub fn heatmap_cells(correlation: &CorrelationMatrix) -> Vec<(i32, i32, f64)> {
    correlation
        .values
        .iter()
        .zip(0..)
        .flat_map(|(row, y)| row.iter().zip(0..).map(move |(&v, x)| (x, y, v)))
        .collect()
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render both charts into `output_dir`, returning the written paths.
    pub fn render_all(
        dataset: &Dataset,
        correlation: &CorrelationMatrix,
        output_dir: &Path,
    ) -> Result<Vec<PathBuf>, RenderError> {
        if dataset.is_empty() {
            return Err(RenderError::NoData);
        }
        std::fs::create_dir_all(output_dir).map_err(|source| RenderError::OutputDir {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let trend_path = output_dir.join(TREND_FILE);
        Self::render_trend_chart(dataset, &trend_path)?;
        log::info!("Wrote {}", trend_path.display());

        let heatmap_path = output_dir.join(HEATMAP_FILE);
        Self::render_heatmap(correlation, &heatmap_path)?;
        log::info!("Wrote {}", heatmap_path.display());

        Ok(vec![trend_path, heatmap_path])
    }

    /// GDP growth over time, one coloured line per country.
    pub fn render_trend_chart(dataset: &Dataset, path: &Path) -> Result<(), RenderError> {
        let trend = TrendChartData::from_dataset(dataset).ok_or(RenderError::NoData)?;

        let root = BitMapBackend::new(path, TREND_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(RenderError::drawing)?;

        let (x_min, x_max) = trend.x_range;
        let (y_min, y_max) = trend.y_range;
        let mut chart = ChartBuilder::on(&root)
            .caption("GDP Growth Over Time by Country", (FONT, 28))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(RenderError::drawing)?;

        let format_x = |x: &f64| trend.format_offset(*x);
        chart
            .configure_mesh()
            .x_desc("Date")
            .y_desc(Indicator::GdpGrowth.label())
            .x_labels(8)
            .x_label_formatter(&format_x)
            .draw()
            .map_err(RenderError::drawing)?;

        for (idx, series) in trend.series.iter().enumerate() {
            let (r, g, b) = palette_color(idx);
            let color = RGBColor(r, g, b);
            let points = trend.points(series);

            chart
                .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))
                .map_err(RenderError::drawing)?
                .label(series.country.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
            chart
                .draw_series(
                    points
                        .iter()
                        .map(|&(x, y)| Circle::new((x, y), 3, color.filled())),
                )
                .map_err(RenderError::drawing)?;
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.85))
            .border_style(BLACK)
            .draw()
            .map_err(RenderError::drawing)?;

        root.present().map_err(RenderError::drawing)?;
        Ok(())
    }

    /// Correlation matrix heatmap with annotated cells.
    pub fn render_heatmap(correlation: &CorrelationMatrix, path: &Path) -> Result<(), RenderError> {
        let n = correlation.size() as i32;
        if n == 0 {
            return Err(RenderError::NoData);
        }
        let labels: Vec<&str> = correlation
            .indicators
            .iter()
            .map(|i| i.column_name())
            .collect();

        let root = BitMapBackend::new(path, HEATMAP_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(RenderError::drawing)?;

        // Rows run top to bottom, so the y axis is reversed
        let mut chart = ChartBuilder::on(&root)
            .caption("Correlation Matrix", (FONT, 28))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(150)
            .build_cartesian_2d(0i32..n, n..0i32)
            .map_err(RenderError::drawing)?;

        let (plot_w, plot_h) = chart.plotting_area().dim_in_pixel();
        let cell_w = plot_w as i32 / n;
        let cell_h = plot_h as i32 / n;

        let label_of = |v: &i32| labels.get(*v as usize).map(|s| s.to_string()).unwrap_or_default();
        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_labels(n as usize + 1)
            .y_labels(n as usize + 1)
            .x_label_offset(cell_w / 2)
            .y_label_offset(cell_h / 2)
            .x_label_formatter(&label_of)
            .y_label_formatter(&label_of)
            .label_style((FONT, 16))
            .draw()
            .map_err(RenderError::drawing)?;

        chart
            .draw_series(
                heatmap_cells(correlation)
                    .into_iter()
                    .map(|(x, y, v)| {
                        let (r, g, b) = diverging_color(v);
                        Rectangle::new([(x, y), (x + 1, y + 1)], RGBColor(r, g, b).filled())
                    }),
            )
            .map_err(RenderError::drawing)?;

        chart
            .draw_series(
                heatmap_cells(correlation)
                    .into_iter()
                    .map(|(x, y, v)| {
                        let text = if v.is_nan() {
                            "n/a".to_string()
                        } else {
                            format!("{:.2}", v)
                        };
                        let color = if v.abs() > 0.6 { &WHITE } else { &BLACK };
                        EmptyElement::at((x, y))
                            + Text::new(
                                text,
                                (cell_w / 2 - 22, cell_h / 2 - 10),
                                (FONT, 22).into_font().color(color),
                            )
                    }),
            )
            .map_err(RenderError::drawing)?;

        root.present().map_err(RenderError::drawing)?;
        Ok(())
    }
}

//! Charts module - Chart data preparation and rendering

mod plotter;
mod renderer;
mod series;

pub use plotter::ChartPlotter;
pub use renderer::{heatmap_cells, RenderError, StaticChartRenderer, HEATMAP_FILE, TREND_FILE};
pub use series::{
    diverging_color, padded_range, palette_color, CountrySeries, TrendChartData, PALETTE,
};

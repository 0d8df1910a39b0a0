//! GUI module - Result viewer window

mod app;
mod chart_viewer;
mod summary_panel;

pub use app::{launch, AnalysisApp};
pub use chart_viewer::ChartViewer;
pub use summary_panel::SummaryPanel;

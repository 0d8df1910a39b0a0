//! Result Viewer Application
//! Main window with the summary panel and chart viewer.

use crate::charts::TrendChartData;
use crate::gui::{ChartViewer, SummaryPanel};
use crate::pipeline::Analysis;
use crate::report::AnalysisReport;
use eframe::egui;
use egui::SidePanel;

/// Main application window. Shows a finished analysis; nothing is
/// recomputed while it is open.
pub struct AnalysisApp {
    report: AnalysisReport,
    summary_panel: SummaryPanel,
    chart_viewer: ChartViewer,
}

impl AnalysisApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, analysis: Analysis) -> Self {
        let trend = TrendChartData::from_dataset(&analysis.dataset);
        let chart_viewer = ChartViewer::new(trend, analysis.report.correlation.clone());
        Self {
            report: analysis.report,
            summary_panel: SummaryPanel::new(),
            chart_viewer,
        }
    }
}

impl eframe::App for AnalysisApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        SidePanel::left("summary_panel")
            .min_width(340.0)
            .max_width(420.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.summary_panel.show(ui, &self.report);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}

/// Open the viewer window and block until it is closed.
pub fn launch(analysis: Analysis) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 850.0])
            .with_min_inner_size([1000.0, 600.0])
            .with_title("COVID-19 Economic Impact"),
        ..Default::default()
    };

    eframe::run_native(
        "COVID-19 Economic Impact",
        options,
        Box::new(|cc| Ok(Box::new(AnalysisApp::new(cc, analysis)))),
    )
}

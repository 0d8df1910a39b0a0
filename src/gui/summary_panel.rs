//! Summary Panel Widget
//! Left side panel with run settings, data quality and model results.

use crate::charts::ChartPlotter;
use crate::report::AnalysisReport;
use egui::{Color32, RichText};

/// Left side panel summarising one analysis run.
pub struct SummaryPanel {
    pub show_stats: bool,
    pub show_coefficients: bool,
}

impl Default for SummaryPanel {
    fn default() -> Self {
        Self {
            show_stats: true,
            show_coefficients: true,
        }
    }
}

impl SummaryPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the summary panel
    pub fn show(&mut self, ui: &mut egui::Ui, report: &AnalysisReport) {
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📊 COVID-19 Economic Impact")
                    .size(20.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            let file = report
                .config
                .csv_path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            ui.label(RichText::new(file).size(11.0).color(Color32::GRAY));
        });
        ui.add_space(10.0);
        ui.separator();

        // ===== Data Quality =====
        ui.label(RichText::new("🧹 Data Quality").size(14.0).strong());
        ui.add_space(5.0);
        ChartPlotter::draw_missing_table(ui, &report.missing);

        ui.add_space(10.0);
        ui.separator();

        // ===== Model Results =====
        ui.label(RichText::new("📈 Model").size(14.0).strong());
        ui.add_space(5.0);
        let evaluation = &report.evaluation;
        ui.label(format!(
            "Split: {} train / {} test (seed {})",
            evaluation.split.train.len(),
            evaluation.split.test.len(),
            report.config.seed
        ));
        ui.label(
            RichText::new(format!("Mean Squared Error: {:.6}", evaluation.mse()))
                .size(13.0)
                .strong(),
        );
        ui.label(
            RichText::new(format!("R² Score: {:.6}", evaluation.r2()))
                .size(13.0)
                .strong(),
        );

        ui.add_space(8.0);
        ui.checkbox(&mut self.show_coefficients, "Coefficients");
        if self.show_coefficients {
            ChartPlotter::draw_coefficient_table(ui, &evaluation.model);
        }

        ui.add_space(10.0);
        ui.separator();

        ui.checkbox(&mut self.show_stats, "Descriptive statistics");
        if self.show_stats {
            ChartPlotter::draw_stats_table(ui, &report.stats);
        }

        if !report.charts.is_empty() {
            ui.add_space(10.0);
            ui.separator();
            ui.label(RichText::new("🖼 Saved charts").size(14.0).strong());
            for path in &report.charts {
                ui.label(RichText::new(path.display().to_string()).size(11.0));
            }
        }
    }
}

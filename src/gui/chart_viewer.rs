//! Chart Viewer Widget
//! Central scrollable panel with the trend chart and the correlation heatmap.

use crate::charts::{ChartPlotter, TrendChartData};
use crate::stats::CorrelationMatrix;
use egui::{RichText, ScrollArea};

const TREND_HEIGHT: f32 = 420.0;
const HEATMAP_CELL: f32 = 110.0;
const CARD_SPACING: f32 = 15.0;

pub struct ChartViewer {
    trend: Option<TrendChartData>,
    correlation: CorrelationMatrix,
}

impl ChartViewer {
    pub fn new(trend: Option<TrendChartData>, correlation: CorrelationMatrix) -> Self {
        Self { trend, correlation }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        let Some(trend) = &self.trend else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                Self::card(ui, "GDP Growth Over Time by Country", |ui| {
                    ChartPlotter::draw_trend_chart(ui, trend, TREND_HEIGHT);
                });
                ui.add_space(CARD_SPACING);
                Self::card(ui, "Correlation Matrix", |ui| {
                    ChartPlotter::draw_heatmap(ui, &self.correlation, HEATMAP_CELL);
                });
            });
    }

    fn card(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new(title).size(18.0).strong());
                ui.add_space(8.0);
                add_contents(ui);
            });
    }
}

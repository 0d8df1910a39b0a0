//! Chart Plotter Module
//! Interactive versions of the charts and result tables, drawn with egui_plot.

use crate::charts::series::{diverging_color, palette_color, TrendChartData};
use crate::data::{Indicator, MissingReport};
use crate::model::LinearModel;
use crate::stats::{CorrelationMatrix, IndicatorStats};
use chrono::Duration;
use egui::{Align2, Color32, FontId, RichText};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

/// Width reserved for row labels in the heatmap.
const HEATMAP_LABEL_WIDTH: f32 = 150.0;

/// Draws charts and tables inside an egui `Ui`.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn country_color(index: usize) -> Color32 {
        let (r, g, b) = palette_color(index);
        Color32::from_rgb(r, g, b)
    }

    /// GDP growth over time, one line per country.
    /// X-axis: days since the earliest date, labelled as calendar dates.
    pub fn draw_trend_chart(ui: &mut egui::Ui, trend: &TrendChartData, height: f32) {
        let origin = trend.origin;

        Plot::new("gdp_growth_trend")
            .height(height)
            .legend(Legend::default())
            .x_axis_label("Date")
            .y_axis_label(Indicator::GdpGrowth.label())
            .allow_scroll(false)
            .x_axis_formatter(move |mark, _range| {
                (origin + Duration::days(mark.value.round() as i64))
                    .format("%Y-%m-%d")
                    .to_string()
            })
            .show(ui, |plot_ui| {
                for (idx, series) in trend.series.iter().enumerate() {
                    let color = Self::country_color(idx);
                    let points: Vec<[f64; 2]> = trend
                        .points(series)
                        .into_iter()
                        .map(|(x, y)| [x, y])
                        .collect();

                    plot_ui.line(
                        Line::new(PlotPoints::from(points.clone()))
                            .color(color)
                            .width(2.0)
                            .name(&series.country),
                    );
                    plot_ui.points(
                        Points::new(PlotPoints::from(points))
                            .radius(3.0)
                            .color(color)
                            .name(&series.country),
                    );
                }
            });
    }

    /// Correlation matrix as a painted grid of coloured, annotated cells.
    pub fn draw_heatmap(ui: &mut egui::Ui, correlation: &CorrelationMatrix, cell: f32) {
        let n = correlation.size();
        let desired = egui::vec2(
            HEATMAP_LABEL_WIDTH + cell * n as f32,
            cell * n as f32 + 24.0,
        );
        let (rect, _) = ui.allocate_exact_size(desired, egui::Sense::hover());
        let painter = ui.painter_at(rect);
        let text_color = ui.visuals().text_color();
        let grid_left = rect.left() + HEATMAP_LABEL_WIDTH;

        for (i, row) in correlation.values.iter().enumerate() {
            let top = rect.top() + i as f32 * cell;
            painter.text(
                egui::pos2(grid_left - 8.0, top + cell / 2.0),
                Align2::RIGHT_CENTER,
                correlation.indicators[i].column_name(),
                FontId::proportional(12.0),
                text_color,
            );

            for (j, &v) in row.iter().enumerate() {
                let cell_rect = egui::Rect::from_min_size(
                    egui::pos2(grid_left + j as f32 * cell, top),
                    egui::vec2(cell, cell),
                )
                .shrink(1.0);
                let (r, g, b) = diverging_color(v);
                painter.rect_filled(cell_rect, 2.0, Color32::from_rgb(r, g, b));

                let label = if v.is_nan() {
                    "n/a".to_string()
                } else {
                    format!("{:.2}", v)
                };
                let label_color = if v.abs() > 0.6 {
                    Color32::WHITE
                } else {
                    Color32::BLACK
                };
                painter.text(
                    cell_rect.center(),
                    Align2::CENTER_CENTER,
                    label,
                    FontId::proportional(14.0),
                    label_color,
                );
            }
        }

        let bottom = rect.top() + n as f32 * cell + 12.0;
        for (j, indicator) in correlation.indicators.iter().enumerate() {
            painter.text(
                egui::pos2(grid_left + (j as f32 + 0.5) * cell, bottom),
                Align2::CENTER_CENTER,
                indicator.column_name(),
                FontId::proportional(11.0),
                text_color,
            );
        }
    }

    /// Per-column missing counts.
    pub fn draw_missing_table(ui: &mut egui::Ui, report: &MissingReport) {
        egui::Grid::new("missing_table")
            .striped(true)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                ui.label(RichText::new("Column").strong());
                ui.label(RichText::new("Missing").strong());
                ui.end_row();

                for c in &report.columns {
                    ui.label(&c.column);
                    let text = RichText::new(c.missing.to_string());
                    ui.label(if c.missing > 0 {
                        text.color(Color32::from_rgb(220, 53, 69))
                    } else {
                        text
                    });
                    ui.end_row();
                }
            });
        ui.label(format!(
            "{} of {} rows kept",
            report.rows_after, report.rows_before
        ));
    }

    /// Descriptive statistics for the numeric indicators.
    pub fn draw_stats_table(ui: &mut egui::Ui, stats: &[IndicatorStats]) {
        egui::Grid::new("stats_table")
            .striped(true)
            .min_col_width(45.0)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                for header in ["Indicator", "N", "Mean", "Median", "Std", "Min", "Max"] {
                    ui.label(RichText::new(header).strong().size(11.0));
                }
                ui.end_row();

                for s in stats {
                    ui.label(RichText::new(s.indicator.column_name()).size(11.0));
                    ui.label(RichText::new(s.count.to_string()).size(11.0));
                    for v in [s.mean, s.median, s.std, s.min, s.max] {
                        ui.label(RichText::new(format!("{:.3}", v)).size(11.0));
                    }
                    ui.end_row();
                }
            });
    }

    /// Coefficient table with significant p-values highlighted.
    pub fn draw_coefficient_table(ui: &mut egui::Ui, model: &LinearModel) {
        let default_text_color = ui.visuals().text_color();

        egui::Grid::new("coefficient_table")
            .striped(true)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                for header in ["Term", "Estimate", "Std. Error", "t", "P-value"] {
                    ui.label(RichText::new(header).strong().size(11.0));
                }
                ui.end_row();

                for c in &model.coefficients {
                    ui.label(RichText::new(&c.name).size(11.0));
                    ui.label(RichText::new(format!("{:.4}", c.estimate)).size(11.0));
                    ui.label(RichText::new(format!("{:.4}", c.std_error)).size(11.0));
                    ui.label(RichText::new(format!("{:.3}", c.t_value)).size(11.0));

                    let p_color = if c.is_significant() {
                        Color32::from_rgb(220, 53, 69)
                    } else {
                        default_text_color
                    };
                    ui.label(
                        RichText::new(format!("{:.4}", c.p_value))
                            .size(11.0)
                            .color(p_color),
                    );
                    ui.end_row();
                }
            });
    }
}

//! Main Application Window
//! Single window showing the stacked bar chart for the embedded dataset.

use crate::charts::{ChartPlotter, StackedBarData};
use egui::RichText;

pub const CHART_TITLE: &str = "Brain Tumor Image Dataset (Training vs Testing)";
pub const X_AXIS_LABEL: &str = "Tumor Class";
pub const Y_AXIS_LABEL: &str = "Number of Images";
pub const LEGEND_TITLE: &str = "Subset";

/// Main application window.
pub struct TumorVizApp {
    chart: StackedBarData,
}

impl TumorVizApp {
    pub fn new(chart: StackedBarData) -> Self {
        Self { chart }
    }

    /// Legend row: title plus one colored square per series, in
    /// stacking order.
    fn draw_legend(ui: &mut egui::Ui, chart: &StackedBarData) {
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("{}:", LEGEND_TITLE)).size(13.0).strong());
            for (k, series) in chart.series.iter().enumerate() {
                let color = ChartPlotter::series_color(k);
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, 3.0, color);
                ui.label(RichText::new(&series.name).size(13.0));
                ui.add_space(12.0);
            }
        });
    }
}

impl eframe::App for TumorVizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical(|ui| {
                ui.add_space(6.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(CHART_TITLE).size(18.0).strong());
                });

                ui.add_space(8.0);
                Self::draw_legend(ui, &self.chart);
                ui.add_space(10.0);

                ChartPlotter::draw_stacked_bar_chart(
                    ui,
                    &self.chart,
                    X_AXIS_LABEL,
                    Y_AXIS_LABEL,
                );
            });
        });
    }
}

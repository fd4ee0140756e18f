//! Chart Plotter Module
//! Draws the stacked bar chart using egui_plot.

use crate::data::{DatasetTable, TableError};
use egui::Color32;
use egui_plot::{Bar, BarChart, Plot};

/// Color palette for series, in stacking order.
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(52, 152, 219),  // Blue
    Color32::from_rgb(243, 156, 18),  // Orange
    Color32::from_rgb(46, 204, 113),  // Green
    Color32::from_rgb(231, 76, 60),   // Red
    Color32::from_rgb(155, 89, 182),  // Purple
    Color32::from_rgb(26, 188, 156),  // Teal
    Color32::from_rgb(233, 30, 99),   // Pink
    Color32::from_rgb(0, 188, 212),   // Cyan
    Color32::from_rgb(121, 85, 72),   // Brown
    Color32::from_rgb(96, 125, 139),  // Blue Grey
];

const BAR_WIDTH: f64 = 0.6;

/// One series of stacked segments: the raw values plus the cumulative
/// base each segment starts at.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSegments {
    pub name: String,
    pub values: Vec<f64>,
    /// Per category, the sum of all prior series' values.
    pub bases: Vec<f64>,
}

impl SeriesSegments {
    /// Segment (start, end) for the category at `idx`.
    pub fn bounds(&self, idx: usize) -> (f64, f64) {
        (self.bases[idx], self.bases[idx] + self.values[idx])
    }
}

/// Chart-ready stacked bar data: one bar per category, one segment per
/// series, stacked in series declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedBarData {
    pub categories: Vec<String>,
    pub series: Vec<SeriesSegments>,
}

impl StackedBarData {
    /// Compute stacking from a table. Segment k for category i starts at
    /// the sum of series 0..k at i and extends by series k's value.
    pub fn from_table(table: &DatasetTable) -> Result<Self, TableError> {
        let mut stack_base = vec![0.0; table.category_count()];
        let mut series = Vec::with_capacity(table.series_names().len());

        for name in table.series_names() {
            let values = table.series_values(name)?;
            let bases = stack_base.clone();
            for (base, value) in stack_base.iter_mut().zip(values.iter()) {
                *base += value;
            }
            series.push(SeriesSegments {
                name: name.clone(),
                values,
                bases,
            });
        }

        Ok(Self {
            categories: table.categories().to_vec(),
            series,
        })
    }

    /// Top of the stack for the category at `idx`.
    pub fn stack_top(&self, idx: usize) -> f64 {
        self.series
            .last()
            .map(|s| s.bases[idx] + s.values[idx])
            .unwrap_or(0.0)
    }
}

/// Creates the stacked bar visualization using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Get color for a series by stacking position.
    pub fn series_color(series_index: usize) -> Color32 {
        PALETTE[series_index % PALETTE.len()]
    }

    /// Draw the stacked bar chart.
    /// X-axis: categories (one bar each), Y-axis: counts.
    pub fn draw_stacked_bar_chart(
        ui: &mut egui::Ui,
        data: &StackedBarData,
        x_label: &str,
        y_label: &str,
    ) {
        let x_labels: Vec<String> = data.categories.clone();

        Plot::new("dataset_stacked_bars")
            .height(460.0)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label(x_label)
            .y_axis_label(y_label)
            .include_y(0.0)
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if (mark.value - idx as f64).abs() < 1e-6 && idx < x_labels.len() {
                    x_labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                let mut charts: Vec<BarChart> = Vec::new();

                for (k, series) in data.series.iter().enumerate() {
                    let bars: Vec<Bar> = series
                        .values
                        .iter()
                        .enumerate()
                        .map(|(i, &value)| {
                            Bar::new(i as f64, value)
                                .width(BAR_WIDTH)
                                .name(&data.categories[i])
                        })
                        .collect();

                    let chart = BarChart::new(bars)
                        .color(Self::series_color(k))
                        .name(&series.name);

                    // Stack on top of every series drawn so far
                    let chart = {
                        let below: Vec<&BarChart> = charts.iter().collect();
                        if below.is_empty() {
                            chart
                        } else {
                            chart.stack_on(&below)
                        }
                    };
                    charts.push(chart);
                }

                for chart in charts {
                    plot_ui.bar_chart(chart);
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset;

    fn brain_tumor_chart() -> StackedBarData {
        let table = dataset::brain_tumor_table().unwrap();
        StackedBarData::from_table(&table).unwrap()
    }

    #[test]
    fn segments_stack_cumulatively() {
        let data = brain_tumor_chart();
        assert_eq!(data.series.len(), 2);

        let training = &data.series[0];
        let testing = &data.series[1];
        assert_eq!(training.name, "Training");
        assert_eq!(testing.name, "Testing");

        // Glioma: Training fills 0..1100, Testing sits on top up to 1321
        assert_eq!(training.bounds(0), (0.0, 1100.0));
        assert_eq!(testing.bounds(0), (1100.0, 1321.0));
    }

    #[test]
    fn stack_top_matches_table_sum() {
        let table = dataset::brain_tumor_table().unwrap();
        let data = StackedBarData::from_table(&table).unwrap();
        for i in 0..table.category_count() {
            assert_eq!(data.stack_top(i), table.stack_top(i).unwrap());
        }
    }

    #[test]
    fn categories_keep_chart_order() {
        let data = brain_tumor_chart();
        assert_eq!(
            data.categories,
            ["Glioma", "Meningioma", "No tumor", "Pituitary"]
        );
    }

    #[test]
    fn from_table_is_idempotent() {
        assert_eq!(brain_tumor_chart(), brain_tumor_chart());
    }
}

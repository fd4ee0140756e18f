//! TumorViz - Brain Tumor Image Dataset Viewer
//!
//! Displays the image counts of a four-class brain-tumor dataset as a
//! stacked bar chart (training vs testing split).

mod charts;
mod data;
mod gui;

use anyhow::Result;
use charts::StackedBarData;
use eframe::egui;
use gui::TumorVizApp;

fn main() -> Result<()> {
    env_logger::init();

    // Build the table and chart data up front; any inconsistency in the
    // embedded dataset aborts before a window is opened.
    let table = data::dataset::brain_tumor_table()?;
    log::info!(
        "dataset table built: {} classes, {} series",
        table.category_count(),
        table.series_names().len()
    );
    let chart = StackedBarData::from_table(&table)?;

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([600.0, 450.0])
            .with_title("Brain Tumor Image Dataset"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Brain Tumor Image Dataset",
        options,
        Box::new(move |_cc| Ok(Box::new(TumorVizApp::new(chart)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run GUI: {e}"))?;

    Ok(())
}

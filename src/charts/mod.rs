//! Charts module - Chart rendering

mod plotter;

pub use plotter::{ChartPlotter, SeriesSegments, StackedBarData};

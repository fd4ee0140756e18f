//! GUI module - User interface components

mod app;

pub use app::TumorVizApp;

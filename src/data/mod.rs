//! Data module - dataset constants and table construction

pub mod dataset;
mod table;

pub use table::{DatasetTable, TableError};

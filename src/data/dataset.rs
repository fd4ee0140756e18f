//! Brain Tumor Dataset Module
//! The literal image counts, embedded as constants.

use crate::data::table::{DatasetTable, TableError};

/// Tumor class names, in chart order.
pub const CLASS_NAMES: [&str; 4] = ["Glioma", "Meningioma", "No tumor", "Pituitary"];

/// Training image counts, one per class.
pub const TRAINING_COUNTS: [u32; 4] = [1100, 1144, 1241, 1370];

/// Testing image counts, one per class.
pub const TESTING_COUNTS: [u32; 4] = [221, 195, 216, 225];

pub const TRAINING_SERIES: &str = "Training";
pub const TESTING_SERIES: &str = "Testing";

/// Build the table for the brain-tumor dataset. Training stacks below
/// Testing, matching series declaration order.
pub fn brain_tumor_table() -> Result<DatasetTable, TableError> {
    DatasetTable::build(
        &CLASS_NAMES,
        &[
            (TRAINING_SERIES, TRAINING_COUNTS.to_vec()),
            (TESTING_SERIES, TESTING_COUNTS.to_vec()),
        ],
    )
}

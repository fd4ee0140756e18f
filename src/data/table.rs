//! Dataset Table Module
//! Validated construction of a category-indexed count table using Polars.

use polars::prelude::*;
use thiserror::Error;

/// Name of the category column in the backing DataFrame.
pub const CATEGORY_COL: &str = "class_name";

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("No categories given")]
    NoCategories,
    #[error("Duplicate category: {0}")]
    DuplicateCategory(String),
    #[error("Series '{series}' has {actual} values but there are {expected} categories")]
    LengthMismatch {
        series: String,
        expected: usize,
        actual: usize,
    },
    #[error("Unknown series: {0}")]
    UnknownSeries(String),
}

/// A table mapping each category to one count per series.
///
/// Backed by a DataFrame with the category column first and one column
/// per series, in declaration order. Value-to-category mapping is by
/// position, so every series must have exactly one value per category.
#[derive(Debug, Clone)]
pub struct DatasetTable {
    df: DataFrame,
    categories: Vec<String>,
    series_names: Vec<String>,
}

impl DatasetTable {
    /// Build a table from an ordered list of unique category names and
    /// named series of per-category counts.
    pub fn build(categories: &[&str], series: &[(&str, Vec<u32>)]) -> Result<Self, TableError> {
        if categories.is_empty() {
            return Err(TableError::NoCategories);
        }

        for (i, name) in categories.iter().enumerate() {
            if categories[..i].contains(name) {
                return Err(TableError::DuplicateCategory((*name).to_string()));
            }
        }

        for (name, values) in series {
            if values.len() != categories.len() {
                return Err(TableError::LengthMismatch {
                    series: (*name).to_string(),
                    expected: categories.len(),
                    actual: values.len(),
                });
            }
        }

        let category_names: Vec<String> = categories.iter().map(|s| s.to_string()).collect();

        let mut columns = vec![Column::new(CATEGORY_COL.into(), category_names.clone())];
        for (name, values) in series {
            columns.push(Column::new((*name).into(), values.clone()));
        }
        let df = DataFrame::new(columns)?;

        Ok(Self {
            df,
            categories: category_names,
            series_names: series.iter().map(|(name, _)| (*name).to_string()).collect(),
        })
    }

    /// Category names in declaration order (left-to-right bar order).
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Series names in declaration order (bottom-to-top stacking order).
    pub fn series_names(&self) -> &[String] {
        &self.series_names
    }

    /// Number of categories (rows).
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// All values of one series, in category order.
    pub fn series_values(&self, series: &str) -> Result<Vec<f64>, TableError> {
        if !self.series_names.iter().any(|s| s == series) {
            return Err(TableError::UnknownSeries(series.to_string()));
        }
        let col = self.df.column(series)?;
        let values = col.cast(&DataType::Float64)?;
        Ok(values.f64()?.into_no_null_iter().collect())
    }

    /// All per-series values for the category at `idx`, in series order.
    pub fn row(&self, idx: usize) -> Result<Vec<f64>, TableError> {
        let mut row = Vec::with_capacity(self.series_names.len());
        for series in &self.series_names {
            let values = self.series_values(series)?;
            row.push(values[idx]);
        }
        Ok(row)
    }

    /// Sum of all series for the category at `idx` (top of its stack).
    pub fn stack_top(&self, idx: usize) -> Result<f64, TableError> {
        Ok(self.row(idx)?.iter().sum())
    }

    /// The backing DataFrame.
    pub fn frame(&self) -> &DataFrame {
        &self.df
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset;

    #[test]
    fn builds_table_with_one_row_per_category() {
        let table = dataset::brain_tumor_table().unwrap();
        assert_eq!(table.category_count(), 4);
        assert_eq!(table.frame().height(), 4);
        // category column + one column per series
        assert_eq!(table.frame().width(), 3);
    }

    #[test]
    fn literal_dataset_contents() {
        let table = dataset::brain_tumor_table().unwrap();
        let expected = [
            ("Glioma", 1100.0, 221.0),
            ("Meningioma", 1144.0, 195.0),
            ("No tumor", 1241.0, 216.0),
            ("Pituitary", 1370.0, 225.0),
        ];
        for (i, (name, training, testing)) in expected.iter().enumerate() {
            assert_eq!(table.categories()[i], *name);
            assert_eq!(table.row(i).unwrap(), vec![*training, *testing]);
        }
    }

    #[test]
    fn stack_top_is_sum_of_series() {
        let table = dataset::brain_tumor_table().unwrap();
        assert_eq!(table.stack_top(0).unwrap(), 1321.0);
        assert_eq!(table.stack_top(1).unwrap(), 1339.0);
        assert_eq!(table.stack_top(2).unwrap(), 1457.0);
        assert_eq!(table.stack_top(3).unwrap(), 1595.0);
    }

    #[test]
    fn rejects_series_length_mismatch() {
        let result = DatasetTable::build(
            &["A", "B", "C", "D"],
            &[("Training", vec![1, 2, 3])],
        );
        assert!(matches!(
            result,
            Err(TableError::LengthMismatch {
                expected: 4,
                actual: 3,
                ..
            })
        ));
    }

    #[test]
    fn rejects_duplicate_categories() {
        let result = DatasetTable::build(&["A", "B", "A"], &[("Training", vec![1, 2, 3])]);
        assert!(matches!(result, Err(TableError::DuplicateCategory(name)) if name == "A"));
    }

    #[test]
    fn rejects_empty_categories() {
        let result = DatasetTable::build(&[], &[("Training", Vec::new())]);
        assert!(matches!(result, Err(TableError::NoCategories)));
    }

    #[test]
    fn rejects_unknown_series_lookup() {
        let table = dataset::brain_tumor_table().unwrap();
        assert!(matches!(
            table.series_values("Validation"),
            Err(TableError::UnknownSeries(_))
        ));
    }

    #[test]
    fn preserves_declaration_order() {
        let table = DatasetTable::build(
            &["Zebra", "Apple", "Mango"],
            &[("Training", vec![3, 1, 2])],
        )
        .unwrap();
        assert_eq!(table.categories(), ["Zebra", "Apple", "Mango"]);
        assert_eq!(table.series_values("Training").unwrap(), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn build_is_idempotent() {
        let a = dataset::brain_tumor_table().unwrap();
        let b = dataset::brain_tumor_table().unwrap();
        assert!(a.frame().equals(b.frame()));
        assert_eq!(a.categories(), b.categories());
        assert_eq!(a.series_names(), b.series_names());
    }
}

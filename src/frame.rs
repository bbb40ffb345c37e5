//! Columnar string data frame.
//!
//! The encoder treats its input as a read-only grid of display strings; any
//! numeric formatting happens upstream. Columns are stored by name in
//! insertion order and every cell is an owned `String`.

use crate::common::{Error, Result};

/// A named column of string cells.
#[derive(Debug, Clone, PartialEq)]
struct Column {
    name: String,
    values: Vec<String>,
}

/// Owned columnar container used as the document data source.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataFrame {
    columns: Vec<Column>,
}

impl DataFrame {
    /// Build a frame from (name, values) pairs.
    ///
    /// All columns must have the same length.
    pub fn from_columns<N, V>(columns: Vec<(N, Vec<V>)>) -> Result<Self>
    where
        N: Into<String>,
        V: Into<String>,
    {
        let mut out = Vec::with_capacity(columns.len());
        let mut expected: Option<usize> = None;
        for (name, values) in columns {
            let name = name.into();
            let values: Vec<String> = values.into_iter().map(Into::into).collect();
            match expected {
                None => expected = Some(values.len()),
                Some(len) if len != values.len() => {
                    return Err(Error::ColumnLengthMismatch {
                        column: name,
                        got: values.len(),
                        expected: len,
                    });
                }
                _ => {}
            }
            out.push(Column { name, values });
        }
        Ok(Self { columns: out })
    }

    /// Number of data rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.columns.first().map(|c| c.values.len()).unwrap_or(0)
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    /// Whether the frame holds no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nrows() == 0
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Index of a named column.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Whether a named column exists.
    #[inline]
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell value at (row, col).
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> &str {
        &self.columns[col].values[row]
    }

    /// Cell value by column name.
    pub fn cell_by_name(&self, row: usize, name: &str) -> Option<&str> {
        self.column_index(name).map(|col| self.cell(row, col))
    }

    /// Replace a cell value.
    pub(crate) fn set_cell(&mut self, row: usize, col: usize, value: impl Into<String>) {
        self.columns[col].values[row] = value.into();
    }

    /// Contiguous row slice `[start, start + len)` as a new frame.
    pub fn slice(&self, start: usize, len: usize) -> Self {
        let end = (start + len).min(self.nrows());
        let start = start.min(end);
        Self {
            columns: self
                .columns
                .iter()
                .map(|c| Column {
                    name: c.name.clone(),
                    values: c.values[start..end].to_vec(),
                })
                .collect(),
        }
    }

    /// New frame without the named columns.
    pub fn drop_columns(&self, names: &[String]) -> Self {
        Self {
            columns: self
                .columns
                .iter()
                .filter(|c| !names.iter().any(|n| *n == c.name))
                .cloned()
                .collect(),
        }
    }

    /// Values of one row as owned strings.
    pub fn row(&self, row: usize) -> Vec<String> {
        self.columns.iter().map(|c| c.values[row].clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataFrame {
        DataFrame::from_columns(vec![
            ("Subject", vec!["S1", "S1", "S2"]),
            ("ID", vec!["001", "002", "003"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_shape_and_access() {
        let df = sample();
        assert_eq!(df.nrows(), 3);
        assert_eq!(df.ncols(), 2);
        assert_eq!(df.cell(0, 0), "S1");
        assert_eq!(df.cell(2, 1), "003");
        assert_eq!(df.cell_by_name(1, "ID"), Some("002"));
        assert_eq!(df.column_names(), vec!["Subject", "ID"]);
    }

    #[test]
    fn test_length_mismatch() {
        let result = DataFrame::from_columns(vec![
            ("A", vec!["1", "2"]),
            ("B", vec!["x"]),
        ]);
        assert!(matches!(result, Err(Error::ColumnLengthMismatch { .. })));
    }

    #[test]
    fn test_slice() {
        let df = sample();
        let part = df.slice(1, 2);
        assert_eq!(part.nrows(), 2);
        assert_eq!(part.cell(0, 1), "002");
        assert_eq!(part.cell(1, 0), "S2");

        // Out-of-range slices clamp rather than panic
        let tail = df.slice(2, 10);
        assert_eq!(tail.nrows(), 1);
        let empty = df.slice(5, 2);
        assert_eq!(empty.nrows(), 0);
    }

    #[test]
    fn test_drop_columns() {
        let df = sample();
        let dropped = df.drop_columns(&["Subject".to_string()]);
        assert_eq!(dropped.ncols(), 1);
        assert_eq!(dropped.column_names(), vec!["ID"]);
        assert_eq!(dropped.nrows(), 3);
    }

    #[test]
    fn test_empty_frame() {
        let df = DataFrame::default();
        assert_eq!(df.nrows(), 0);
        assert_eq!(df.ncols(), 0);
        assert!(df.is_empty());
    }
}

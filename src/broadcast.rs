//! Broadcastable attribute containers.
//!
//! Every per-cell attribute (font, size, borders, justification, ...) may be
//! supplied as a scalar, a row vector, or a full matrix. Reads index the
//! stored shape modularly, so a scalar tiles the whole table and a row
//! vector repeats down the rows. Nothing is materialized until a mutation
//! targets a specific row or cell.

/// A value broadcastable over an (R, C) table.
#[derive(Debug, Clone, PartialEq)]
pub enum BroadcastValue<T> {
    /// One value for every cell
    Scalar(T),
    /// One row of values, repeated down the table
    Row(Vec<T>),
    /// A full matrix, tiled modularly when smaller than the target
    Matrix(Vec<Vec<T>>),
}

impl<T: Clone> BroadcastValue<T> {
    /// Stored shape: (rows, cols) of the backing data.
    pub fn shape(&self) -> (usize, usize) {
        match self {
            Self::Scalar(_) => (1, 1),
            Self::Row(row) => (1, row.len().max(1)),
            Self::Matrix(rows) => (
                rows.len().max(1),
                rows.first().map(|r| r.len()).unwrap_or(0).max(1),
            ),
        }
    }

    /// Iterate the stored values without materializing.
    pub fn stored(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        match self {
            Self::Scalar(v) => Box::new(std::iter::once(v)),
            Self::Row(values) => Box::new(values.iter()),
            Self::Matrix(rows) => Box::new(rows.iter().flatten()),
        }
    }

    /// Value at (row, col) under modular broadcasting.
    pub fn at(&self, row: usize, col: usize) -> &T {
        match self {
            Self::Scalar(v) => v,
            Self::Row(values) => &values[col % values.len()],
            Self::Matrix(rows) => {
                let r = &rows[row % rows.len()];
                &r[col % r.len()]
            }
        }
    }

    /// Expand to a full (rows, cols) matrix.
    pub fn materialize(&self, rows: usize, cols: usize) -> Vec<Vec<T>> {
        (0..rows)
            .map(|r| (0..cols).map(|c| self.at(r, c).clone()).collect())
            .collect()
    }

    /// Replace one row, materializing to the given shape first.
    ///
    /// `row_values` shorter than `cols` are broadcast modularly across the
    /// row; the result is always a full matrix.
    pub fn update_row(&mut self, rows: usize, cols: usize, row: usize, row_values: &[T]) {
        let mut matrix = self.materialize(rows, cols);
        if row < matrix.len() && !row_values.is_empty() {
            for (c, cell) in matrix[row].iter_mut().enumerate() {
                *cell = row_values[c % row_values.len()].clone();
            }
        }
        *self = Self::Matrix(matrix);
    }

    /// Replace one column, materializing to the given shape first.
    pub fn update_column(&mut self, rows: usize, cols: usize, col: usize, col_values: &[T]) {
        let mut matrix = self.materialize(rows, cols);
        if col < cols && !col_values.is_empty() {
            for (r, matrix_row) in matrix.iter_mut().enumerate() {
                matrix_row[col] = col_values[r % col_values.len()].clone();
            }
        }
        *self = Self::Matrix(matrix);
    }

    /// Replace a single cell, materializing to the given shape first.
    pub fn update_cell(&mut self, rows: usize, cols: usize, row: usize, col: usize, value: T) {
        let mut matrix = self.materialize(rows, cols);
        if row < matrix.len() && col < matrix[row].len() {
            matrix[row][col] = value;
        }
        *self = Self::Matrix(matrix);
    }
}

impl<T: Clone> From<T> for BroadcastValue<T> {
    fn from(value: T) -> Self {
        Self::Scalar(value)
    }
}

impl<T: Clone> From<Vec<T>> for BroadcastValue<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Row(values)
    }
}

impl<T: Clone> From<Vec<Vec<T>>> for BroadcastValue<T> {
    fn from(rows: Vec<Vec<T>>) -> Self {
        Self::Matrix(rows)
    }
}

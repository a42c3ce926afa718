//! Dense matrix container
//!
//! A fixed-shape, mutable-content grid of `f64` values backed by an owned
//! row-major `ndarray::Array2`. Every derived view (`get_col`, `get_row`,
//! `to_packed_array`) is an independent copy.
//!
//! The arithmetic lives in [`math`] as free functions over `Matrix` values.

pub mod math;

use std::fmt;

use ndarray::{Array2, Axis};

use crate::error::MatrixError;

/// Dense rectangular matrix of real values
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    /// Backing store: shape [rows, cols]
    data: Array2<f64>,
}

impl Matrix {
    /// Create a `rows x cols` matrix filled with zeros
    ///
    /// # Example
    ///
    /// ```rust
    /// use hopfield_memory::Matrix;
    ///
    /// let m = Matrix::new(2, 3).unwrap();
    /// assert_eq!((m.rows(), m.cols()), (2, 3));
    /// assert!(m.is_zero());
    /// ```
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidShape { rows, cols });
        }

        Ok(Self {
            data: Array2::zeros((rows, cols)),
        })
    }

    /// Wrap an existing grid verbatim
    pub fn from_array(data: Array2<f64>) -> Result<Self, MatrixError> {
        let (rows, cols) = data.dim();
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidShape { rows, cols });
        }

        Ok(Self { data })
    }

    /// Build a matrix from row-major packed values
    pub fn from_packed_array(rows: usize, cols: usize, values: &[f64]) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidShape { rows, cols });
        }
        if values.len() != rows * cols {
            return Err(MatrixError::PackedLength {
                expected: rows * cols,
                actual: values.len(),
            });
        }

        let data = Array2::from_shape_vec((rows, cols), values.to_vec()).map_err(|_| {
            MatrixError::PackedLength {
                expected: rows * cols,
                actual: values.len(),
            }
        })?;

        Ok(Self { data })
    }

    /// Build a `1 x n` matrix from a sequence of values
    pub fn create_row_matrix(values: &[f64]) -> Result<Self, MatrixError> {
        Self::from_packed_array(1, values.len(), values)
    }

    /// Build an `n x 1` matrix from a sequence of values
    pub fn create_column_matrix(values: &[f64]) -> Result<Self, MatrixError> {
        Self::from_packed_array(values.len(), 1, values)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Shape as `(rows, cols)`
    pub fn dim(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Total number of cells
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Read-only view of the backing array
    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }

    fn check_index(&self, row: usize, col: usize) -> Result<(), MatrixError> {
        if row >= self.rows() || col >= self.cols() {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(())
    }

    /// Value at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Result<f64, MatrixError> {
        self.check_index(row, col)?;
        Ok(self.data[[row, col]])
    }

    /// Overwrite the value at `(row, col)`
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), MatrixError> {
        self.check_index(row, col)?;
        self.data[[row, col]] = value;
        Ok(())
    }

    /// Copy of column `col` as a `rows x 1` matrix
    pub fn get_col(&self, col: usize) -> Result<Matrix, MatrixError> {
        if col >= self.cols() {
            return Err(MatrixError::IndexOutOfBounds {
                row: 0,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }

        let column = self.data.index_axis(Axis(1), col).to_owned();
        let data = column.insert_axis(Axis(1));
        Ok(Self { data })
    }

    /// Copy of row `row` as a `1 x cols` matrix
    pub fn get_row(&self, row: usize) -> Result<Matrix, MatrixError> {
        if row >= self.rows() {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col: 0,
                rows: self.rows(),
                cols: self.cols(),
            });
        }

        let values = self.data.index_axis(Axis(0), row).to_owned();
        let data = values.insert_axis(Axis(0));
        Ok(Self { data })
    }

    /// True when the matrix has a single row or a single column
    pub fn is_vector(&self) -> bool {
        self.rows() == 1 || self.cols() == 1
    }

    /// True when every cell is exactly zero
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&v| v == 0.0)
    }

    /// Sum of all cells
    pub fn sum(&self) -> f64 {
        self.data.sum()
    }

    /// Reset every cell to zero
    pub fn clear(&mut self) {
        self.data.fill(0.0);
    }

    /// All cells flattened in row-major order
    pub fn to_packed_array(&self) -> Vec<f64> {
        self.data.iter().copied().collect()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.rows() {
            let cells: Vec<String> = row.iter().map(|v| format!("{:6.1}", v)).collect();
            writeln!(f, "[{}]", cells.join(" "))?;
        }
        Ok(())
    }
}

//! Matrix arithmetic
//!
//! Stateless linear-algebra primitives over [`Matrix`] values. Every function
//! returns a new matrix except [`copy`], which writes into its target.
//!
//! Shapes are checked up front: ndarray would broadcast a `1 x n` operand
//! against an `n x n` one, but a mismatch here is always reported as
//! [`MatrixError::DimensionMismatch`].

use ndarray::Array2;

use super::Matrix;
use crate::error::MatrixError;

fn require_same_shape(operation: &'static str, a: &Matrix, b: &Matrix) -> Result<(), MatrixError> {
    if a.dim() != b.dim() {
        return Err(MatrixError::DimensionMismatch {
            operation,
            left: a.dim(),
            right: b.dim(),
        });
    }
    Ok(())
}

/// Elementwise sum of two matrices of the same shape
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    require_same_shape("add", a, b)?;
    Ok(Matrix {
        data: &a.data + &b.data,
    })
}

/// Elementwise difference `a - b` of two matrices of the same shape
pub fn subtract(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    require_same_shape("subtract", a, b)?;
    Ok(Matrix {
        data: &a.data - &b.data,
    })
}

/// Multiply every cell by `scalar`
pub fn multiply_scalar(a: &Matrix, scalar: f64) -> Matrix {
    Matrix {
        data: a.data.mapv(|v| v * scalar),
    }
}

/// Standard matrix product
///
/// Requires `a.cols() == b.rows()`; the result is `a.rows() x b.cols()`.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    if a.cols() != b.rows() {
        return Err(MatrixError::DimensionMismatch {
            operation: "multiply",
            left: a.dim(),
            right: b.dim(),
        });
    }

    Ok(Matrix {
        data: a.data.dot(&b.data),
    })
}

/// Transpose: cell `(c, r)` of the result is cell `(r, c)` of the input
pub fn transpose(a: &Matrix) -> Matrix {
    Matrix {
        data: a.data.t().as_standard_layout().into_owned(),
    }
}

/// `n x n` identity matrix
pub fn identity(n: usize) -> Result<Matrix, MatrixError> {
    if n == 0 {
        return Err(MatrixError::InvalidShape { rows: 0, cols: 0 });
    }

    Ok(Matrix {
        data: Array2::eye(n),
    })
}

/// Sum of elementwise products of two vectors
///
/// Both operands must be vectors (one row or one column) with the same
/// number of elements; a row vector and a column vector may be mixed.
pub fn dot_product(a: &Matrix, b: &Matrix) -> Result<f64, MatrixError> {
    if !a.is_vector() || !b.is_vector() || a.size() != b.size() {
        return Err(MatrixError::DimensionMismatch {
            operation: "dot_product",
            left: a.dim(),
            right: b.dim(),
        });
    }

    Ok(a.data.iter().zip(b.data.iter()).map(|(x, y)| x * y).sum())
}

/// Overwrite `target`'s cells with `source`'s, in place
pub fn copy(source: &Matrix, target: &mut Matrix) -> Result<(), MatrixError> {
    require_same_shape("copy", source, target)?;
    target.data.assign(&source.data);
    Ok(())
}

//! Dense matrix primitives and centering helpers.
//!
//! Every routine borrows its inputs and returns a freshly allocated result.
//! Shape problems are reported through [`MatrixError`] instead of panicking
//! on an out-of-bounds index.

use faer::{Col, Mat};
use thiserror::Error;

/// Errors raised by the dense matrix routines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    #[error("matrix is empty ({rows}x{cols})")]
    Empty { rows: usize, cols: usize },

    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("dimension mismatch: left operand has {left_cols} columns but right operand has {right_rows} rows")]
    DimensionMismatch { left_cols: usize, right_rows: usize },

    #[error("matrix is singular: zero pivot in column {pivot}")]
    Singular { pivot: usize },
}

/// Return the transpose of `a`.
///
/// A matrix without rows (or columns) has no well-defined shape to flip
/// and is rejected with [`MatrixError::Empty`].
pub fn transpose(a: &Mat<f64>) -> Result<Mat<f64>, MatrixError> {
    ensure_non_empty(a)?;
    Ok(Mat::from_fn(a.ncols(), a.nrows(), |i, j| a[(j, i)]))
}

/// Matrix product `a * b`.
pub fn multiply(a: &Mat<f64>, b: &Mat<f64>) -> Result<Mat<f64>, MatrixError> {
    if a.ncols() != b.nrows() {
        return Err(MatrixError::DimensionMismatch {
            left_cols: a.ncols(),
            right_rows: b.nrows(),
        });
    }
    Ok(a * b)
}

/// Matrix-vector product `a * x`.
pub fn multiply_vector(a: &Mat<f64>, x: &Col<f64>) -> Result<Col<f64>, MatrixError> {
    if a.ncols() != x.nrows() {
        return Err(MatrixError::DimensionMismatch {
            left_cols: a.ncols(),
            right_rows: x.nrows(),
        });
    }
    Ok(a * x)
}

/// Prepend a column of ones to `x` (intercept column).
pub fn with_intercept_column(x: &Mat<f64>) -> Mat<f64> {
    Mat::from_fn(x.nrows(), x.ncols() + 1, |i, j| {
        if j == 0 {
            1.0
        } else {
            x[(i, j - 1)]
        }
    })
}

/// Center a matrix by subtracting column means.
pub fn center_columns(x: &Mat<f64>) -> (Mat<f64>, Col<f64>) {
    let n_rows = x.nrows();
    let n_cols = x.ncols();

    let mut means = Col::zeros(n_cols);
    let mut centered = Mat::zeros(n_rows, n_cols);

    if n_rows == 0 {
        return (centered, means);
    }

    for j in 0..n_cols {
        let sum: f64 = (0..n_rows).map(|i| x[(i, j)]).sum();
        means[j] = sum / n_rows as f64;

        for i in 0..n_rows {
            centered[(i, j)] = x[(i, j)] - means[j];
        }
    }

    (centered, means)
}

/// Center a vector by subtracting the mean.
pub fn center_vector(y: &Col<f64>) -> (Col<f64>, f64) {
    let n = y.nrows();
    if n == 0 {
        return (Col::zeros(0), 0.0);
    }
    let mean: f64 = y.iter().sum::<f64>() / n as f64;

    let centered = Col::from_fn(n, |i| y[i] - mean);

    (centered, mean)
}

pub(crate) fn ensure_non_empty(a: &Mat<f64>) -> Result<(), MatrixError> {
    if a.nrows() == 0 || a.ncols() == 0 {
        return Err(MatrixError::Empty {
            rows: a.nrows(),
            cols: a.ncols(),
        });
    }
    Ok(())
}

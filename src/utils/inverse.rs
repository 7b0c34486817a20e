//! Gauss-Jordan matrix inversion.

use super::matrix::{ensure_non_empty, MatrixError};
use faer::Mat;

/// Invert a square matrix by Gauss-Jordan elimination on `[A | I]`.
///
/// Pivots are taken from the diagonal in order, without row exchanges.
/// A pivot that is exactly `0.0` when its column is reached fails with
/// [`MatrixError::Singular`]. Near-singular matrices pass this test and may
/// produce very large entries; use [`invert_with_tolerance`] to reject them.
///
/// # Example
///
/// ```rust
/// use faer::Mat;
/// use statkit::utils::{invert, multiply};
///
/// let a = Mat::from_fn(2, 2, |i, j| if i == j { 2.0 } else { 1.0 });
/// let inv = invert(&a).unwrap();
/// let id = multiply(&inv, &a).unwrap();
/// assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
/// assert!(id[(0, 1)].abs() < 1e-12);
/// ```
pub fn invert(a: &Mat<f64>) -> Result<Mat<f64>, MatrixError> {
    invert_with_tolerance(a, 0.0)
}

/// Invert a square matrix, treating any pivot with `|pivot| <= tolerance`
/// as zero.
///
/// A tolerance of `0.0` reproduces the exact-zero test of [`invert`].
pub fn invert_with_tolerance(a: &Mat<f64>, tolerance: f64) -> Result<Mat<f64>, MatrixError> {
    ensure_non_empty(a)?;
    let n = a.nrows();
    if a.ncols() != n {
        return Err(MatrixError::NotSquare {
            rows: n,
            cols: a.ncols(),
        });
    }

    let width = 2 * n;
    let mut aug = Mat::from_fn(n, width, |i, j| {
        if j < n {
            a[(i, j)]
        } else if j - n == i {
            1.0
        } else {
            0.0
        }
    });

    for i in 0..n {
        let pivot = aug[(i, i)];
        if pivot.abs() <= tolerance {
            log::debug!("gauss-jordan: pivot {pivot} in column {i} rejected (tolerance {tolerance})");
            return Err(MatrixError::Singular { pivot: i });
        }

        for j in 0..width {
            aug[(i, j)] /= pivot;
        }

        for k in 0..n {
            if k == i {
                continue;
            }
            let factor = aug[(k, i)];
            if factor == 0.0 {
                continue;
            }
            for j in 0..width {
                let delta = factor * aug[(i, j)];
                aug[(k, j)] -= delta;
            }
        }
    }

    Ok(Mat::from_fn(n, n, |i, j| aug[(i, j + n)]))
}

//! Single-predictor least squares from closed-form sums.

use crate::solvers::traits::RegressionError;

/// Slope and intercept of a fitted line `y = slope·x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleLinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl SimpleLinearFit {
    /// Predicted value at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit `y = slope·x + intercept` by least squares.
///
/// slope = (nΣxy − ΣxΣy) / (nΣx² − (Σx)²), intercept = (Σy − slope·Σx) / n.
/// When every x is identical the denominator vanishes and the slope is
/// undefined; this is reported as [`RegressionError::SingularMatrix`].
pub fn simple_linear_regression(x: &[f64], y: &[f64]) -> Result<SimpleLinearFit, RegressionError> {
    if x.is_empty() {
        return Err(RegressionError::EmptyInput);
    }
    if x.len() != y.len() {
        return Err(RegressionError::DimensionMismatch {
            x_rows: x.len(),
            y_len: y.len(),
        });
    }

    let n = x.len() as f64;
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_x2) = (0.0, 0.0, 0.0, 0.0);
    for (&xi, &yi) in x.iter().zip(y) {
        sum_x += xi;
        sum_y += yi;
        sum_xy += xi * yi;
        sum_x2 += xi * xi;
    }

    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator == 0.0 {
        return Err(RegressionError::SingularMatrix);
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;

    Ok(SimpleLinearFit { slope, intercept })
}

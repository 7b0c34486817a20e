//! Prediction from a fitted coefficient vector.

use crate::solvers::RegressionError;
use faer::{Col, Mat};

/// Predict targets for the rows of `x` from `coefficients`, where
/// `coefficients[0]` is the intercept and `coefficients[j + 1]` the weight
/// of column `j`.
pub fn predict(coefficients: &Col<f64>, x: &Mat<f64>) -> Result<Col<f64>, RegressionError> {
    let n_features = x.ncols();
    if coefficients.nrows() != n_features + 1 {
        return Err(RegressionError::CoefficientMismatch {
            n_coefficients: coefficients.nrows(),
            n_features,
        });
    }

    Ok(Col::from_fn(x.nrows(), |i| {
        (0..n_features).fold(coefficients[0], |acc, j| acc + x[(i, j)] * coefficients[j + 1])
    }))
}

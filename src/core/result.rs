//! Regression result structures.

use crate::diagnostics::{mean_squared_error, r_squared};
use faer::{Col, Mat};

/// Result of a regression fit.
///
/// `coefficients` always has `n_features + 1` entries: index 0 is the
/// intercept and index `j + 1` is the weight of feature column `j`.
#[derive(Debug, Clone)]
pub struct RegressionResult {
    // ========== Core Results ==========
    /// Intercept followed by one weight per feature.
    pub coefficients: Col<f64>,

    /// Residuals (y - fitted_values).
    pub residuals: Col<f64>,

    /// Fitted values (predictions on training data).
    pub fitted_values: Col<f64>,

    /// Number of observations.
    pub n_observations: usize,

    /// Number of feature columns (excluding the intercept).
    pub n_features: usize,

    /// Coordinate-descent sweeps actually run (`None` for closed-form fits).
    pub iterations: Option<usize>,

    // ========== Fit Statistics ==========
    /// Mean squared error over the training data (RSS / n).
    pub mse: f64,

    /// Coefficient of determination (R²).
    pub r_squared: f64,
}

impl RegressionResult {
    /// Build a result from fitted coefficients, computing fitted values,
    /// residuals and fit statistics on the training data.
    pub(crate) fn from_coefficients(x: &Mat<f64>, y: &Col<f64>, coefficients: Col<f64>) -> Self {
        let n = x.nrows();
        let p = x.ncols();

        let fitted_values = Col::from_fn(n, |i| {
            (0..p).fold(coefficients[0], |acc, j| acc + x[(i, j)] * coefficients[j + 1])
        });
        let residuals = Col::from_fn(n, |i| y[i] - fitted_values[i]);

        let mse = mean_squared_error(y, &fitted_values);
        let r_squared = r_squared(y, &fitted_values);

        Self {
            coefficients,
            residuals,
            fitted_values,
            n_observations: n,
            n_features: p,
            iterations: None,
            mse,
            r_squared,
        }
    }

    /// The intercept term (coefficient 0).
    pub fn intercept(&self) -> f64 {
        self.coefficients[0]
    }

    /// Per-feature weights without the intercept.
    pub fn slopes(&self) -> Col<f64> {
        Col::from_fn(self.n_features, |j| self.coefficients[j + 1])
    }

    /// Root mean squared error.
    pub fn rmse(&self) -> f64 {
        self.mse.sqrt()
    }

    /// Residual sum of squares (RSS).
    pub fn rss(&self) -> f64 {
        self.residuals.iter().map(|&r| r.powi(2)).sum()
    }

    /// Count of non-zero feature weights.
    pub fn n_nonzero(&self) -> usize {
        (1..self.coefficients.nrows())
            .filter(|&j| self.coefficients[j] != 0.0)
            .count()
    }
}

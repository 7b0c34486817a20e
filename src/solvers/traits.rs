//! Core traits for regression estimators.

use crate::core::{predict, OptionsError, RegressionResult};
use crate::diagnostics::r_squared;
use crate::utils::MatrixError;
use faer::{Col, Mat};
use thiserror::Error;

/// Errors that can occur during regression fitting.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegressionError {
    #[error("empty input: X has no rows")]
    EmptyInput,

    #[error("dimension mismatch: X has {x_rows} rows but y has {y_len} elements")]
    DimensionMismatch { x_rows: usize, y_len: usize },

    #[error("coefficient mismatch: {n_coefficients} coefficients for {n_features} features (expected features + 1)")]
    CoefficientMismatch {
        n_coefficients: usize,
        n_features: usize,
    },

    #[error("matrix is singular: the normal equations cannot be inverted")]
    SingularMatrix,

    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] OptionsError),

    #[error("linear algebra error: {0}")]
    Matrix(MatrixError),
}

impl From<MatrixError> for RegressionError {
    fn from(err: MatrixError) -> Self {
        match err {
            MatrixError::Singular { .. } => RegressionError::SingularMatrix,
            other => RegressionError::Matrix(other),
        }
    }
}

/// Check the shared preconditions of every solver: at least one row, and
/// as many targets as rows.
pub(crate) fn validate_inputs(x: &Mat<f64>, y: &Col<f64>) -> Result<(), RegressionError> {
    if x.nrows() == 0 {
        return Err(RegressionError::EmptyInput);
    }
    if x.nrows() != y.nrows() {
        return Err(RegressionError::DimensionMismatch {
            x_rows: x.nrows(),
            y_len: y.nrows(),
        });
    }
    Ok(())
}

/// A regression estimator that can be fit to data.
///
/// Fitting returns a separate fitted model that can then make predictions.
pub trait Regressor {
    /// The type of the fitted model.
    type Fitted: FittedRegressor;

    /// Fit the model to the data.
    ///
    /// # Arguments
    /// * `x` - Design matrix of shape (n_samples, n_features), without an
    ///   intercept column
    /// * `y` - Target vector of length n_samples
    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Self::Fitted, RegressionError>;
}

/// A fitted regression model that can make predictions.
pub trait FittedRegressor {
    /// Access the regression results (coefficients, statistics, etc.).
    fn result(&self) -> &RegressionResult;

    /// Make predictions on new data.
    ///
    /// `x` must have the same number of columns as the training design.
    fn predict(&self, x: &Mat<f64>) -> Result<Col<f64>, RegressionError> {
        predict(&self.result().coefficients, x)
    }

    /// Intercept followed by per-feature weights.
    fn coefficients(&self) -> &Col<f64> {
        &self.result().coefficients
    }

    /// Get the intercept (convenience method).
    fn intercept(&self) -> f64 {
        self.result().intercept()
    }

    /// Get training R² (convenience method).
    fn r_squared(&self) -> f64 {
        self.result().r_squared
    }

    /// Calculate the score (R²) on new data.
    fn score(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<f64, RegressionError> {
        if x.nrows() != y.nrows() {
            return Err(RegressionError::DimensionMismatch {
                x_rows: x.nrows(),
                y_len: y.nrows(),
            });
        }
        let predictions = self.predict(x)?;
        Ok(r_squared(y, &predictions))
    }
}

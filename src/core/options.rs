//! Regression options and configuration.

use thiserror::Error;

/// Configuration options for the regression solvers.
///
/// The defaults reproduce the closed-form behavior of the solvers: an
/// exact-zero pivot test during inversion and a fixed number of lasso
/// sweeps with no early stop.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionOptions {
    /// Regularization strength λ (ridge: L2, lasso: L1). Ignored by OLS.
    pub lambda: f64,
    /// Number of coordinate-descent sweeps for lasso.
    pub max_iterations: usize,
    /// Optional early-stop threshold on the largest coefficient change in a
    /// sweep. `None` always runs `max_iterations` sweeps.
    pub tolerance: Option<f64>,
    /// Pivots with `|pivot| <= pivot_tolerance` are treated as zero when
    /// inverting the normal equations.
    pub pivot_tolerance: f64,
}

impl Default for RegressionOptions {
    fn default() -> Self {
        Self {
            lambda: 0.0,
            max_iterations: 1000,
            tolerance: None,
            pivot_tolerance: 0.0,
        }
    }
}

/// Errors that can occur when validating regression options.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionsError {
    #[error("lambda must be a non-negative finite number, got {0}")]
    InvalidLambda(f64),
    #[error("tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),
    #[error("pivot_tolerance must be a non-negative finite number, got {0}")]
    InvalidPivotTolerance(f64),
}

impl RegressionOptions {
    /// Create a new builder for regression options.
    pub fn builder() -> RegressionOptionsBuilder {
        RegressionOptionsBuilder::default()
    }

    /// Create default options for OLS regression.
    pub fn ols() -> Self {
        Self::default()
    }

    /// Create options for ridge regression with given lambda.
    pub fn ridge(lambda: f64) -> Self {
        Self {
            lambda,
            ..Default::default()
        }
    }

    /// Create options for lasso regression with given lambda and sweep count.
    pub fn lasso(lambda: f64, max_iterations: usize) -> Self {
        Self {
            lambda,
            max_iterations,
            ..Default::default()
        }
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.lambda.is_finite() || self.lambda < 0.0 {
            return Err(OptionsError::InvalidLambda(self.lambda));
        }
        if let Some(tol) = self.tolerance {
            if !tol.is_finite() || tol <= 0.0 {
                return Err(OptionsError::InvalidTolerance(tol));
            }
        }
        if !self.pivot_tolerance.is_finite() || self.pivot_tolerance < 0.0 {
            return Err(OptionsError::InvalidPivotTolerance(self.pivot_tolerance));
        }
        Ok(())
    }
}

/// Builder for `RegressionOptions`.
#[derive(Debug, Clone, Default)]
pub struct RegressionOptionsBuilder {
    options: RegressionOptions,
}

impl RegressionOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the regularization parameter (lambda).
    pub fn lambda(mut self, lambda: f64) -> Self {
        self.options.lambda = lambda;
        self
    }

    /// Set the number of coordinate-descent sweeps.
    pub fn max_iterations(mut self, max_iter: usize) -> Self {
        self.options.max_iterations = max_iter;
        self
    }

    /// Stop coordinate descent once a sweep changes no coefficient by more
    /// than `tol`.
    pub fn tolerance(mut self, tol: f64) -> Self {
        self.options.tolerance = Some(tol);
        self
    }

    /// Set the pivot tolerance used when inverting the normal equations.
    pub fn pivot_tolerance(mut self, tol: f64) -> Self {
        self.options.pivot_tolerance = tol;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<RegressionOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> RegressionOptions {
        self.options
    }
}

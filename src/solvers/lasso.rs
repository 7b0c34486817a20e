//! Lasso solver (L1 regularization) by cyclic coordinate descent.

use crate::core::{RegressionOptions, RegressionOptionsBuilder, RegressionResult};
use crate::solvers::traits::{validate_inputs, FittedRegressor, RegressionError, Regressor};
use crate::utils::{center_columns, center_vector};
use faer::{Col, Mat};

/// Lasso regression estimator using coordinate descent.
///
/// Minimizes: ||y - Xβ||² + λ||β||₁
///
/// X and y are centered, so the intercept drops out of the optimization and
/// is reconstructed afterwards. Each sweep visits every feature once and
/// applies the soft-thresholding update
///
/// ```text
/// β_j = (ρ_j + λ/2) / ‖x_j‖²   if ρ_j < −λ/2
///       (ρ_j − λ/2) / ‖x_j‖²   if ρ_j >  λ/2
///       0                      otherwise
/// ```
///
/// where ρ_j is the correlation of feature j with the partial residual that
/// excludes feature j. No matrix is inverted, so collinear features never
/// cause a failure.
///
/// Exactly `max_iterations` sweeps are run unless a tolerance is set, in
/// which case descent stops after the first sweep whose largest coefficient
/// change is at most the tolerance.
///
/// # Example
///
/// ```rust,ignore
/// use statkit::solvers::{LassoRegressor, Regressor, FittedRegressor};
///
/// let fitted = LassoRegressor::builder()
///     .lambda(1.0)
///     .max_iterations(500)
///     .tolerance(1e-9)
///     .build()
///     .fit(&x, &y)?;
///
/// println!("Non-zero coefficients: {}", fitted.n_nonzero());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LassoRegressor {
    options: RegressionOptions,
}

impl LassoRegressor {
    /// Create a new Lasso regressor with the given options.
    pub fn new(options: RegressionOptions) -> Self {
        Self { options }
    }

    /// Create a builder for configuring the regressor.
    pub fn builder() -> LassoRegressorBuilder {
        LassoRegressorBuilder::default()
    }

    /// Soft-thresholding update for one coordinate.
    fn soft_threshold(rho: f64, half_lambda: f64, norm: f64) -> f64 {
        if rho < -half_lambda {
            (rho + half_lambda) / norm
        } else if rho > half_lambda {
            (rho - half_lambda) / norm
        } else {
            0.0
        }
    }
}

impl Regressor for LassoRegressor {
    type Fitted = FittedLasso;

    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Self::Fitted, RegressionError> {
        validate_inputs(x, y)?;
        self.options.validate()?;

        let n_features = x.ncols();

        let (x_centered, x_means) = center_columns(x);
        let (y_centered, y_mean) = center_vector(y);

        let (slopes, sweeps) = self.coordinate_descent(&x_centered, &y_centered);

        let mut coefficients = Col::zeros(n_features + 1);
        let mut intercept = y_mean;
        for j in 0..n_features {
            intercept -= slopes[j] * x_means[j];
            coefficients[j + 1] = slopes[j];
        }
        coefficients[0] = intercept;

        let mut result = RegressionResult::from_coefficients(x, y, coefficients);
        result.iterations = Some(sweeps);

        Ok(FittedLasso {
            options: self.options.clone(),
            result,
        })
    }
}

impl LassoRegressor {
    /// Run coordinate descent on centered data.
    ///
    /// Returns the slopes and the number of sweeps performed.
    fn coordinate_descent(&self, x: &Mat<f64>, y: &Col<f64>) -> (Col<f64>, usize) {
        let n_samples = x.nrows();
        let n_features = x.ncols();
        let half_lambda = self.options.lambda / 2.0;

        let col_norms: Vec<f64> = (0..n_features)
            .map(|j| (0..n_samples).map(|i| x[(i, j)] * x[(i, j)]).sum())
            .collect();

        let mut beta = Col::zeros(n_features);
        // residuals = y - Xβ, kept in sync with every coordinate update
        let mut residuals = y.clone();
        let mut sweeps = 0;

        for _ in 0..self.options.max_iterations {
            sweeps += 1;
            let mut max_change = 0.0f64;

            for j in 0..n_features {
                let old = beta[j];
                let norm = col_norms[j];

                // A zero column has ρ_j = 0, which always thresholds to 0.
                let new = if norm == 0.0 {
                    0.0
                } else {
                    // ρ_j = x_jᵀ(y − X_{−j}β_{−j}) = x_jᵀr + ‖x_j‖²β_j
                    let mut rho = norm * old;
                    for i in 0..n_samples {
                        rho += x[(i, j)] * residuals[i];
                    }
                    Self::soft_threshold(rho, half_lambda, norm)
                };

                let delta = new - old;
                if delta != 0.0 {
                    for i in 0..n_samples {
                        residuals[i] -= x[(i, j)] * delta;
                    }
                }

                beta[j] = new;
                max_change = max_change.max(delta.abs());
            }

            if let Some(tol) = self.options.tolerance {
                if max_change <= tol {
                    log::debug!("lasso: converged after {sweeps} sweeps (max change {max_change:e})");
                    break;
                }
            }
        }

        log::trace!("lasso: {sweeps} sweeps over {n_features} features");
        (beta, sweeps)
    }
}

/// Fit lasso with penalty `lambda` using exactly `max_iterations`
/// coordinate-descent sweeps, and return the coefficient vector (intercept
/// first).
pub fn lasso_regression(
    x: &Mat<f64>,
    y: &Col<f64>,
    lambda: f64,
    max_iterations: usize,
) -> Result<Col<f64>, RegressionError> {
    let fitted = LassoRegressor::new(RegressionOptions::lasso(lambda, max_iterations)).fit(x, y)?;
    Ok(fitted.result.coefficients)
}

/// A fitted Lasso regression model.
#[derive(Debug, Clone)]
pub struct FittedLasso {
    options: RegressionOptions,
    result: RegressionResult,
}

impl FittedLasso {
    /// Get the options used to fit this model.
    pub fn options(&self) -> &RegressionOptions {
        &self.options
    }

    /// Number of non-zero feature weights.
    pub fn n_nonzero(&self) -> usize {
        self.result.n_nonzero()
    }

    /// Coordinate-descent sweeps actually run.
    pub fn iterations(&self) -> usize {
        self.result.iterations.unwrap_or(0)
    }
}

impl FittedRegressor for FittedLasso {
    fn result(&self) -> &RegressionResult {
        &self.result
    }
}

/// Builder for `LassoRegressor`.
#[derive(Debug, Clone, Default)]
pub struct LassoRegressorBuilder {
    builder: RegressionOptionsBuilder,
}

impl LassoRegressorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the regularization parameter (lambda).
    pub fn lambda(mut self, lambda: f64) -> Self {
        self.builder = self.builder.lambda(lambda);
        self
    }

    /// Set the number of coordinate-descent sweeps.
    pub fn max_iterations(mut self, max_iter: usize) -> Self {
        self.builder = self.builder.max_iterations(max_iter);
        self
    }

    /// Stop early once a sweep changes no coefficient by more than `tol`.
    pub fn tolerance(mut self, tol: f64) -> Self {
        self.builder = self.builder.tolerance(tol);
        self
    }

    /// Build the Lasso regressor.
    pub fn build(self) -> LassoRegressor {
        LassoRegressor::new(self.builder.build_unchecked())
    }
}

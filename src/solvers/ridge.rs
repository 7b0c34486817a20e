//! Ridge regression solver (L2 regularization).

use crate::core::{RegressionOptions, RegressionOptionsBuilder, RegressionResult};
use crate::solvers::traits::{validate_inputs, FittedRegressor, RegressionError, Regressor};
use crate::utils::{
    center_columns, center_vector, invert_with_tolerance, multiply, multiply_vector, transpose,
    with_intercept_column,
};
use faer::{Col, Mat};

/// Ridge regression estimator with L2 regularization.
///
/// Minimizes: ||y - Xβ||² + λ||β||²
///
/// Features and target are centered first, so the intercept is never
/// penalized. The solution on centered data is β = (XᵀX + λI')⁻¹Xᵀy where
/// I' is the identity with its intercept entry zeroed, and the intercept is
/// recovered in original units as `mean(y) - Σ β_j·mean(X_j)`.
///
/// When λ = 0, this reduces to OLS.
///
/// # Example
///
/// ```rust,ignore
/// use statkit::solvers::{RidgeRegressor, Regressor, FittedRegressor};
/// use faer::{Mat, Col};
///
/// let fitted = RidgeRegressor::builder()
///     .lambda(0.1)
///     .build()
///     .fit(&x, &y)?;
///
/// println!("R² = {}", fitted.r_squared());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RidgeRegressor {
    options: RegressionOptions,
}

impl RidgeRegressor {
    /// Create a new Ridge regressor with the given options.
    pub fn new(options: RegressionOptions) -> Self {
        Self { options }
    }

    /// Create a builder for configuring the regressor.
    pub fn builder() -> RidgeRegressorBuilder {
        RidgeRegressorBuilder::default()
    }
}

impl Regressor for RidgeRegressor {
    type Fitted = FittedRidge;

    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Self::Fitted, RegressionError> {
        validate_inputs(x, y)?;
        self.options.validate()?;

        let n_features = x.ncols();

        let (x_centered, x_means) = center_columns(x);
        let (y_centered, y_mean) = center_vector(y);

        let mut coefficients = self.solve_ridge(&x_centered, &y_centered)?;

        // Intercept in original (uncentered) units
        let mut intercept = y_mean;
        for j in 0..n_features {
            intercept -= coefficients[j + 1] * x_means[j];
        }
        coefficients[0] = intercept;

        Ok(FittedRidge {
            options: self.options.clone(),
            result: RegressionResult::from_coefficients(x, y, coefficients),
        })
    }
}

impl RidgeRegressor {
    /// Solve the penalized normal equations on centered data.
    ///
    /// Row 0 of the augmented design is the intercept column and stays
    /// unpenalized.
    fn solve_ridge(
        &self,
        x_centered: &Mat<f64>,
        y_centered: &Col<f64>,
    ) -> Result<Col<f64>, RegressionError> {
        let design = with_intercept_column(x_centered);
        let xt = transpose(&design)?;
        let mut xtx = multiply(&xt, &design)?;

        for i in 1..xtx.nrows() {
            xtx[(i, i)] += self.options.lambda;
        }

        let xtx_inv = invert_with_tolerance(&xtx, self.options.pivot_tolerance)?;
        let xty = multiply_vector(&xt, y_centered)?;
        Ok(multiply_vector(&xtx_inv, &xty)?)
    }
}

/// Fit ridge regression with penalty `lambda` and return the coefficient
/// vector (intercept first).
pub fn ridge_regression(
    x: &Mat<f64>,
    y: &Col<f64>,
    lambda: f64,
) -> Result<Col<f64>, RegressionError> {
    let fitted = RidgeRegressor::new(RegressionOptions::ridge(lambda)).fit(x, y)?;
    Ok(fitted.result.coefficients)
}

/// A fitted Ridge regression model.
#[derive(Debug, Clone)]
pub struct FittedRidge {
    options: RegressionOptions,
    result: RegressionResult,
}

impl FittedRidge {
    /// Get the options used to fit this model.
    pub fn options(&self) -> &RegressionOptions {
        &self.options
    }

    /// Get the lambda value used.
    pub fn lambda(&self) -> f64 {
        self.options.lambda
    }
}

impl FittedRegressor for FittedRidge {
    fn result(&self) -> &RegressionResult {
        &self.result
    }
}

/// Builder for `RidgeRegressor`.
#[derive(Debug, Clone, Default)]
pub struct RidgeRegressorBuilder {
    builder: RegressionOptionsBuilder,
}

impl RidgeRegressorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the regularization parameter (lambda).
    pub fn lambda(mut self, lambda: f64) -> Self {
        self.builder = self.builder.lambda(lambda);
        self
    }

    /// Treat pivots with `|pivot| <= tol` as zero during inversion.
    pub fn pivot_tolerance(mut self, tol: f64) -> Self {
        self.builder = self.builder.pivot_tolerance(tol);
        self
    }

    /// Build the Ridge regressor.
    pub fn build(self) -> RidgeRegressor {
        RidgeRegressor::new(self.builder.build_unchecked())
    }
}

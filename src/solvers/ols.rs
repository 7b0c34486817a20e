//! Ordinary Least Squares regression solver.

use crate::core::{RegressionOptions, RegressionOptionsBuilder, RegressionResult};
use crate::solvers::traits::{validate_inputs, FittedRegressor, RegressionError, Regressor};
use crate::utils::{invert_with_tolerance, multiply, multiply_vector, transpose, with_intercept_column};
use faer::{Col, Mat};

/// Ordinary Least Squares regression estimator.
///
/// Prepends an intercept column to X and solves the normal equations
/// β = (XᵀX)⁻¹Xᵀy with a Gauss-Jordan inverse. Collinear or duplicated
/// features make XᵀX singular and the fit fails with
/// [`RegressionError::SingularMatrix`].
///
/// # Example
///
/// ```rust,ignore
/// use statkit::solvers::{OlsRegressor, Regressor, FittedRegressor};
/// use faer::{Mat, Col};
///
/// let x = Mat::from_fn(100, 2, |i, j| ((i * (j + 1)) as f64).sin());
/// let y = Col::from_fn(100, |i| 1.0 + 2.0 * x[(i, 0)] - x[(i, 1)]);
///
/// let fitted = OlsRegressor::builder().build().fit(&x, &y)?;
///
/// println!("R² = {}", fitted.r_squared());
/// println!("Coefficients: {:?}", fitted.coefficients());
/// ```
#[derive(Debug, Clone, Default)]
pub struct OlsRegressor {
    options: RegressionOptions,
}

impl OlsRegressor {
    /// Create a new OLS regressor with the given options.
    pub fn new(options: RegressionOptions) -> Self {
        Self { options }
    }

    /// Create a builder for configuring the regressor.
    pub fn builder() -> OlsRegressorBuilder {
        OlsRegressorBuilder::default()
    }
}

impl Regressor for OlsRegressor {
    type Fitted = FittedOls;

    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Self::Fitted, RegressionError> {
        validate_inputs(x, y)?;
        self.options.validate()?;

        let design = with_intercept_column(x);
        let coefficients = solve_normal_equations(&design, y, self.options.pivot_tolerance)?;

        Ok(FittedOls {
            options: self.options.clone(),
            result: RegressionResult::from_coefficients(x, y, coefficients),
        })
    }
}

/// Solve (XᵀX)β = Xᵀy through an explicit inverse of XᵀX.
pub(crate) fn solve_normal_equations(
    design: &Mat<f64>,
    y: &Col<f64>,
    pivot_tolerance: f64,
) -> Result<Col<f64>, RegressionError> {
    let xt = transpose(design)?;
    let xtx = multiply(&xt, design)?;
    let xtx_inv = invert_with_tolerance(&xtx, pivot_tolerance)?;
    let xty = multiply_vector(&xt, y)?;
    Ok(multiply_vector(&xtx_inv, &xty)?)
}

/// Fit OLS with default options and return the coefficient vector
/// (intercept first).
pub fn ordinary_least_squares(x: &Mat<f64>, y: &Col<f64>) -> Result<Col<f64>, RegressionError> {
    let fitted = OlsRegressor::default().fit(x, y)?;
    Ok(fitted.result.coefficients)
}

/// A fitted OLS regression model.
#[derive(Debug, Clone)]
pub struct FittedOls {
    options: RegressionOptions,
    result: RegressionResult,
}

impl FittedOls {
    /// Get the options used to fit this model.
    pub fn options(&self) -> &RegressionOptions {
        &self.options
    }
}

impl FittedRegressor for FittedOls {
    fn result(&self) -> &RegressionResult {
        &self.result
    }
}

/// Builder for `OlsRegressor`.
#[derive(Debug, Clone, Default)]
pub struct OlsRegressorBuilder {
    builder: RegressionOptionsBuilder,
}

impl OlsRegressorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat pivots with `|pivot| <= tol` as zero during inversion.
    pub fn pivot_tolerance(mut self, tol: f64) -> Self {
        self.builder = self.builder.pivot_tolerance(tol);
        self
    }

    /// Build the OLS regressor.
    pub fn build(self) -> OlsRegressor {
        // Options are validated at fit time.
        OlsRegressor::new(self.builder.build_unchecked())
    }
}

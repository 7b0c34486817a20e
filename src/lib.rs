//! A small statistics library: linear regression, special functions,
//! probability distributions and classical hypothesis tests.
//!
//! Regression estimators follow an sklearn-style fit/predict API over
//! [`faer`] matrices. OLS and ridge solve the normal equations with a
//! Gauss-Jordan inverse; lasso runs cyclic coordinate descent. All three
//! return coefficients with the intercept first.
//!
//! # Example
//!
//! ```rust
//! use faer::{Col, Mat};
//! use statkit::prelude::*;
//!
//! let x = Mat::from_fn(3, 2, |i, j| [[1.0, 2.0], [2.0, 1.0], [3.0, 3.0]][i][j]);
//! let y = Col::from_fn(3, |i| [6.0, 5.0, 12.0][i]);
//!
//! let fitted = OlsRegressor::default().fit(&x, &y).unwrap();
//! assert!((fitted.intercept() + 1.0).abs() < 1e-6);
//!
//! let ridge = RidgeRegressor::builder().lambda(0.1).build().fit(&x, &y).unwrap();
//! println!("ridge coefficients: {:?}", ridge.coefficients());
//!
//! let test = one_sample_t_test(5.4, 5.0, 1.2, 30).unwrap();
//! println!("t = {:.3}, p = {:.3}", test.statistic, test.p_value);
//! ```

pub mod core;
pub mod diagnostics;
pub mod distributions;
pub mod hypothesis;
pub mod solvers;
pub mod special;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{predict, RegressionOptions, RegressionOptionsBuilder, RegressionResult};
    pub use crate::diagnostics::{mean_squared_error, r_squared, root_mean_squared_error};
    pub use crate::hypothesis::{
        chi_square_goodness_of_fit, chi_square_independence, one_sample_t_test,
        one_sample_z_test, one_way_anova, paired_t_test, two_sample_z_test, welch_t_test,
        Alternative, HypothesisTester, TestError, TestOptions, TestResult,
    };
    pub use crate::solvers::{
        lasso_regression, ordinary_least_squares, ridge_regression, simple_linear_regression,
        FittedRegressor, LassoRegressor, OlsRegressor, RegressionError, Regressor,
        RidgeRegressor,
    };
    pub use crate::special::DistributionMethod;
}

pub use crate::core::{RegressionOptions, RegressionOptionsBuilder, RegressionResult};
pub use crate::solvers::{FittedRegressor, RegressionError, Regressor};

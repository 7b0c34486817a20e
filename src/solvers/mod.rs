//! Regression solvers implementing various estimation methods.

mod traits;
mod ols;
mod ridge;
mod lasso;
mod simple;

pub use traits::{FittedRegressor, Regressor, RegressionError};
pub use ols::{ordinary_least_squares, FittedOls, OlsRegressor, OlsRegressorBuilder};
pub use ridge::{ridge_regression, FittedRidge, RidgeRegressor, RidgeRegressorBuilder};
pub use lasso::{lasso_regression, FittedLasso, LassoRegressor, LassoRegressorBuilder};
pub use simple::{simple_linear_regression, SimpleLinearFit};

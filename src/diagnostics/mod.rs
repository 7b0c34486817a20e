//! Regression diagnostics.
//!
//! Fit metrics comparing observed targets with predictions:
//!
//! - **MSE / RMSE**: average squared prediction error and its square root
//! - **R²**: share of target variance explained by the predictions
//!
//! # Example
//!
//! ```rust,ignore
//! use statkit::diagnostics::{mean_squared_error, r_squared};
//!
//! let preds = fitted.predict(&x)?;
//! println!("MSE = {}, R² = {}", mean_squared_error(&y, &preds), r_squared(&y, &preds));
//! ```

mod fit;

pub use fit::{mean_squared_error, r_squared, root_mean_squared_error};

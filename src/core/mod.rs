//! Core types for regression analysis.

mod options;
mod prediction;
mod result;

pub use options::{OptionsError, RegressionOptions, RegressionOptionsBuilder};
pub use prediction::predict;
pub use result::RegressionResult;

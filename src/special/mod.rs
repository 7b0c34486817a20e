//! Special functions.
//!
//! Scalar approximations that the distributions and hypothesis tests are
//! built on:
//!
//! - **Gamma**: Lanczos Γ(z), checked Γ(z), factorial
//! - **Incomplete gamma**: regularized lower incomplete gamma by series
//! - **Normal**: Φ(x) via `erf`, Φ⁻¹(p) by Acklam's approximation
//! - **Sampling distributions**: chi-square, F and Student-t CDFs, with
//!   exact alternatives selected through [`DistributionMethod`]

mod cdf;
mod gamma;
mod normal;

use thiserror::Error;

pub use cdf::{chi_square_cdf, f_distribution_cdf, student_t_cdf, DistributionMethod};
pub use gamma::{checked_gamma, factorial, gamma, lower_incomplete_gamma_regularized};
pub use normal::{standard_normal_cdf, standard_normal_inverse_cdf};

/// Errors raised by special functions and probability distributions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpecialFunctionError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("numeric overflow: {0}")]
    NumericOverflow(String),
}

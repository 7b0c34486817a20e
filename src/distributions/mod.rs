//! Probability distributions.
//!
//! Density, mass and cumulative distribution functions for the common
//! distributions, as free functions over their parameters. Every function
//! validates its parameters and reports violations as
//! [`SpecialFunctionError::InvalidParameter`](crate::special::SpecialFunctionError).
//!
//! | Distribution | Functions |
//! |--------------|-----------|
//! | Normal(μ, σ) | [`normal_pdf`], [`normal_cdf`], [`normal_inverse_cdf`] |
//! | Binomial(n, p) | [`binomial_pmf`], [`binomial_cdf`], [`binomial_quantile`] |
//! | Poisson(λ) | [`poisson_pmf`], [`poisson_cdf`] |
//! | Exponential(λ) | [`exponential_pdf`], [`exponential_cdf`] |
//! | Uniform(a, b) | [`uniform_pdf`], [`uniform_cdf`] |

mod continuous;
mod discrete;
mod normal;

pub use continuous::{exponential_cdf, exponential_pdf, uniform_cdf, uniform_pdf};
pub use discrete::{binomial_cdf, binomial_pmf, binomial_quantile, poisson_cdf, poisson_pmf};
pub use normal::{normal_cdf, normal_inverse_cdf, normal_pdf};

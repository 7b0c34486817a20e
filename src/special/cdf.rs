//! CDFs of the sampling distributions used by the hypothesis tests.
//!
//! The plain functions are fast closed-form approximations. Student-t and F
//! are both approximated by the standard normal, which is only accurate for
//! large degrees of freedom. [`DistributionMethod::Exact`] routes the same
//! evaluations through the incomplete-beta/gamma implementations in
//! `statrs`.

use super::gamma::lower_incomplete_gamma_regularized;
use super::normal::standard_normal_cdf;
use super::SpecialFunctionError;
use statrs::distribution::{ChiSquared, ContinuousCDF, FisherSnedecor, StudentsT};

/// How sampling-distribution CDFs are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistributionMethod {
    /// Series/normal approximations ([`chi_square_cdf`],
    /// [`f_distribution_cdf`], [`student_t_cdf`]).
    #[default]
    Approximate,
    /// Exact CDFs from `statrs`.
    Exact,
}

impl DistributionMethod {
    /// Chi-square CDF with `k` degrees of freedom.
    pub fn chi_square_cdf(self, x: f64, k: f64) -> Result<f64, SpecialFunctionError> {
        match self {
            DistributionMethod::Approximate => Ok(chi_square_cdf(x, k)),
            DistributionMethod::Exact => {
                let dist = ChiSquared::new(k).map_err(|_| invalid_df("chi-square", k))?;
                Ok(if x <= 0.0 { 0.0 } else { dist.cdf(x) })
            }
        }
    }

    /// F-distribution CDF with `dfn` numerator and `dfd` denominator degrees
    /// of freedom.
    pub fn f_cdf(self, f: f64, dfn: f64, dfd: f64) -> Result<f64, SpecialFunctionError> {
        match self {
            DistributionMethod::Approximate => Ok(f_distribution_cdf(f, dfn, dfd)),
            DistributionMethod::Exact => {
                let dist = FisherSnedecor::new(dfn, dfd)
                    .map_err(|_| invalid_df("F", if dfn <= 0.0 { dfn } else { dfd }))?;
                Ok(if f <= 0.0 { 0.0 } else { dist.cdf(f) })
            }
        }
    }

    /// Student-t CDF with `df` degrees of freedom.
    pub fn student_t_cdf(self, t: f64, df: f64) -> Result<f64, SpecialFunctionError> {
        match self {
            DistributionMethod::Approximate => Ok(student_t_cdf(t, df)),
            DistributionMethod::Exact => {
                let dist = StudentsT::new(0.0, 1.0, df).map_err(|_| invalid_df("Student-t", df))?;
                Ok(dist.cdf(t))
            }
        }
    }
}

fn invalid_df(name: &str, df: f64) -> SpecialFunctionError {
    SpecialFunctionError::InvalidParameter(format!(
        "{name} distribution requires positive degrees of freedom, got {df}"
    ))
}

/// Chi-square CDF with `k` degrees of freedom: P(k/2, x/2).
///
/// Inherits the 100-term limit of [`lower_incomplete_gamma_regularized`]:
/// for x far above k (roughly x > 100) the value falls back toward 0
/// instead of 1. Use [`DistributionMethod::Exact`] for large statistics.
pub fn chi_square_cdf(x: f64, k: f64) -> f64 {
    lower_incomplete_gamma_regularized(k / 2.0, x / 2.0)
}

/// Large-sample approximation of the F-distribution CDF.
///
/// Maps `f` to `z = (f − 1) / (2/√dfd)` and returns Φ(z). This is not the
/// exact F CDF and is poor for small degrees of freedom; `dfn` only enters
/// the validity check. Returns 0 when either degrees of freedom is not
/// positive.
pub fn f_distribution_cdf(f: f64, dfn: f64, dfd: f64) -> f64 {
    if dfn <= 0.0 || dfd <= 0.0 {
        return 0.0;
    }
    let z = (f - 1.0) / (2.0 / dfd.sqrt());
    standard_normal_cdf(z)
}

/// Student-t CDF, approximated by the standard normal CDF.
///
/// `df` does not affect the result; tails are too light for small `df`.
/// Use [`DistributionMethod::Exact`] for the genuine distribution.
pub fn student_t_cdf(t: f64, _df: f64) -> f64 {
    standard_normal_cdf(t)
}

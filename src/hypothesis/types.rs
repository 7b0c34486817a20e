//! Result, error and option types shared by the hypothesis tests.

use crate::special::{DistributionMethod, SpecialFunctionError};
use thiserror::Error;

/// Outcome of a single hypothesis test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestResult {
    /// Test statistic (z, t, χ² or F).
    pub statistic: f64,
    /// p-value under the selected alternative.
    pub p_value: f64,
    /// Degrees of freedom of the reference distribution; `None` for
    /// z-tests. For F-based tests this is the numerator df.
    pub df: Option<f64>,
    /// Denominator degrees of freedom, F-based tests only.
    pub denominator_df: Option<f64>,
}

impl TestResult {
    pub(crate) fn new(statistic: f64, p_value: f64, df: Option<f64>) -> Self {
        Self {
            statistic,
            p_value,
            df,
            denominator_df: None,
        }
    }

    /// Whether the null hypothesis is rejected at significance level `alpha`.
    ///
    /// Always `false` when the p-value is NaN.
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}

/// Errors raised by the hypothesis tests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TestError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("distribution evaluation failed: {0}")]
    Distribution(#[from] SpecialFunctionError),
}

/// Fails with [`TestError::InvalidParameter`] unless `condition` holds.
pub(crate) fn ensure(condition: bool, message: impl FnOnce() -> String) -> Result<(), TestError> {
    if condition {
        Ok(())
    } else {
        Err(TestError::InvalidParameter(message()))
    }
}

/// Alternative hypothesis for the z- and t-tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alternative {
    /// H1: the parameter differs from its null value.
    #[default]
    TwoSided,
    /// H1: the parameter is less than its null value.
    Less,
    /// H1: the parameter is greater than its null value.
    Greater,
}

impl Alternative {
    /// p-value of `statistic` given the CDF of its null distribution.
    ///
    /// Assumes the null distribution is symmetric about zero.
    pub(crate) fn p_value<F>(self, statistic: f64, cdf: F) -> Result<f64, TestError>
    where
        F: Fn(f64) -> Result<f64, SpecialFunctionError>,
    {
        let p = match self {
            Alternative::TwoSided => 2.0 * (1.0 - cdf(statistic.abs())?),
            Alternative::Less => cdf(statistic)?,
            Alternative::Greater => 1.0 - cdf(statistic)?,
        };
        Ok(p)
    }
}

/// Options applied by a [`HypothesisTester`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TestOptions {
    /// Alternative hypothesis for z- and t-tests. Chi-square and ANOVA
    /// tests are always upper-tailed.
    pub alternative: Alternative,
    /// How the Student-t, chi-square and F CDFs are evaluated.
    pub method: DistributionMethod,
}

impl TestOptions {
    pub fn builder() -> TestOptionsBuilder {
        TestOptionsBuilder::default()
    }
}

/// Builder for [`TestOptions`].
#[derive(Debug, Clone, Default)]
pub struct TestOptionsBuilder {
    options: TestOptions,
}

impl TestOptionsBuilder {
    /// Set the alternative hypothesis.
    pub fn alternative(mut self, alternative: Alternative) -> Self {
        self.options.alternative = alternative;
        self
    }

    /// Set the CDF evaluation method.
    pub fn method(mut self, method: DistributionMethod) -> Self {
        self.options.method = method;
        self
    }

    pub fn build(self) -> TestOptions {
        self.options
    }
}

/// Runs hypothesis tests with a fixed set of [`TestOptions`].
///
/// The test methods are defined next to their free-function counterparts
/// in the sibling modules.
#[derive(Debug, Clone, Copy, Default)]
pub struct HypothesisTester {
    options: TestOptions,
}

impl HypothesisTester {
    pub fn new(options: TestOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TestOptions {
        &self.options
    }
}

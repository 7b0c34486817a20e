//! One-way analysis of variance.

use super::types::{ensure, HypothesisTester, TestError, TestResult};

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

impl HypothesisTester {
    /// One-way ANOVA across `groups`.
    ///
    /// F = (SSB / (k − 1)) / (SSW / (N − k)), with the p-value taken from the
    /// upper tail of the F distribution.
    ///
    /// When the within-group mean square is zero or undefined (every group
    /// constant, or one observation per group) the F ratio does not exist and
    /// both the statistic and the p-value are NaN.
    ///
    /// # Errors
    /// `InvalidParameter` for fewer than two groups or an empty group.
    pub fn one_way_anova<G: AsRef<[f64]>>(&self, groups: &[G]) -> Result<TestResult, TestError> {
        let k = groups.len();
        ensure(k >= 2, || format!("ANOVA requires at least 2 groups, got {k}"))?;
        if let Some(i) = groups.iter().position(|g| g.as_ref().is_empty()) {
            return Err(TestError::InvalidParameter(format!("group {i} is empty")));
        }

        let total_count: usize = groups.iter().map(|g| g.as_ref().len()).sum();
        let grand_mean = groups
            .iter()
            .flat_map(|g| g.as_ref().iter())
            .sum::<f64>()
            / total_count as f64;

        let mut ssb = 0.0;
        let mut ssw = 0.0;
        for group in groups {
            let group = group.as_ref();
            let group_mean = mean(group);
            ssb += group.len() as f64 * (group_mean - grand_mean).powi(2);
            ssw += group.iter().map(|v| (v - group_mean).powi(2)).sum::<f64>();
        }

        let df_between = (k - 1) as f64;
        let df_within = (total_count - k) as f64;
        let msb = ssb / df_between;
        let msw = ssw / df_within;

        let (statistic, p_value) = if msw == 0.0 || msw.is_nan() {
            log::warn!(
                "one-way ANOVA: within-group mean square is {msw} (SSW = {ssw}, df = {df_within}); F is undefined"
            );
            (f64::NAN, f64::NAN)
        } else {
            let f = msb / msw;
            let cdf = self.options().method.f_cdf(f, df_between, df_within)?;
            (f, 1.0 - cdf)
        };

        Ok(TestResult {
            statistic,
            p_value,
            df: Some(df_between),
            denominator_df: Some(df_within),
        })
    }
}

/// One-way ANOVA using the approximate F CDF.
///
/// See [`HypothesisTester::one_way_anova`].
pub fn one_way_anova<G: AsRef<[f64]>>(groups: &[G]) -> Result<TestResult, TestError> {
    HypothesisTester::default().one_way_anova(groups)
}

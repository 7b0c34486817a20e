//! Pearson chi-square tests.

use super::types::{ensure, HypothesisTester, TestError, TestResult};

impl HypothesisTester {
    /// Upper-tail probability of a chi-square statistic.
    fn chi_square_p_value(&self, statistic: f64, df: f64) -> Result<f64, TestError> {
        Ok(1.0 - self.options().method.chi_square_cdf(statistic, df)?)
    }

    /// Goodness-of-fit test of observed counts against expected counts.
    ///
    /// χ² = Σ (Oᵢ − Eᵢ)² / Eᵢ with k − 1 degrees of freedom.
    ///
    /// # Errors
    /// `InvalidParameter` when the slices differ in length, hold fewer than
    /// two categories, or any expected count is not positive.
    pub fn chi_square_goodness_of_fit(
        &self,
        observed: &[f64],
        expected: &[f64],
    ) -> Result<TestResult, TestError> {
        ensure(observed.len() == expected.len(), || {
            format!(
                "observed and expected must have equal length, got {} and {}",
                observed.len(),
                expected.len()
            )
        })?;
        ensure(observed.len() >= 2, || {
            format!("need at least 2 categories, got {}", observed.len())
        })?;
        if let Some(bad) = expected.iter().find(|&&e| e.is_nan() || e <= 0.0) {
            return Err(TestError::InvalidParameter(format!(
                "expected frequencies must be > 0, got {bad}"
            )));
        }

        let statistic: f64 = observed
            .iter()
            .zip(expected)
            .map(|(o, e)| (o - e).powi(2) / e)
            .sum();
        let df = (observed.len() - 1) as f64;
        let p = self.chi_square_p_value(statistic, df)?;
        Ok(TestResult::new(statistic, p, Some(df)))
    }

    /// Test of independence on an r × c contingency table.
    ///
    /// Expected counts are `row_total[i] * col_total[j] / N`; the statistic
    /// has (r − 1)(c − 1) degrees of freedom.
    ///
    /// # Errors
    /// `InvalidParameter` when the table has fewer than two rows or columns,
    /// is ragged, holds a negative (or NaN) entry, or has an all-zero row or
    /// column.
    pub fn chi_square_independence<R: AsRef<[f64]>>(
        &self,
        table: &[R],
    ) -> Result<TestResult, TestError> {
        let n_rows = table.len();
        ensure(n_rows >= 2, || {
            format!("contingency table needs at least 2 rows, got {n_rows}")
        })?;
        let n_cols = table[0].as_ref().len();
        ensure(n_cols >= 2, || {
            format!("contingency table needs at least 2 columns, got {n_cols}")
        })?;

        let mut row_totals = vec![0.0; n_rows];
        let mut col_totals = vec![0.0; n_cols];
        for (i, row) in table.iter().enumerate() {
            let row = row.as_ref();
            ensure(row.len() == n_cols, || {
                format!("row {i} has {} columns, expected {n_cols}", row.len())
            })?;
            for (j, &value) in row.iter().enumerate() {
                ensure(value >= 0.0, || {
                    format!("table entries must be >= 0, got {value} at ({i}, {j})")
                })?;
                row_totals[i] += value;
                col_totals[j] += value;
            }
        }
        if let Some(i) = row_totals.iter().position(|&t| t == 0.0) {
            return Err(TestError::InvalidParameter(format!("row {i} total is zero")));
        }
        if let Some(j) = col_totals.iter().position(|&t| t == 0.0) {
            return Err(TestError::InvalidParameter(format!(
                "column {j} total is zero"
            )));
        }

        let total: f64 = row_totals.iter().sum();
        let mut statistic = 0.0;
        for (row, &row_total) in table.iter().zip(&row_totals) {
            for (&value, &col_total) in row.as_ref().iter().zip(&col_totals) {
                let expected = row_total * col_total / total;
                statistic += (value - expected).powi(2) / expected;
            }
        }

        let df = ((n_rows - 1) * (n_cols - 1)) as f64;
        let p = self.chi_square_p_value(statistic, df)?;
        Ok(TestResult::new(statistic, p, Some(df)))
    }
}

/// Chi-square goodness-of-fit test.
///
/// See [`HypothesisTester::chi_square_goodness_of_fit`].
///
/// # Example
///
/// ```rust
/// use statkit::hypothesis::chi_square_goodness_of_fit;
///
/// // A die rolled 60 times
/// let observed = [8.0, 12.0, 9.0, 11.0, 6.0, 14.0];
/// let expected = [10.0; 6];
/// let result = chi_square_goodness_of_fit(&observed, &expected).unwrap();
/// assert!((result.statistic - 4.2).abs() < 1e-12);
/// assert!(!result.is_significant(0.05));
/// ```
pub fn chi_square_goodness_of_fit(
    observed: &[f64],
    expected: &[f64],
) -> Result<TestResult, TestError> {
    HypothesisTester::default().chi_square_goodness_of_fit(observed, expected)
}

/// Chi-square test of independence.
///
/// See [`HypothesisTester::chi_square_independence`].
pub fn chi_square_independence<R: AsRef<[f64]>>(table: &[R]) -> Result<TestResult, TestError> {
    HypothesisTester::default().chi_square_independence(table)
}

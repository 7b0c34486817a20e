//! Binomial and Poisson distributions.

use crate::special::{factorial, SpecialFunctionError};

fn check_binomial(n: u64, k: u64, p: f64) -> Result<(), SpecialFunctionError> {
    if k > n {
        return Err(SpecialFunctionError::InvalidParameter(format!(
            "binomial distribution requires k <= n, got k={k}, n={n}"
        )));
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(SpecialFunctionError::InvalidParameter(format!(
            "binomial distribution requires p in [0, 1], got {p}"
        )));
    }
    Ok(())
}

fn check_poisson(lambda: f64) -> Result<(), SpecialFunctionError> {
    if !lambda.is_finite() || lambda <= 0.0 {
        return Err(SpecialFunctionError::InvalidParameter(format!(
            "Poisson distribution requires λ > 0, got {lambda}"
        )));
    }
    Ok(())
}

/// C(n, k) accumulated multiplicatively in `f64`.
fn binomial_coefficient(n: u64, k: u64) -> Result<f64, SpecialFunctionError> {
    let k = k.min(n - k);
    let mut result = 1.0f64;
    for i in 0..k {
        result *= (n - i) as f64 / (i + 1) as f64;
    }
    if !result.is_finite() {
        return Err(SpecialFunctionError::NumericOverflow(format!(
            "binomial coefficient C({n}, {k}) exceeds the f64 range"
        )));
    }
    Ok(result)
}

/// P(X = k) = C(n, k)·pᵏ·(1 − p)ⁿ⁻ᵏ.
///
/// # Errors
/// `InvalidParameter` when `k > n` or `p` is outside `[0, 1]`;
/// `NumericOverflow` when C(n, k) leaves the `f64` range.
pub fn binomial_pmf(n: u64, k: u64, p: f64) -> Result<f64, SpecialFunctionError> {
    check_binomial(n, k, p)?;
    let coefficient = binomial_coefficient(n, k)?;
    Ok(coefficient * p.powf(k as f64) * (1.0 - p).powf((n - k) as f64))
}

/// P(X ≤ k), summing the mass function over `0..=k`.
pub fn binomial_cdf(n: u64, k: u64, p: f64) -> Result<f64, SpecialFunctionError> {
    check_binomial(n, k, p)?;
    let mut total = 0.0;
    for i in 0..=k {
        total += binomial_pmf(n, i, p)?;
    }
    Ok(total.min(1.0))
}

/// Smallest k with P(X ≤ k) ≥ `target`.
///
/// `target == 0` gives 0 and `target == 1` gives `n`. When rounding keeps
/// the accumulated mass just below `target`, `n` is returned.
///
/// # Errors
/// `InvalidParameter` when `target` or `p` is outside `[0, 1]`;
/// `NumericOverflow` when a binomial coefficient leaves the `f64` range.
///
/// # Examples
/// ```
/// use statkit::distributions::binomial_quantile;
/// assert_eq!(binomial_quantile(0.5, 5, 0.5).unwrap(), 2);
/// ```
pub fn binomial_quantile(target: f64, n: u64, p: f64) -> Result<u64, SpecialFunctionError> {
    if !(0.0..=1.0).contains(&target) {
        return Err(SpecialFunctionError::InvalidParameter(format!(
            "binomial quantile requires a target probability in [0, 1], got {target}"
        )));
    }
    check_binomial(n, 0, p)?;
    if target == 0.0 {
        return Ok(0);
    }
    if target == 1.0 {
        return Ok(n);
    }

    let mut total = 0.0;
    for k in 0..=n {
        total += binomial_pmf(n, k, p)?;
        if total >= target {
            return Ok(k);
        }
    }
    Ok(n)
}

/// P(X = k) = λᵏ·e^(−λ) / k!.
///
/// # Errors
/// `InvalidParameter` when λ ≤ 0; `NumericOverflow` from [`factorial`] for
/// k > 170.
pub fn poisson_pmf(k: u64, lambda: f64) -> Result<f64, SpecialFunctionError> {
    check_poisson(lambda)?;
    Ok(lambda.powf(k as f64) * (-lambda).exp() / factorial(k)?)
}

/// P(X ≤ k), summing the mass function over `0..=k`.
pub fn poisson_cdf(k: u64, lambda: f64) -> Result<f64, SpecialFunctionError> {
    check_poisson(lambda)?;
    let mut total = 0.0;
    for i in 0..=k {
        total += poisson_pmf(i, lambda)?;
    }
    Ok(total.min(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binomial_pmf_fair_coin() {
        // C(4, 2) / 16
        assert!((binomial_pmf(4, 2, 0.5).unwrap() - 0.375).abs() < 1e-15);
        assert!((binomial_pmf(10, 0, 0.5).unwrap() - 1.0 / 1024.0).abs() < 1e-15);
    }

    #[test]
    fn test_binomial_degenerate_p() {
        assert_eq!(binomial_pmf(5, 0, 0.0).unwrap(), 1.0);
        assert_eq!(binomial_pmf(5, 5, 1.0).unwrap(), 1.0);
        assert_eq!(binomial_pmf(5, 3, 1.0).unwrap(), 0.0);
    }

    #[test]
    fn test_binomial_cdf_sums_to_one() {
        assert!((binomial_cdf(12, 12, 0.3).unwrap() - 1.0).abs() < 1e-12);
        // P(X <= 1), n = 3, p = 0.5: (1 + 3) / 8
        assert!((binomial_cdf(3, 1, 0.5).unwrap() - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_binomial_rejects_invalid() {
        assert!(matches!(
            binomial_pmf(3, 4, 0.5),
            Err(SpecialFunctionError::InvalidParameter(_))
        ));
        assert!(binomial_cdf(3, 1, 1.5).is_err());
        assert!(binomial_pmf(3, 1, f64::NAN).is_err());
    }

    #[test]
    fn test_binomial_quantile_reference_points() {
        assert_eq!(binomial_quantile(0.5, 5, 0.5).unwrap(), 2);
        assert_eq!(binomial_quantile(0.8, 10, 0.6).unwrap(), 7);
        assert_eq!(binomial_quantile(0.99, 10, 0.8).unwrap(), 10);
    }

    #[test]
    fn test_binomial_quantile_is_smallest_k() {
        let (n, p) = (20, 0.3);
        for &target in &[0.05, 0.25, 0.5, 0.75, 0.95] {
            let k = binomial_quantile(target, n, p).unwrap();
            assert!(binomial_cdf(n, k, p).unwrap() >= target);
            if k > 0 {
                assert!(binomial_cdf(n, k - 1, p).unwrap() < target);
            }
        }
    }

    #[test]
    fn test_binomial_quantile_edges() {
        assert_eq!(binomial_quantile(0.0, 8, 0.4).unwrap(), 0);
        assert_eq!(binomial_quantile(1.0, 8, 0.4).unwrap(), 8);
        // All mass at zero
        assert_eq!(binomial_quantile(0.5, 8, 0.0).unwrap(), 0);
        assert_eq!(binomial_quantile(0.5, 0, 0.4).unwrap(), 0);
    }

    #[test]
    fn test_binomial_quantile_rejects_invalid() {
        for &target in &[-0.1, 1.5, f64::NAN] {
            assert!(matches!(
                binomial_quantile(target, 10, 0.5),
                Err(SpecialFunctionError::InvalidParameter(_))
            ));
        }
        assert!(matches!(
            binomial_quantile(0.5, 10, 1.2),
            Err(SpecialFunctionError::InvalidParameter(_))
        ));
        assert!(binomial_quantile(0.5, 10, f64::NAN).is_err());
    }

    #[test]
    fn test_poisson_pmf() {
        let lambda: f64 = 3.0;
        let expected = lambda.powi(2) * (-lambda).exp() / 2.0;
        assert!((poisson_pmf(2, lambda).unwrap() - expected).abs() < 1e-15);
        assert!((poisson_pmf(0, lambda).unwrap() - (-lambda).exp()).abs() < 1e-15);
    }

    #[test]
    fn test_poisson_cdf() {
        let lambda: f64 = 2.0;
        let expected = (-lambda).exp() * (1.0 + 2.0 + 2.0);
        assert!((poisson_cdf(2, lambda).unwrap() - expected).abs() < 1e-14);
        assert!((poisson_cdf(60, lambda).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_poisson_errors() {
        assert!(matches!(
            poisson_pmf(1, 0.0),
            Err(SpecialFunctionError::InvalidParameter(_))
        ));
        assert!(matches!(
            poisson_pmf(171, 1.0),
            Err(SpecialFunctionError::NumericOverflow(_))
        ));
    }
}

//! Exponential and continuous uniform distributions.

use crate::special::SpecialFunctionError;

fn check_rate(x: f64, lambda: f64) -> Result<(), SpecialFunctionError> {
    if !lambda.is_finite() || lambda <= 0.0 {
        return Err(SpecialFunctionError::InvalidParameter(format!(
            "exponential distribution requires λ > 0, got {lambda}"
        )));
    }
    if x.is_nan() || x < 0.0 {
        return Err(SpecialFunctionError::InvalidParameter(format!(
            "exponential distribution is defined for x >= 0, got {x}"
        )));
    }
    Ok(())
}

fn check_bounds(a: f64, b: f64) -> Result<(), SpecialFunctionError> {
    if !a.is_finite() || !b.is_finite() || a >= b {
        return Err(SpecialFunctionError::InvalidParameter(format!(
            "uniform distribution requires finite a < b, got a={a}, b={b}"
        )));
    }
    Ok(())
}

/// Density λ·e^(−λx).
pub fn exponential_pdf(x: f64, lambda: f64) -> Result<f64, SpecialFunctionError> {
    check_rate(x, lambda)?;
    Ok(lambda * (-lambda * x).exp())
}

/// 1 − e^(−λx).
pub fn exponential_cdf(x: f64, lambda: f64) -> Result<f64, SpecialFunctionError> {
    check_rate(x, lambda)?;
    Ok(1.0 - (-lambda * x).exp())
}

/// Density 1/(b − a) on `[a, b]`, zero elsewhere.
pub fn uniform_pdf(x: f64, a: f64, b: f64) -> Result<f64, SpecialFunctionError> {
    check_bounds(a, b)?;
    if x < a || x > b {
        return Ok(0.0);
    }
    Ok(1.0 / (b - a))
}

/// (x − a)/(b − a), clamped to 0 below `a` and 1 above `b`.
pub fn uniform_cdf(x: f64, a: f64, b: f64) -> Result<f64, SpecialFunctionError> {
    check_bounds(a, b)?;
    if x <= a {
        Ok(0.0)
    } else if x >= b {
        Ok(1.0)
    } else {
        Ok((x - a) / (b - a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponential_values() {
        assert!((exponential_pdf(0.0, 2.0).unwrap() - 2.0).abs() < 1e-15);
        let cdf = exponential_cdf(1.0, 0.5).unwrap();
        assert!((cdf - (1.0 - (-0.5f64).exp())).abs() < 1e-15);
        assert_eq!(exponential_cdf(0.0, 3.0).unwrap(), 0.0);
    }

    #[test]
    fn test_exponential_median() {
        let lambda = 1.5;
        let median = std::f64::consts::LN_2 / lambda;
        assert!((exponential_cdf(median, lambda).unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_exponential_rejects_invalid() {
        assert!(exponential_pdf(-0.1, 1.0).is_err());
        assert!(exponential_cdf(1.0, 0.0).is_err());
        assert!(exponential_cdf(1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_uniform_pdf() {
        assert!((uniform_pdf(3.0, 2.0, 6.0).unwrap() - 0.25).abs() < 1e-15);
        assert_eq!(uniform_pdf(1.0, 2.0, 6.0).unwrap(), 0.0);
        assert_eq!(uniform_pdf(7.0, 2.0, 6.0).unwrap(), 0.0);
    }

    #[test]
    fn test_uniform_cdf_clamped() {
        assert_eq!(uniform_cdf(-5.0, 0.0, 10.0).unwrap(), 0.0);
        assert!((uniform_cdf(2.5, 0.0, 10.0).unwrap() - 0.25).abs() < 1e-15);
        assert_eq!(uniform_cdf(11.0, 0.0, 10.0).unwrap(), 1.0);
    }

    #[test]
    fn test_uniform_rejects_empty_support() {
        assert!(uniform_pdf(0.0, 1.0, 1.0).is_err());
        assert!(uniform_cdf(0.0, 2.0, 1.0).is_err());
    }
}

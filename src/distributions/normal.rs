//! Normal distribution N(μ, σ).

use crate::special::{standard_normal_inverse_cdf, SpecialFunctionError};
use statrs::distribution::{Continuous, ContinuousCDF, Normal};

fn check_sigma(mu: f64, sigma: f64) -> Result<(), SpecialFunctionError> {
    if !mu.is_finite() || !sigma.is_finite() || sigma <= 0.0 {
        return Err(SpecialFunctionError::InvalidParameter(format!(
            "normal distribution requires finite μ and σ > 0, got μ={mu}, σ={sigma}"
        )));
    }
    Ok(())
}

fn distribution(mu: f64, sigma: f64) -> Result<Normal, SpecialFunctionError> {
    check_sigma(mu, sigma)?;
    Normal::new(mu, sigma).map_err(|e| {
        SpecialFunctionError::InvalidParameter(format!("normal distribution: {e}"))
    })
}

/// Density (1/(σ√(2π)))·exp(−(x−μ)²/(2σ²)).
pub fn normal_pdf(x: f64, mu: f64, sigma: f64) -> Result<f64, SpecialFunctionError> {
    Ok(distribution(mu, sigma)?.pdf(x))
}

/// Φ((x−μ)/σ).
pub fn normal_cdf(x: f64, mu: f64, sigma: f64) -> Result<f64, SpecialFunctionError> {
    Ok(distribution(mu, sigma)?.cdf(x))
}

/// Quantile μ + σ·Φ⁻¹(p).
///
/// # Errors
/// `InvalidParameter` when σ ≤ 0 or `p` is outside `(0, 1)`.
pub fn normal_inverse_cdf(p: f64, mu: f64, sigma: f64) -> Result<f64, SpecialFunctionError> {
    check_sigma(mu, sigma)?;
    Ok(mu + sigma * standard_normal_inverse_cdf(p)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_pdf_peak() {
        let peak = normal_pdf(0.0, 0.0, 1.0).unwrap();
        assert!((peak - 0.398_942_280_401_432_7).abs() < 1e-12);
    }

    #[test]
    fn test_pdf_scales_with_sigma() {
        let wide = normal_pdf(10.0, 10.0, 2.0).unwrap();
        assert!((wide - 0.398_942_280_401_432_7 / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_pdf_matches_closed_form() {
        let (mu, sigma) = (3.0, 1.5);
        for &x in &[-1.0, 2.0, 3.0, 4.5, 9.0] {
            let z: f64 = (x - mu) / sigma;
            let expected =
                (-0.5 * z * z).exp() / (sigma * (2.0 * std::f64::consts::PI).sqrt());
            assert!((normal_pdf(x, mu, sigma).unwrap() - expected).abs() < 1e-14);
        }
    }

    #[test]
    fn test_cdf_matches_standardized_phi() {
        use crate::special::standard_normal_cdf;
        for &x in &[-20.0, 85.0, 100.0, 130.0] {
            let expected = standard_normal_cdf((x - 100.0) / 15.0);
            assert!((normal_cdf(x, 100.0, 15.0).unwrap() - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_cdf_shifted() {
        let p = normal_cdf(100.0, 100.0, 15.0).unwrap();
        assert!((p - 0.5).abs() < 1e-15);
        let p = normal_cdf(115.0, 100.0, 15.0).unwrap();
        assert!((p - 0.841_344_746).abs() < 1e-8);
    }

    #[test]
    fn test_inverse_cdf_shifted() {
        let x = normal_inverse_cdf(0.975, 50.0, 10.0).unwrap();
        assert!((x - 69.599_64).abs() < 1e-3);
    }

    #[test]
    fn test_rejects_non_positive_sigma() {
        assert!(normal_pdf(0.0, 0.0, 0.0).is_err());
        assert!(normal_cdf(0.0, 0.0, -1.0).is_err());
        assert!(normal_inverse_cdf(0.5, 0.0, 0.0).is_err());
        assert!(normal_inverse_cdf(1.0, 0.0, 1.0).is_err());
    }
}

//! Standard normal CDF and quantile function.

use super::SpecialFunctionError;
use statrs::function::erf::erf;
use std::f64::consts::SQRT_2;

// Acklam's rational approximation: central region numerator/denominator (a, b)
// and tail numerator/denominator (c, d).
const A: [f64; 6] = [
    -3.969_683_028_665_376e1,
    2.209_460_984_245_205e2,
    -2.759_285_104_469_687e2,
    1.383_577_518_672_690e2,
    -3.066_479_806_614_716e1,
    2.506_628_277_459_239,
];
const B: [f64; 5] = [
    -5.447_609_879_822_406e1,
    1.615_858_368_580_409e2,
    -1.556_989_798_598_866e2,
    6.680_131_188_771_972e1,
    -1.328_068_155_288_572e1,
];
const C: [f64; 6] = [
    -7.784_894_002_430_293e-3,
    -3.223_964_580_411_365e-1,
    -2.400_758_277_161_838,
    -2.549_732_539_343_734,
    4.374_664_141_464_968,
    2.938_163_982_698_783,
];
const D: [f64; 4] = [
    7.784_695_709_041_462e-3,
    3.224_671_290_700_398e-1,
    2.445_134_137_142_996,
    3.754_408_661_907_416,
];

/// Lower break point between the tail and central regions.
const P_LOW: f64 = 0.02425;
/// Upper break point, `1 - P_LOW`.
const P_HIGH: f64 = 1.0 - P_LOW;

/// Standard normal CDF Φ(x) = ½·(1 + erf(x/√2)).
pub fn standard_normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / SQRT_2))
}

/// Standard normal quantile Φ⁻¹(p) by Acklam's rational approximation.
///
/// Three regions are evaluated separately: the lower tail `p < 0.02425`,
/// the upper tail `p > 0.97575` (by symmetry with the lower tail), and the
/// central region as a rational polynomial in `q = p − 0.5`. Relative error
/// is about 1.15e-9 over the whole range.
///
/// # Errors
/// [`SpecialFunctionError::InvalidParameter`] unless `0 < p < 1`.
///
/// # Examples
/// ```
/// use statkit::special::standard_normal_inverse_cdf;
/// let z = standard_normal_inverse_cdf(0.975).unwrap();
/// assert!((z - 1.959964).abs() < 1e-5);
/// assert!(standard_normal_inverse_cdf(1.0).is_err());
/// ```
pub fn standard_normal_inverse_cdf(p: f64) -> Result<f64, SpecialFunctionError> {
    // Written so that NaN also fails the check.
    if !(p > 0.0 && p < 1.0) {
        return Err(SpecialFunctionError::InvalidParameter(format!(
            "normal quantile requires p in (0, 1), got {p}"
        )));
    }

    let z = if p < P_LOW {
        tail((-2.0 * p.ln()).sqrt())
    } else if p > P_HIGH {
        -tail((-2.0 * (1.0 - p).ln()).sqrt())
    } else {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    };

    Ok(z)
}

/// Lower-tail rational function in `q = √(−2 ln p)`.
fn tail(q: f64) -> f64 {
    (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
        / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
}

//! Standard normal distribution functions.
//!
//! The CDF is computed through the error function identity
//! `N(x) = 0.5 * (1 + erf(x / sqrt(2)))`, which stays accurate in the tails
//! where polynomial CDF approximations degrade.

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) for X ~ N(0, 1) via `libm::erf`. Infinite arguments
/// are honoured: `norm_cdf(f64::NEG_INFINITY) == 0.0` and
/// `norm_cdf(f64::INFINITY) == 1.0`, which the pricing code relies on for
/// the degenerate `ln(S0/K)` limits.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!(norm_cdf(-8.0) < 1e-15);
/// assert!(norm_cdf(8.0) > 1.0 - 1e-15);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + libm::erf(x / std::f64::consts::SQRT_2))
}

/// Standard normal probability density function.
///
/// `phi(x) = exp(-x^2 / 2) / sqrt(2 * pi)`
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

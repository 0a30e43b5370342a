// src/math_utils.rs
use statrs::function::erf;
use std::f64::consts::{PI, SQRT_2};

/// Standard normal cumulative distribution function Φ(x)
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf::erf(x / SQRT_2))
}

/// Standard normal probability density function
///
/// # Formula
/// ```text
/// φ(x) = (1/√(2π)) * exp(-x²/2)
/// ```
pub fn norm_pdf(x: f64) -> f64 {
    (1.0 / (2.0 * PI).sqrt()) * (-0.5 * x * x).exp()
}

/// Round to 3 decimal places (half away from zero)
///
/// Matrix cells are rounded uniformly so that heatmap output is stable
/// across platforms and directly comparable in tests.
pub fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// Round to 2 decimal places, used for spot-axis display labels
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norm_cdf_symmetry() {
        // Φ(x) + Φ(-x) = 1
        for x in [0.0, 0.5, 1.0, 2.33, 5.0] {
            assert!((norm_cdf(x) + norm_cdf(-x) - 1.0).abs() < 1e-12);
        }
        assert!((norm_cdf(0.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_norm_cdf_known_values() {
        // Standard normal table values
        assert!((norm_cdf(1.0) - 0.841344746068543).abs() < 1e-9);
        assert!((norm_cdf(1.96) - 0.975002104851780).abs() < 1e-9);
    }

    #[test]
    fn test_norm_pdf_peak() {
        // Maximum at x = 0: 1/sqrt(2*pi)
        assert!((norm_pdf(0.0) - 0.398942280401433).abs() < 1e-12);
        assert!((norm_pdf(1.5) - norm_pdf(-1.5)).abs() < 1e-15);
    }

    #[test]
    fn test_round3() {
        assert_eq!(round3(5.9094), 5.909);
        assert_eq!(round3(5.90951), 5.910);
        assert_eq!(round3(-0.4600361), -0.460);
        assert_eq!(round2(101.666), 101.67);
    }
}

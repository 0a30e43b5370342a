// src/analytics.rs
//! Closed-form Black-Scholes prices and Greeks for European options
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model the underlying follows:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! Risk-neutral pricing gives closed-form solutions in terms of the
//! standard normal CDF Φ and density φ:
//! ```text
//! d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
//! d₂ = d₁ - σ√T
//! ```
//!
//! # Conventions
//!
//! - `sigma` is a **fraction** (0.5 means 50% annualized volatility).
//! - `t` is in **years**; callers working in days divide by 365.
//! - Vega is scaled per 1 volatility point (×0.01), Rho per 1 rate point
//!   (×0.01), Theta per calendar day (÷365). These match how the
//!   sensitivities are usually quoted on option chains.
//!
//! All functions share the signature `(s, k, r, sigma, t) -> f64` so the
//! engine can dispatch to them through a plain function table.

use crate::math_utils::{norm_cdf, norm_pdf};

/// Calendar-day count used to convert day-counts into year fractions
pub const DAYS_PER_YEAR: f64 = 365.0;

fn d1(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / (sigma * t.sqrt())
}

fn d2(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    d1(s, k, r, sigma, t) - sigma * t.sqrt()
}

/// European call price
///
/// ```text
/// C = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
/// ```
pub fn call_price(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    s * norm_cdf(d1(s, k, r, sigma, t)) - k * (-r * t).exp() * norm_cdf(d2(s, k, r, sigma, t))
}

/// European put price
///
/// ```text
/// P = K*e^(-rT)*Φ(-d₂) - S*Φ(-d₁)
/// ```
pub fn put_price(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    k * (-r * t).exp() * norm_cdf(-d2(s, k, r, sigma, t)) - s * norm_cdf(-d1(s, k, r, sigma, t))
}

/// Call Delta: Φ(d₁), in [0, 1]
pub fn call_delta(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    norm_cdf(d1(s, k, r, sigma, t))
}

/// Put Delta: -Φ(-d₁), in [-1, 0]
pub fn put_delta(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    -norm_cdf(-d1(s, k, r, sigma, t))
}

/// Gamma: φ(d₁) / (S σ √T), identical for calls and puts
pub fn gamma(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    norm_pdf(d1(s, k, r, sigma, t)) / (s * sigma * t.sqrt())
}

/// Vega per 1 volatility point: S φ(d₁) √T × 0.01
///
/// Identical for calls and puts.
pub fn vega(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    s * norm_pdf(d1(s, k, r, sigma, t)) * t.sqrt() * 0.01
}

/// Call Theta per calendar day
///
/// ```text
/// Θ_c = [-S*φ(d₁)*σ/(2√T) - r*K*e^(-rT)*Φ(d₂)] / 365
/// ```
pub fn call_theta(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let d1v = d1(s, k, r, sigma, t);
    let d2v = d1v - sigma * t.sqrt();
    ((-s * norm_pdf(d1v) * sigma) / (2.0 * t.sqrt()) - r * k * (-r * t).exp() * norm_cdf(d2v))
        / DAYS_PER_YEAR
}

/// Put Theta per calendar day
///
/// Same decay term as the call but the carry term flips sign with Φ(-d₂).
pub fn put_theta(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let d1v = d1(s, k, r, sigma, t);
    let d2v = d1v - sigma * t.sqrt();
    ((-s * norm_pdf(d1v) * sigma) / (2.0 * t.sqrt()) + r * k * (-r * t).exp() * norm_cdf(-d2v))
        / DAYS_PER_YEAR
}

/// Call Rho per 1 rate point: K T e^(-rT) Φ(d₂) × 0.01
pub fn call_rho(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    k * t * (-r * t).exp() * norm_cdf(d2(s, k, r, sigma, t)) * 0.01
}

/// Put Rho per 1 rate point: -K T e^(-rT) Φ(-d₂) × 0.01
pub fn put_rho(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    -k * t * (-r * t).exp() * norm_cdf(-d2(s, k, r, sigma, t)) * 0.01
}

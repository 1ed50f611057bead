//! Exact monomial integrals of the classical weight functions.
//!
//! For each rule family this module gives the closed-form value of
//! `∫ xᵖ ρ(x) dx` over the family's domain. The test suite uses these to
//! verify the polynomial-exactness degree of every computed rule; the values
//! are also handy for constructing reference solutions.

use statrs::function::gamma::gamma;
use std::f64::consts::PI;

/// `∫_{-1}^{1} xᵖ dx`.
pub fn legendre(p: u32) -> f64 {
    if p % 2 == 1 {
        0.0
    } else {
        2.0 / (p + 1) as f64
    }
}

/// `∫_{-1}^{1} xᵖ (1-x²)^{-1/2} dx`, which is `π (p-1)!! / p!!` for even `p`.
pub fn chebyshev1(p: u32) -> f64 {
    if p % 2 == 1 {
        return 0.0;
    }
    let mut value = PI;
    for i in 1..=p / 2 {
        value *= (2 * i - 1) as f64 / (2 * i) as f64;
    }
    value
}

/// `∫_{-1}^{1} xᵖ (1-x²)^{1/2} dx`.
pub fn chebyshev2(p: u32) -> f64 {
    if p % 2 == 1 {
        0.0
    } else {
        gamma((p as f64 + 1.0) / 2.0) * gamma(1.5) / gamma(p as f64 / 2.0 + 2.0)
    }
}

/// `∫_{-∞}^{∞} xᵖ exp(-x²) dx`.
pub fn hermite(p: u32) -> f64 {
    if p % 2 == 1 {
        0.0
    } else {
        gamma((p as f64 + 1.0) / 2.0)
    }
}

/// `∫_{-∞}^{∞} xᵖ |x|^α exp(-x²) dx`, for `p + α > -1`.
pub fn generalized_hermite(p: u32, alpha: f64) -> f64 {
    if p % 2 == 1 {
        0.0
    } else {
        gamma((p as f64 + alpha + 1.0) / 2.0)
    }
}

/// `∫_{0}^{∞} xᵖ exp(-x) dx = p!`.
pub fn laguerre(p: u32) -> f64 {
    gamma(p as f64 + 1.0)
}

/// `∫_{0}^{∞} xᵖ x^α exp(-x) dx = Γ(p + α + 1)`.
pub fn generalized_laguerre(p: u32, alpha: f64) -> f64 {
    gamma(p as f64 + alpha + 1.0)
}

/// `∫_{-1}^{1} xᵖ (1-x²)^α dx`, a Beta integral for even `p`.
pub fn gegenbauer(p: u32, alpha: f64) -> f64 {
    if p % 2 == 1 {
        0.0
    } else {
        gamma(alpha + 1.0) * gamma((p as f64 + 1.0) / 2.0)
            / gamma(alpha + (p as f64 + 3.0) / 2.0)
    }
}

/// `∫_{-1}^{1} xᵖ (1-x)^α (1+x)^β dx`.
///
/// Computed by the exact moment recurrence
/// `(k + 2 + α + β) I_{k+1} = (β - α) I_k + k I_{k-1}`,
/// seeded with the Beta-function value of `I₀`. The recurrence follows from
/// integrating `xᵏ (1-x²) ρ'(x)` by parts and involves no cancellation-prone
/// special functions.
pub fn jacobi(p: u32, alpha: f64, beta: f64) -> f64 {
    let ab = alpha + beta;
    let i0 = 2.0f64.powf(ab + 1.0) * gamma(alpha + 1.0) * gamma(beta + 1.0) / gamma(ab + 2.0);
    if p == 0 {
        return i0;
    }

    let mut prev = i0;
    let mut current = (beta - alpha) / (ab + 2.0) * i0;
    for k in 1..p {
        let next = ((beta - alpha) * current + k as f64 * prev) / (k as f64 + 2.0 + ab);
        prev = current;
        current = next;
    }
    current
}

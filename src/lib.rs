//! Quadrature rules for one-dimensional integrals with classical weight functions.
//!
//! This crate generates Gaussian quadrature rules, sets of abscissas and weights
//! such that `∫ f(x) ρ(x) dx ≈ Σ wᵢ f(xᵢ)`, for the classical orthogonal
//! polynomial families (Legendre, Hermite, Laguerre, Jacobi, Gegenbauer and their
//! generalized variants), as well as the closed-form Chebyshev, Clenshaw-Curtis
//! and Fejér rules.
//!
//! Two independent constructions are provided:
//!
//! * [`gauss`] diagonalizes the family's Jacobi matrix (the symmetric tridiagonal
//!   matrix of three-term recurrence coefficients) with an implicit-QL iteration,
//!   obtaining all abscissas and weights at once. This is the Golub-Welsch
//!   approach in the variant of Elhay and Kautsky.
//! * [`roots`] finds the abscissas one at a time by Newton iteration on the
//!   orthogonal polynomial itself, using classical asymptotic initial guesses.
//!   This is the older Stroud-Secrest construction (Davis-Rabinowitz for
//!   Legendre). It is retained both as an independent cross-check of [`gauss`]
//!   and because its per-root refinement is useful on its own.
//!
//! Both paths produce strictly ascending abscissas, and both enforce exact
//! (bitwise) symmetry of points and weights for symmetric weight functions.
//!
//! Rules are pure functions of their inputs: there is no caching and no shared
//! state, so concurrent rule construction from multiple threads needs no
//! synchronization.

use std::fmt;
use std::fmt::{Display, Formatter};

pub mod chebyshev;
pub mod clenshaw_curtis;
mod eigen;
pub mod gauss;
mod golub_welsch;
pub mod moments;
pub mod roots;

/// Library-wide error type.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A rule with zero points was requested.
    InvalidOrder { order: usize },
    /// A family parameter lies outside its admissible open interval.
    ///
    /// `name` identifies the offending parameter and the rule requires
    /// `value > limit`.
    InvalidParameter {
        name: &'static str,
        value: f64,
        limit: f64,
    },
    /// The implicit-QL iteration failed to isolate an eigenvalue of the
    /// Jacobi matrix within its iteration budget.
    ///
    /// This indicates a genuine numerical breakdown and does not occur for
    /// the well-conditioned matrices produced by the built-in families.
    EigensolverNoConvergence {
        eigenvalue_index: usize,
        iterations: usize,
    },
    /// Newton polishing of a polynomial root failed to meet its convergence
    /// tolerance within the iteration budget.
    ///
    /// Not produced when the `lenient-newton` feature is enabled; the last
    /// iterate is accepted instead.
    NewtonNoConvergence { root_index: usize, last_step: f64 },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOrder { order } => {
                write!(f, "Invalid quadrature order {}; at least one point is required.", order)
            }
            Self::InvalidParameter { name, value, limit } => {
                write!(f, "Invalid parameter {} = {}; the rule requires {} > {}.", name, value, name, limit)
            }
            Self::EigensolverNoConvergence {
                eigenvalue_index,
                iterations,
            } => {
                write!(
                    f,
                    "Implicit-QL iteration for eigenvalue {} failed to converge within {} iterations.",
                    eigenvalue_index, iterations
                )
            }
            Self::NewtonNoConvergence { root_index, last_step } => {
                write!(
                    f,
                    "Newton refinement of root {} failed to converge (last step {:e}).",
                    root_index, last_step
                )
            }
        }
    }
}

impl std::error::Error for Error {}

/// A one-dimensional quadrature rule: `(points, weights)`, both of the same
/// length, with points in strictly ascending order.
pub type Rule = (Vec<f64>, Vec<f64>);

/// Approximates `∫ f(x) ρ(x) dx` by the weighted sum `Σ wᵢ f(xᵢ)`.
///
/// The weight function `ρ` is the one associated with the rule; for example a
/// rule from [`gauss::hermite`] integrates against `exp(-x²)`, so
/// `integrate(&rule, |_| 1.0)` returns (approximately) `√π`.
pub fn integrate<F>(rule: &Rule, f: F) -> f64
where
    F: Fn(f64) -> f64,
{
    let (points, weights) = rule;
    points.iter().zip(weights).map(|(&x, &w)| w * f(x)).sum()
}

/// Checks `order >= 1`, the precondition shared by every rule constructor.
fn check_order(order: usize) -> Result<(), Error> {
    if order == 0 {
        Err(Error::InvalidOrder { order })
    } else {
        Ok(())
    }
}

/// Checks the open-interval constraint `value > limit` for a family parameter.
fn check_parameter(name: &'static str, value: f64, limit: f64) -> Result<(), Error> {
    // NaN must fail the check as well, hence the negated comparison.
    if !(value > limit) {
        Err(Error::InvalidParameter { name, value, limit })
    } else {
        Ok(())
    }
}

/// Enforces exact symmetry about zero on a computed rule.
///
/// Reflection of independently computed halves does not guarantee bitwise
/// symmetry, so the two halves are averaged: the point magnitudes and weights
/// of mirrored pairs are replaced by their means, and for odd `n` the center
/// point is forced to exactly zero. The perturbation is on the order of the
/// roundoff already present in the inputs.
fn symmetrize(points: &mut [f64], weights: &mut [f64]) {
    let n = points.len();
    for i in 0..n / 2 {
        let j = n - 1 - i;
        let magnitude = 0.5 * (points[j] - points[i]);
        points[i] = -magnitude;
        points[j] = magnitude;
        let weight = 0.5 * (weights[i] + weights[j]);
        weights[i] = weight;
        weights[j] = weight;
    }
    if n % 2 == 1 {
        points[n / 2] = 0.0;
    }
}

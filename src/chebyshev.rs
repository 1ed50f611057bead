//! Gauss-Chebyshev rules of the first and second kind.
//!
//! Both families admit closed-form abscissas and weights on the cosine grid,
//! so no root finding or eigensolve is involved.

use crate::{check_order, symmetrize, Error, Rule};
use std::f64::consts::PI;

/// Gauss-Chebyshev rule of the first kind: weight `1/√(1-x²)` on (-1, 1).
///
/// `xᵢ = cos((2i-1)π / 2n)`, all weights equal to `π/n`. Exact for
/// polynomials of degree up to `2n - 1`.
pub fn first_kind(order: usize) -> Result<Rule, Error> {
    check_order(order)?;
    let n = order;

    let mut points: Vec<f64> = (1..=n)
        .map(|i| ((2 * i - 1) as f64 * PI / (2 * n) as f64).cos())
        .collect();
    points.reverse();
    let mut weights = vec![PI / n as f64; n];

    symmetrize(&mut points, &mut weights);
    Ok((points, weights))
}

/// Gauss-Chebyshev rule of the second kind: weight `√(1-x²)` on [-1, 1].
///
/// `xᵢ = cos(iπ / (n+1))`, `wᵢ = π/(n+1) · sin²(iπ/(n+1))`. Exact for
/// polynomials of degree up to `2n - 1`.
pub fn second_kind(order: usize) -> Result<Rule, Error> {
    check_order(order)?;
    let n = order;

    let mut points = Vec::with_capacity(n);
    let mut weights = Vec::with_capacity(n);
    for i in (1..=n).rev() {
        let angle = i as f64 * PI / (n + 1) as f64;
        points.push(angle.cos());
        weights.push(PI / (n + 1) as f64 * angle.sin().powi(2));
    }

    symmetrize(&mut points, &mut weights);
    Ok((points, weights))
}

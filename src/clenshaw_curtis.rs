//! Clenshaw-Curtis and Fejér rules on the cosine grid.
//!
//! Interpolatory rules for weight 1 on [-1, 1]: the integrand is sampled at
//! extrema (Clenshaw-Curtis, closed) or interior points (Fejér type 2, open)
//! of a Chebyshev polynomial and the weights follow from integrating the
//! interpolating cosine series term by term. An order-`n` rule is exact for
//! polynomials of degree up to `n - 1` (`n` when `n` is odd), and
//! Clenshaw-Curtis rules of orders `2^k + 1` are nested.

use crate::{check_order, symmetrize, Error, Rule};
use std::f64::consts::PI;

/// Clenshaw-Curtis rule of the given order.
///
/// Order 1 is the midpoint rule `{0.0}` with weight 2; for order ≥ 2 the
/// points are `cos(iπ/(n-1))` with the endpoints exactly ±1 and, for odd
/// order, an exact zero at the center.
pub fn clenshaw_curtis(order: usize) -> Result<Rule, Error> {
    check_order(order)?;
    let n = order;

    if n == 1 {
        return Ok((vec![0.0], vec![2.0]));
    }

    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        points.push(((n - 1 - i) as f64 * PI / (n - 1) as f64).cos());
    }
    points[0] = -1.0;
    if n % 2 == 1 {
        points[(n - 1) / 2] = 0.0;
    }
    points[n - 1] = 1.0;

    let mut weights = vec![1.0; n];
    for i in 0..n {
        let theta = i as f64 * PI / (n - 1) as f64;
        for j in 1..=(n - 1) / 2 {
            // The top cosine mode is counted once, all others twice.
            let b = if 2 * j == n - 1 { 1.0 } else { 2.0 };
            weights[i] -= b * (2.0 * j as f64 * theta).cos() / (4 * j * j - 1) as f64;
        }
    }

    weights[0] /= (n - 1) as f64;
    for w in weights.iter_mut().take(n - 1).skip(1) {
        *w *= 2.0 / (n - 1) as f64;
    }
    weights[n - 1] /= (n - 1) as f64;

    // The cosine grid is symmetric; the weight sums above reproduce that
    // symmetry only up to roundoff. The endpoints stay exactly ±1.
    symmetrize(&mut points, &mut weights);

    Ok((points, weights))
}

/// Fejér type 2 rule of the given order.
///
/// The open counterpart of [`clenshaw_curtis`]: points `cos(iπ/(n+1))` for
/// `i = 1..n`, excluding the endpoints.
pub fn fejer2(order: usize) -> Result<Rule, Error> {
    check_order(order)?;
    let n = order;

    if n == 1 {
        return Ok((vec![0.0], vec![2.0]));
    }

    let mut points = Vec::with_capacity(n);
    for i in 1..=n {
        points.push(((n + 1 - i) as f64 * PI / (n + 1) as f64).cos());
    }
    if n % 2 == 1 {
        points[(n - 1) / 2] = 0.0;
    }

    let mut weights = vec![1.0; n];
    if n == 2 {
        weights[0] = 1.0;
        weights[1] = 1.0;
    } else {
        let p = 2.0 * ((n + 1) / 2) as f64 - 1.0;
        for i in 1..=n {
            let theta = (n + 1 - i) as f64 * PI / (n + 1) as f64;
            let mut w = 1.0;
            for j in 1..=(n - 1) / 2 {
                w -= 2.0 * (2.0 * j as f64 * theta).cos() / (4 * j * j - 1) as f64;
            }
            w -= ((p + 1.0) * theta).cos() / p;
            weights[i - 1] = w;
        }
        for w in weights.iter_mut() {
            *w *= 2.0 / (n + 1) as f64;
        }
    }

    symmetrize(&mut points, &mut weights);
    Ok((points, weights))
}

//! Gauss rules computed by diagonalizing the Jacobi matrix.
//!
//! Every constructor here follows the same pipeline: validate the order and
//! family parameters, build the family's Jacobi matrix, diagonalize it with
//! the implicit-QL eigensolver, and post-process (exact symmetrization for
//! symmetric weight functions). An order-`n` rule integrates polynomials of
//! degree up to `2n - 1` exactly against the family's weight function.

use crate::golub_welsch::JacobiMatrix;
use crate::{check_order, check_parameter, symmetrize, Error, Rule};
use log::debug;

/// Gauss-Legendre rule: weight 1 on [-1, 1].
pub fn legendre(order: usize) -> Result<Rule, Error> {
    check_order(order)?;
    let (mut points, mut weights) = JacobiMatrix::legendre(order).gauss_rule()?;
    symmetrize(&mut points, &mut weights);
    debug!("computed Gauss-Legendre rule of order {}", order);
    Ok((points, weights))
}

/// Gauss-Hermite rule: weight `exp(-x²)` on (-∞, ∞).
pub fn hermite(order: usize) -> Result<Rule, Error> {
    check_order(order)?;
    let (mut points, mut weights) = JacobiMatrix::hermite(order).gauss_rule()?;
    symmetrize(&mut points, &mut weights);
    debug!("computed Gauss-Hermite rule of order {}", order);
    Ok((points, weights))
}

/// Generalized Gauss-Hermite rule: weight `|x|^α exp(-x²)` on (-∞, ∞).
///
/// Requires `alpha > -1`.
pub fn generalized_hermite(order: usize, alpha: f64) -> Result<Rule, Error> {
    check_order(order)?;
    check_parameter("alpha", alpha, -1.0)?;
    let (mut points, mut weights) =
        JacobiMatrix::generalized_hermite(order, alpha).gauss_rule()?;
    symmetrize(&mut points, &mut weights);
    Ok((points, weights))
}

/// Gauss-Laguerre rule: weight `exp(-x)` on [0, ∞).
pub fn laguerre(order: usize) -> Result<Rule, Error> {
    generalized_laguerre(order, 0.0)
}

/// Generalized Gauss-Laguerre rule: weight `x^α exp(-x)` on [0, ∞).
///
/// Requires `alpha > -1`.
pub fn generalized_laguerre(order: usize, alpha: f64) -> Result<Rule, Error> {
    check_order(order)?;
    check_parameter("alpha", alpha, -1.0)?;
    JacobiMatrix::generalized_laguerre(order, alpha).gauss_rule()
}

/// Gauss-Jacobi rule: weight `(1 - x)^α (1 + x)^β` on [-1, 1].
///
/// Requires `alpha > -1` and `beta > -1`.
pub fn jacobi(order: usize, alpha: f64, beta: f64) -> Result<Rule, Error> {
    check_order(order)?;
    check_parameter("alpha", alpha, -1.0)?;
    check_parameter("beta", beta, -1.0)?;
    let (mut points, mut weights) = JacobiMatrix::jacobi(order, alpha, beta).gauss_rule()?;
    // The weight function is symmetric exactly when α = β.
    if alpha == beta {
        symmetrize(&mut points, &mut weights);
    }
    Ok((points, weights))
}

/// Gauss-Gegenbauer rule: weight `(1 - x²)^α` on [-1, 1].
///
/// Requires `alpha > -1`. Computed by the classical root-finding construction
/// (see [`crate::roots::gegenbauer`]); the Gegenbauer family is the one
/// classical family served by that path rather than by the eigensolver.
pub fn gegenbauer(order: usize, alpha: f64) -> Result<Rule, Error> {
    crate::roots::gegenbauer(order, alpha)
}

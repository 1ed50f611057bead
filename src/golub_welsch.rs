//! Jacobi matrices of the classical orthogonal polynomial families.
//!
//! Each family's three-term recurrence defines a symmetric tridiagonal matrix
//! whose eigenvalues are the Gauss abscissas (the Golub-Welsch theorem). The
//! builders here produce that matrix together with the zero-th moment of the
//! weight function, and [`JacobiMatrix::gauss_rule`] turns it into a rule via
//! the implicit-QL eigensolver.

use crate::eigen::symmetric_tridiagonal_ql;
use crate::{Error, Rule};
use statrs::function::gamma::gamma;

/// The Jacobi (recurrence) matrix of an orthogonal polynomial family,
/// truncated to a given order, plus the zero-th moment of the weight function.
///
/// Only `subdiagonal[0..n-2]` is meaningful; the final entry is scratch for
/// the eigensolver. Instances are consumed by [`Self::gauss_rule`].
#[derive(Debug, Clone)]
pub struct JacobiMatrix {
    pub diagonal: Vec<f64>,
    pub subdiagonal: Vec<f64>,
    pub zeroth_moment: f64,
}

impl JacobiMatrix {
    /// Legendre: weight 1 on [-1, 1].
    ///
    /// The recurrence diagonal vanishes by symmetry and the subdiagonal is
    /// `i / √(4i² - 1)`.
    pub fn legendre(n: usize) -> Self {
        let subdiagonal = (1..=n)
            .map(|i| {
                let i = i as f64;
                (i * i / (4.0 * i * i - 1.0)).sqrt()
            })
            .collect();
        Self {
            diagonal: vec![0.0; n],
            subdiagonal,
            zeroth_moment: 2.0,
        }
    }

    /// Hermite: weight `exp(-x²)` on the real line.
    pub fn hermite(n: usize) -> Self {
        let subdiagonal = (1..=n).map(|i| (i as f64 / 2.0).sqrt()).collect();
        Self {
            diagonal: vec![0.0; n],
            subdiagonal,
            zeroth_moment: std::f64::consts::PI.sqrt(),
        }
    }

    /// Generalized Hermite: weight `|x|^α exp(-x²)` on the real line, α > -1.
    ///
    /// The squared subdiagonal alternates between `(i + α)/2` for odd `i` and
    /// `i/2` for even `i`; for α = 0 this reduces to the Hermite matrix.
    pub fn generalized_hermite(n: usize, alpha: f64) -> Self {
        let subdiagonal = (1..=n)
            .map(|i| {
                let squared = if i % 2 == 1 {
                    (i as f64 + alpha) / 2.0
                } else {
                    i as f64 / 2.0
                };
                squared.sqrt()
            })
            .collect();
        Self {
            diagonal: vec![0.0; n],
            subdiagonal,
            zeroth_moment: gamma((alpha + 1.0) / 2.0),
        }
    }

    /// Generalized Laguerre: weight `x^α exp(-x)` on [0, ∞), α > -1.
    ///
    /// α = 0 gives the plain Laguerre matrix with zero-th moment 1.
    pub fn generalized_laguerre(n: usize, alpha: f64) -> Self {
        let diagonal = (0..n).map(|i| 2.0 * i as f64 + 1.0 + alpha).collect();
        let subdiagonal = (1..=n)
            .map(|i| {
                let i = i as f64;
                (i * (i + alpha)).sqrt()
            })
            .collect();
        Self {
            diagonal,
            subdiagonal,
            zeroth_moment: gamma(alpha + 1.0),
        }
    }

    /// Jacobi: weight `(1 - x)^α (1 + x)^β` on [-1, 1], α, β > -1.
    pub fn jacobi(n: usize, alpha: f64, beta: f64) -> Self {
        let ab = alpha + beta;
        let zeroth_moment =
            2.0f64.powf(ab + 1.0) * gamma(alpha + 1.0) * gamma(beta + 1.0) / gamma(ab + 2.0);

        let mut diagonal = vec![0.0; n];
        let mut subdiagonal = vec![0.0; n];

        if n > 0 {
            // The general diagonal formula is 0/0 for the first entry when
            // α + β = 0, so it gets its own expression.
            diagonal[0] = (beta - alpha) / (ab + 2.0);
            subdiagonal[0] =
                (4.0 * (1.0 + alpha) * (1.0 + beta) / ((ab + 3.0) * (ab + 2.0) * (ab + 2.0)))
                    .sqrt();
        }
        for i in 2..=n {
            let k = i as f64;
            let abi = 2.0 * k + ab;
            diagonal[i - 1] = (beta * beta - alpha * alpha) / ((abi - 2.0) * abi);
            subdiagonal[i - 1] = (4.0 * k * (k + alpha) * (k + beta) * (k + ab)
                / ((abi * abi - 1.0) * abi * abi))
                .sqrt();
        }

        Self {
            diagonal,
            subdiagonal,
            zeroth_moment,
        }
    }

    /// Diagonalizes the matrix into a Gauss rule.
    ///
    /// Seeds the eigensolver's vector with `(√μ₀, 0, …, 0)`; the rotated
    /// entries squared are then exactly the quadrature weights, and the
    /// eigenvalues (ascending) are the abscissas.
    pub fn gauss_rule(self) -> Result<Rule, Error> {
        let Self {
            mut diagonal,
            mut subdiagonal,
            zeroth_moment,
        } = self;
        let n = diagonal.len();
        debug_assert!(n >= 1);

        let mut z = vec![0.0; n];
        z[0] = zeroth_moment.sqrt();

        symmetric_tridiagonal_ql(&mut diagonal, &mut subdiagonal, &mut z)?;

        let weights = z.iter().map(|zi| zi * zi).collect();
        Ok((diagonal, weights))
    }
}

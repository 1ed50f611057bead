//! Implicit-QL eigensolver for symmetric tridiagonal matrices.
//!
//! This is the numerical heart of the Golub-Welsch construction: the
//! eigenvalues of the Jacobi matrix are the quadrature abscissas, and the
//! first components of the eigenvectors (obtained here by co-rotating a
//! caller-supplied vector through the same Givens rotations, without ever
//! forming the orthogonal factor) yield the weights.
//!
//! The algorithm is the classical EISPACK implicit-QL iteration with
//! Wilkinson origin shifts, as used by Elhay and Kautsky.

use crate::Error;
use log::trace;

/// Iterations allowed per eigenvalue before the QL sweep is declared broken.
const MAX_SWEEPS: usize = 30;

/// Diagonalizes a symmetric tridiagonal matrix in place.
///
/// On entry `d` holds the diagonal, `e` the subdiagonal (`e[n - 1]` is unused
/// scratch) and `z` an arbitrary vector. On successful return `d` holds the
/// eigenvalues in ascending order and `z` has been replaced by `Qᵀ z`, where
/// `Q` is the orthogonal matrix of eigenvectors in the same order. `e` is
/// destroyed. All three slices must have the same length `n >= 1`.
///
/// Callers that need the original contents must pass copies; the destructive
/// contract is deliberate, since the inputs are single-use scratch in every
/// rule construction.
pub fn symmetric_tridiagonal_ql(d: &mut [f64], e: &mut [f64], z: &mut [f64]) -> Result<(), Error> {
    let n = d.len();
    assert_eq!(e.len(), n);
    assert_eq!(z.len(), n);

    if n == 1 {
        return Ok(());
    }

    let prec = f64::EPSILON;
    e[n - 1] = 0.0;

    for l in 0..n {
        let mut sweeps = 0;
        loop {
            // Find the first negligible subdiagonal entry at or after l. The
            // tolerance scales with the adjacent diagonal magnitudes so that
            // matrices of wildly different scale deflate correctly.
            let mut m = l;
            while m < n - 1 {
                if e[m].abs() <= prec * (d[m].abs() + d[m + 1].abs()) {
                    break;
                }
                m += 1;
            }

            // Eigenvalue isolated in position l.
            if m == l {
                break;
            }

            if sweeps >= MAX_SWEEPS {
                return Err(Error::EigensolverNoConvergence {
                    eigenvalue_index: l,
                    iterations: sweeps,
                });
            }
            sweeps += 1;

            // Wilkinson shift from the leading 2x2 of the active block.
            let mut p = d[l];
            let mut g = (d[l + 1] - p) / (2.0 * e[l]);
            let r = (g * g + 1.0).sqrt();
            g = d[m] - p + e[l] / (g + r.copysign(g));

            let mut s = 1.0;
            let mut c = 1.0;
            p = 0.0;

            // One QL sweep: Givens rotations from the bottom of the block up
            // to l, chasing the bulge and co-rotating z.
            for i in (l..m).rev() {
                let mut f = s * e[i];
                let b = c * e[i];

                if g.abs() <= f.abs() {
                    c = g / f;
                    let r = (c * c + 1.0).sqrt();
                    e[i + 1] = f * r;
                    s = 1.0 / r;
                    c *= s;
                } else {
                    s = f / g;
                    let r = (s * s + 1.0).sqrt();
                    e[i + 1] = g * r;
                    c = 1.0 / r;
                    s *= c;
                }

                g = d[i + 1] - p;
                let r = (d[i] - g) * s + 2.0 * c * b;
                p = s * r;
                d[i + 1] = g + p;
                g = c * r - b;

                f = z[i + 1];
                z[i + 1] = s * z[i] + c * f;
                z[i] = c * z[i] - s * f;
            }

            d[l] -= p;
            e[l] = g;
            e[m] = 0.0;
        }

        trace!("eigenvalue {} isolated after {} QL sweeps", l, sweeps);
    }

    // The QL sweeps leave the eigenvalues only locally ordered; finish with a
    // selection sort carrying z along.
    for i in 0..n - 1 {
        let mut k = i;
        for j in i + 1..n {
            if d[j] < d[k] {
                k = j;
            }
        }
        if k != i {
            d.swap(i, k);
            z.swap(i, k);
        }
    }

    Ok(())
}

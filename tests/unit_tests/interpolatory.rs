use orthoquad::{chebyshev, clenshaw_curtis, integrate, moments};

use matrixcompare::assert_scalar_eq;

#[test]
fn clenshaw_curtis_rules_satisfy_expected_accuracy() {
    for n in 1..=20usize {
        let rule = clenshaw_curtis::clenshaw_curtis(n).unwrap();
        assert!(rule.1.iter().all(|&w| w > 0.0));

        // Order n is exact for degree n-1; odd orders pick up one extra
        // degree by symmetry.
        let degree = if n % 2 == 1 { n } else { n - 1 };
        for p in 0..=degree as u32 {
            let estimated = integrate(&rule, |x| x.powi(p as i32));
            assert_scalar_eq!(estimated, moments::legendre(p), comp = abs, tol = 1e-13);
        }
    }
}

#[test]
fn fejer2_rules_satisfy_expected_accuracy() {
    for n in 1..=20usize {
        let rule = clenshaw_curtis::fejer2(n).unwrap();
        assert!(rule.1.iter().all(|&w| w > 0.0));

        let degree = if n % 2 == 1 { n } else { n - 1 };
        for p in 0..=degree as u32 {
            let estimated = integrate(&rule, |x| x.powi(p as i32));
            assert_scalar_eq!(estimated, moments::legendre(p), comp = abs, tol = 1e-13);
        }
    }
}

#[test]
fn chebyshev_rules_satisfy_expected_accuracy() {
    for n in 1..=15usize {
        let rule = chebyshev::first_kind(n).unwrap();
        for p in 0..=(2 * n as u32 - 1) {
            let estimated = integrate(&rule, |x| x.powi(p as i32));
            assert_scalar_eq!(estimated, moments::chebyshev1(p), comp = abs, tol = 1e-12);
        }

        let rule = chebyshev::second_kind(n).unwrap();
        for p in 0..=(2 * n as u32 - 1) {
            let estimated = integrate(&rule, |x| x.powi(p as i32));
            assert_scalar_eq!(estimated, moments::chebyshev2(p), comp = abs, tol = 1e-12);
        }
    }
}

#[test]
fn clenshaw_curtis_endpoints_and_degenerate_order() {
    let (x, w) = clenshaw_curtis::clenshaw_curtis(1).unwrap();
    assert_eq!(x, vec![0.0]);
    assert_eq!(w, vec![2.0]);

    for n in 2..=33usize {
        let (x, _) = clenshaw_curtis::clenshaw_curtis(n).unwrap();
        assert_eq!(x[0], -1.0);
        assert_eq!(x[n - 1], 1.0);
        for i in 1..n {
            assert!(x[i - 1] < x[i]);
        }
    }
}

#[test]
fn cosine_grid_rules_are_exactly_symmetric() {
    for n in [2, 3, 9, 16] {
        for (x, w) in [
            clenshaw_curtis::clenshaw_curtis(n).unwrap(),
            clenshaw_curtis::fejer2(n).unwrap(),
            chebyshev::first_kind(n).unwrap(),
            chebyshev::second_kind(n).unwrap(),
        ] {
            for i in 0..n {
                assert_eq!(x[i], -x[n - 1 - i]);
                assert_eq!(w[i], w[n - 1 - i]);
            }
        }
    }
}

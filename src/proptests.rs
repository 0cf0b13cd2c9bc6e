// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Property-based tests for polynomial arithmetic.

use crate::config::Tolerance;
use crate::polynomial::Polynomial;
use num_traits::{One, Zero};
use proptest::prelude::*;

// small enough that products of three never overflow i64
fn small_poly() -> impl Strategy<Value = Polynomial<i64>> {
    proptest::collection::vec(-100i64..100, 1..=6)
        .prop_map(|coefficients| Polynomial::from_coefficients(&coefficients).unwrap())
}

fn small_float_poly() -> impl Strategy<Value = Polynomial<f64>> {
    proptest::collection::vec(-100i32..100, 1..=6).prop_map(|coefficients| {
        let coefficients: Vec<f64> = coefficients.into_iter().map(|c| c as f64 / 4.0).collect();
        Polynomial::from_coefficients_with(&coefficients, Tolerance::new(1e-9).unwrap()).unwrap()
    })
}

proptest! {
    #[test]
    fn poly_construction_round_trip(coefficients in proptest::collection::vec(-100i64..100, 1..=8)) {
        let p = Polynomial::from_coefficients(&coefficients).unwrap();
        for (power, &coefficient) in coefficients.iter().enumerate() {
            prop_assert_eq!(p.get(power as isize).unwrap(), coefficient);
        }
        prop_assert_eq!(p.coefficient(coefficients.len()), 0);
        prop_assert!(p.degree() < coefficients.len());
        prop_assert!(p.degree() == 0 || p.coefficient(p.degree()) != 0);
    }

    #[test]
    fn poly_add_commutative(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    }

    #[test]
    fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn poly_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
        prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
    }

    #[test]
    fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }

    #[test]
    fn poly_identities(a in small_poly()) {
        prop_assert_eq!(&a + &Polynomial::zero(), a.clone());
        prop_assert_eq!(&a * &Polynomial::one(), a.clone());
        prop_assert!((&a * &Polynomial::zero()).is_zero());
    }

    #[test]
    fn poly_additive_inverse(a in small_poly()) {
        prop_assert!((&a - &a).is_zero());
        prop_assert_eq!(-(-&a), a.clone());
        prop_assert_eq!(&a - &a, &a + &(-&a));
    }

    #[test]
    fn poly_mul_degree(a in small_poly(), b in small_poly()) {
        let product = &a * &b;
        if !a.is_zero() && !b.is_zero() {
            prop_assert_eq!(product.degree(), a.degree() + b.degree());
        } else {
            prop_assert!(product.is_zero());
        }
    }

    #[test]
    fn poly_eval_homomorphism(a in small_poly(), b in small_poly(), x in -3i32..=3) {
        let x = x as f64;
        prop_assert_eq!((&a + &b).evaluate(x), a.evaluate(x) + b.evaluate(x));
        prop_assert_eq!((&a * &b).evaluate(x), a.evaluate(x) * b.evaluate(x));
    }

    #[test]
    fn poly_equal_implies_equal_hash(a in small_poly(), b in small_poly()) {
        let sum = &a + &b;
        let rebuilt = Polynomial::from_coefficients(sum.coefficients()).unwrap();
        prop_assert_eq!(&sum, &rebuilt);
        prop_assert_eq!(sum.hash_code(), rebuilt.hash_code());
    }

    #[test]
    fn poly_float_quarters_are_exact(a in small_float_poly(), b in small_float_poly()) {
        // quarters are exact in binary, so no rounding is involved
        let sum = &a + &b;
        let product = &a * &b;
        for power in 0..=10 {
            prop_assert_eq!(sum.coefficient(power), a.coefficient(power) + b.coefficient(power));
        }
        prop_assert_eq!(product.evaluate(1.0), a.evaluate(1.0) * b.evaluate(1.0));
    }
}

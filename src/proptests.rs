//! Property-based tests for quadratic integer arithmetic.

use crate::quadratic::{numeric_cmp, QuadraticInteger, QuadraticRing};
use crate::testing::{random_element, random_irrational, random_ring, seeded};
use crate::traits::QuadraticOps;
use crate::QuadraticError;
use proptest::prelude::*;
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

const RADICANDS: [i32; 12] = [2, 3, 5, 6, 7, 10, 13, 21, -1, -2, -3, -7];

fn hash_of(x: &QuadraticInteger) -> u64 {
    let mut hasher = DefaultHasher::new();
    x.hash(&mut hasher);
    hasher.finish()
}

// Build an element through one of its possible triples: `(a, b, 1)`, odd parts
// over 2 where the ring has half-integers, or the even parts `(2a, 2b, 2)`
fn build(ring: &Arc<QuadraticRing>, (a, b, form): (i32, i32, u8)) -> QuadraticInteger {
    match form {
        1 if ring.has_half_integers() => {
            QuadraticInteger::new(2 * a + 1, 2 * b + 1, ring.clone(), 2).unwrap()
        }
        2 => QuadraticInteger::new(2 * a, 2 * b, ring.clone(), 2).unwrap(),
        _ => QuadraticInteger::new(a, b, ring.clone(), 1).unwrap(),
    }
}

fn radicand() -> impl Strategy<Value = i32> {
    prop::sample::select(RADICANDS.to_vec())
}

fn parts() -> impl Strategy<Value = (i32, i32, u8)> {
    (-1000i32..1000, -1000i32..1000, 0u8..3)
}

fn element() -> impl Strategy<Value = QuadraticInteger> {
    (radicand(), parts()).prop_map(|(d, p)| build(&QuadraticRing::new(d).unwrap(), p))
}

// Two elements of the same ring
fn pair() -> impl Strategy<Value = (QuadraticInteger, QuadraticInteger)> {
    (radicand(), parts(), parts()).prop_map(|(d, p, q)| {
        let ring = QuadraticRing::new(d).unwrap();
        (build(&ring, p), build(&ring, q))
    })
}

proptest! {
    #[test]
    fn even_parts_are_reduced(d in radicand(), a in -1000i32..1000, b in -1000i32..1000) {
        let ring = QuadraticRing::new(d).unwrap();
        let x = QuadraticInteger::new(2 * a, 2 * b, ring.clone(), 2).unwrap();
        let y = QuadraticInteger::new(a, b, ring, 1).unwrap();
        prop_assert_eq!(x.parts(), (a, b, 1));
        prop_assert_eq!(hash_of(&x), hash_of(&y));
        prop_assert_eq!(x.to_string(), y.to_string());
        prop_assert_eq!(x, y);
    }

    #[test]
    fn conj_is_involution(x in element()) {
        prop_assert_eq!(x.conj().conj(), x);
    }

    #[test]
    fn conj_fixes_rationals(d in radicand(), a in -1000i32..1000) {
        let x = QuadraticInteger::from_integer(a, QuadraticRing::new(d).unwrap()).unwrap();
        prop_assert_eq!(x.conj(), x);
    }

    #[test]
    fn norm_is_multiplicative((x, y) in pair()) {
        let xy = x.try_mul(&y).unwrap();
        prop_assert_eq!(xy.norm().unwrap(), x.norm().unwrap() * y.norm().unwrap());
        prop_assert_eq!(xy.full_norm(), x.full_norm() * y.full_norm());
    }

    #[test]
    fn times_conj_is_norm(x in element()) {
        let n = x.try_mul(&x.conj()).unwrap();
        prop_assert_eq!(n.surd_part(), 0);
        prop_assert_eq!(i64::from(n.regular_part() / n.denominator()), x.norm().unwrap());
    }

    #[test]
    fn trace_is_exact(x in element()) {
        prop_assert_eq!(x.trace(), i64::from(x.regular_part()) * 2 / i64::from(x.denominator()));

        let sum = x.try_add(&x.conj()).unwrap();
        prop_assert!(sum.is_rational());
        prop_assert_eq!(i64::from(sum.regular_part() / sum.denominator()), x.trace());
    }

    #[test]
    fn add_negation_is_zero(x in element()) {
        let zero = QuadraticInteger::new(0, 0, x.ring().clone(), 1).unwrap();
        prop_assert_eq!(x.try_add(&-&x).unwrap(), zero);
    }

    #[test]
    fn identities((x, _) in pair()) {
        let zero = QuadraticInteger::zero(x.ring().clone());
        let one = QuadraticInteger::one(x.ring().clone());
        prop_assert_eq!(x.try_add(&zero).unwrap(), x.clone());
        prop_assert_eq!(x.try_mul(&one).unwrap(), x.clone());
        prop_assert_eq!(x.try_div(&one).unwrap(), x.clone());
        prop_assert_eq!(x.try_mul(1).unwrap(), x);
    }

    #[test]
    fn sub_is_add_negation((x, y) in pair()) {
        prop_assert_eq!(x.try_sub(&y).unwrap(), x.try_add(&-&y).unwrap());
    }

    #[test]
    fn div_inverts_mul((x, y) in pair()) {
        prop_assume!(!y.is_zero());
        let xy = x.try_mul(&y).unwrap();
        prop_assert_eq!(xy.try_div(&y).unwrap(), x);
    }

    #[test]
    fn min_poly_has_root(x in element()) {
        // x² - trace·x + norm = 0
        let [c0, c1, c2] = x.min_poly_coeffs().unwrap();
        prop_assume!(c2 == 1);
        let lhs = x.try_mul(&x).unwrap().try_add(&x.try_mul(c1 as i32).unwrap()).unwrap();
        prop_assert!(lhs.try_add(c0 as i32).unwrap().is_zero());
    }

    #[test]
    fn order_is_consistent((x, y) in pair(), z in element()) {
        prop_assert_eq!(x.cmp(&y), y.cmp(&x).reverse());
        prop_assert_eq!(x == y, x.cmp(&y) == Ordering::Equal);
        if x == y {
            prop_assert_eq!(hash_of(&x), hash_of(&y));
        }
        if numeric_cmp(&x, &y) != Ordering::Equal {
            prop_assert_eq!(x.cmp(&y), numeric_cmp(&x, &y));
        }
        if x <= y && y <= z {
            prop_assert!(x <= z);
        }
    }

    #[test]
    fn cross_ring_overflows(p in parts(), q in parts()) {
        let (x, y) = (build(&QuadraticRing::new(2).unwrap(), p), build(&QuadraticRing::new(-3).unwrap(), q));
        prop_assume!(!x.is_rational() && !y.is_rational());
        for result in [x.try_add(&y), x.try_sub(&y), x.try_mul(&y), x.try_div(&y)] {
            prop_assert_eq!(result.unwrap_err().required_degree(), Some(4));
        }
    }
}

#[test]
fn random_hash_distribution() {
    let mut rng = seeded(0x5eed);
    let mut seen: HashMap<u64, QuadraticInteger> = HashMap::new();
    for _ in 0..60 {
        let ring = random_ring(&mut rng, 100, false);
        let x = random_element(&mut rng, &ring, 500);
        if let Some(prev) = seen.insert(hash_of(&x), x.clone()) {
            assert_eq!(prev, x, "hash collision between {} and {}", prev, x);
        }
    }
}

#[test]
fn random_division() {
    let mut rng = seeded(42);
    for i in 0..200 {
        let ring = random_ring(&mut rng, 60, i % 3 == 0);
        let x = random_element(&mut rng, &ring, 300);
        let y = random_irrational(&mut rng, &ring, 300);
        let xy = x.try_mul(&y).unwrap();
        assert_eq!(xy.try_div(&y).unwrap(), x, "({}) * ({}) / ({})", x, y, y);
        if !x.is_zero() {
            assert_eq!(xy.try_div(&x).unwrap(), y);
        }
    }
}

#[test]
fn random_cross_ring() {
    let mut rng = seeded(7);
    for _ in 0..50 {
        let r1 = random_ring(&mut rng, 100, false);
        let r2 = random_ring(&mut rng, 100, true);
        let x = random_irrational(&mut rng, &r1, 100);
        let y = random_irrational(&mut rng, &r2, 100);
        assert!(matches!(
            x.try_mul(&y),
            Err(QuadraticError::DegreeOverflow { degree: 4, .. })
        ));

        // a rational from another ring is always accepted
        let n = QuadraticInteger::from_integer(x.regular_part(), r2.clone()).unwrap();
        assert_eq!(x.try_add(&n).unwrap().ring(), x.ring());
    }
}

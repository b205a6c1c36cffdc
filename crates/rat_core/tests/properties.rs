//! Property tests for the canonical-form and ordering contracts.
//!
//! Inputs are kept small enough that every cross product stays inside `i64`.

use num_integer::Integer;
use proptest::prelude::*;
use rat_core::{Rational, RationalError};

const LIM: i64 = 1 << 20;

fn part() -> impl Strategy<Value = i64> {
    -LIM..=LIM
}

fn nonzero() -> impl Strategy<Value = i64> {
    prop_oneof![-LIM..=-1i64, 1..=LIM]
}

fn rational() -> impl Strategy<Value = Rational<i64>> {
    (part(), nonzero()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
}

fn assert_canonical(x: &Rational<i64>) {
    assert!(x.denom() > 0, "{x}");
    assert_eq!(x.numer().gcd(&x.denom()), 1, "{x}");
}

proptest! {
    #[test]
    fn construction_is_canonical(n in part(), d in nonzero()) {
        let x = Rational::new(n, d).unwrap();
        assert_canonical(&x);
        // Same value as the raw pair.
        prop_assert_eq!(x.numer() as i128 * d as i128, n as i128 * x.denom() as i128);
    }

    #[test]
    fn zero_denominator_always_fails(n in part()) {
        prop_assert_eq!(Rational::new(n, 0), Err(RationalError::ZeroDenominator));
    }

    #[test]
    fn operations_stay_canonical(a in rational(), b in rational()) {
        assert_canonical(&(a + b));
        assert_canonical(&(a - b));
        assert_canonical(&(a * b));
        if !b.is_zero() {
            assert_canonical(&(a / b));
        }
    }

    #[test]
    fn exactly_one_ordering_holds(a in rational(), b in rational()) {
        let lt = a < b;
        let eq = a == b;
        let gt = a > b;
        prop_assert_eq!(lt as u8 + eq as u8 + gt as u8, 1);
    }

    #[test]
    fn ordering_is_transitive(a in rational(), b in rational(), c in rational()) {
        if a <= b && b <= c {
            prop_assert!(a <= c);
        }
    }

    #[test]
    fn ordering_matches_subtraction_sign(a in rational(), b in rational()) {
        let diff = a - b;
        prop_assert_eq!(a.cmp(&b), diff.numer().cmp(&0));
    }

    #[test]
    fn identities(a in rational()) {
        prop_assert_eq!(a + Rational::from_integer(0), a);
        prop_assert_eq!(a * Rational::from_integer(1), a);
        prop_assert_eq!(a - a, Rational::zero());
    }

    #[test]
    fn division_round_trip(a in rational(), b in rational()) {
        prop_assume!(!b.is_zero());
        prop_assert_eq!((a / b) * b, a);
    }

    #[test]
    fn mixed_integer_forms_agree(a in rational(), c in -1000i64..=1000) {
        let rc = Rational::from_integer(c);
        prop_assert_eq!(a + c, a + rc);
        prop_assert_eq!(a - c, a - rc);
        prop_assert_eq!(c - a, rc - a);
        prop_assert_eq!(a * c, a * rc);
        prop_assert_eq!(a.partial_cmp(&c), Some(a.cmp(&rc)));
        if c != 0 {
            prop_assert_eq!(a / c, a / rc);
        }
    }

    #[test]
    fn increment_is_plus_one(a in rational()) {
        let mut x = a;
        x.increment();
        assert_canonical(&x);
        prop_assert_eq!(x, a + 1);
        x.decrement();
        prop_assert_eq!(x, a);
    }

    #[test]
    fn text_round_trip(a in rational()) {
        prop_assert_eq!(a.to_string().parse::<Rational<i64>>().unwrap(), a);
    }

    #[test]
    fn float_construction_is_exact(v in 1e-6f64..1e12) {
        for x in [v, -v] {
            let r = Rational::<i128>::from_float(x).unwrap();
            let back: f64 = r.evaluate().unwrap();
            prop_assert_eq!(back.to_bits(), x.to_bits());
            prop_assert!(r.denom().count_ones() == 1, "denominator is a power of two");
        }
    }

    #[test]
    fn f32_construction_is_exact(v in -1e6f32..1e6) {
        let r = Rational::<i128>::from_float(v).unwrap();
        let back: f32 = r.evaluate().unwrap();
        prop_assert_eq!(back.to_bits(), if v == 0.0 { 0.0f32.to_bits() } else { v.to_bits() });
    }
}

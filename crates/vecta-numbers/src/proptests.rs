//! Property-based tests for numeric conversions.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Integer, Number, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        #[test]
        fn integer_to_f64_exact_below_2_pow_53(a in -(1i64 << 53)..(1i64 << 53)) {
            #[allow(clippy::cast_precision_loss)]
            let expected = a as f64;
            prop_assert_eq!(Integer::new(a).to_f64(), Ok(expected));
        }

        #[test]
        fn rational_from_f64_is_exact(x in proptest::num::f64::NORMAL | proptest::num::f64::SUBNORMAL) {
            let exact = Rational::from_f64(x).unwrap();
            prop_assert_eq!(exact.is_negative(), x < 0.0);
            prop_assert_eq!(Number::from(exact).numeric_eq(&Number::from(x)), true);
        }

        #[test]
        fn rational_to_f64_matches_division(n in small_int(), d in non_zero_int()) {
            #[allow(clippy::cast_precision_loss)]
            let expected = n as f64 / d as f64;
            prop_assert_eq!(Rational::from_i64(n, d).to_f64(), Ok(expected));
        }

        #[test]
        fn integer_scale_matches_float_scale(n in small_int(), x in -1e6f64..1e6f64) {
            #[allow(clippy::cast_precision_loss)]
            let as_float = Number::from(n as f64);
            prop_assert_eq!(Number::from(n).scale(x), as_float.scale(x));
        }

        #[test]
        fn whole_rational_scale_matches_integer_scale(n in small_int(), x in -1000i32..1000i32) {
            let component = f64::from(x);
            let whole = Number::from(Rational::from_i64(n, 1));
            prop_assert_eq!(whole.scale(component), Number::from(n).scale(component));
        }

        #[test]
        fn numeric_eq_is_symmetric(a in small_int(), b in small_int(), d in non_zero_int()) {
            let x = Number::from(a);
            let y = Number::from(Rational::from_i64(b, d));
            prop_assert_eq!(x.numeric_eq(&y), y.numeric_eq(&x));
        }

        #[test]
        fn exact_add_commutative(a in small_int(), b in small_int(), d in non_zero_int()) {
            let x = Number::from(a);
            let y = Number::from(Rational::from_i64(b, d));
            prop_assert!(x.add_number(&y).numeric_eq(&y.add_number(&x)));
        }
    }
}

//! Property-based tests for the vector type.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Slice, Vector};

    // Strategy for generating small integral components
    fn components() -> impl Strategy<Value = Vec<i32>> {
        prop::collection::vec(-1000i32..1000i32, 0..12)
    }

    // Strategy for generating finite float components
    fn float_components() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(-1e6f64..1e6f64, 0..12)
    }

    fn from_ints(values: &[i32]) -> Vector {
        Vector::try_new(values).unwrap()
    }

    proptest! {
        #[test]
        fn construction_keeps_length_and_order(xs in components()) {
            let v = from_ints(&xs);
            prop_assert_eq!(v.len(), xs.len());
            let expected: Vec<f64> = xs.iter().copied().map(f64::from).collect();
            prop_assert_eq!(v.to_vec(), expected);
        }

        #[test]
        fn equal_vectors_hash_equal(xs in components()) {
            let ints = from_ints(&xs);
            let floats: Vector = xs.iter().copied().map(f64::from).collect();
            prop_assert_eq!(&ints, &floats);
            prop_assert_eq!(ints.hash_value(), floats.hash_value());
        }

        #[test]
        fn addition_commutes_and_pads(a in components(), b in components()) {
            let (va, vb) = (from_ints(&a), from_ints(&b));
            let sum = &va + &vb;
            prop_assert_eq!(&sum, &(&vb + &va));
            prop_assert_eq!(sum.len(), a.len().max(b.len()));
            for i in 0..sum.len() {
                let x = a.get(i).copied().map_or(0.0, f64::from);
                let y = b.get(i).copied().map_or(0.0, f64::from);
                prop_assert_eq!(sum[i], x + y);
            }
        }

        #[test]
        fn scalar_multiplication_commutes(xs in float_components(), k in -100i32..100i32) {
            let v: Vector = xs.into_iter().collect();
            prop_assert_eq!(&v * k, k * &v);
            prop_assert_eq!((&v * k).len(), v.len());
        }

        #[test]
        fn negation_is_an_involution(xs in float_components()) {
            let v: Vector = xs.into_iter().collect();
            prop_assert_eq!(-(-&v), v.clone());
            prop_assert_eq!(&v + &(-&v), Vector::from(vec![0.0; v.len()]));
        }

        #[test]
        fn magnitude_is_non_negative(xs in float_components()) {
            let v: Vector = xs.into_iter().collect();
            prop_assert!(v.magnitude() >= 0.0);
            prop_assert_eq!(v.is_nonzero(), v.iter().any(|x| x != 0.0));
        }

        #[test]
        fn slicing_agrees_with_std(xs in components(), start in 0usize..14, stop in 0usize..14) {
            let v = from_ints(&xs);
            let s = v.slice(Slice::new(
                Some(isize::try_from(start).unwrap()),
                Some(isize::try_from(stop).unwrap()),
                None,
            )).unwrap();
            let lo = start.min(xs.len());
            let hi = stop.min(xs.len()).max(lo);
            let expected: Vec<f64> = xs[lo..hi].iter().copied().map(f64::from).collect();
            prop_assert_eq!(s.to_vec(), expected);
        }

        #[test]
        fn reversed_slice_matches_rev(xs in components()) {
            let v = from_ints(&xs);
            let reversed = v.slice(Slice::full().step_by(-1)).unwrap();
            let expected: Vec<f64> = xs.iter().rev().copied().map(f64::from).collect();
            prop_assert_eq!(reversed.to_vec(), expected);
        }

        #[test]
        fn negative_index_mirrors_positive(xs in prop::collection::vec(-1000i32..1000i32, 1..12), i in 0usize..12) {
            let v = from_ints(&xs);
            let i = i % xs.len();
            let from_end = isize::try_from(i).unwrap() - isize::try_from(xs.len()).unwrap();
            prop_assert_eq!(v.component(from_end).unwrap(), f64::from(xs[i]));
        }
    }
}

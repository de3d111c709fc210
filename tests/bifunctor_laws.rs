#![cfg(feature = "typeclass")]
//! Property-based tests for Bifunctor laws.
//!
//! - **Identity Law**: `bf.bimap(|x| x, |y| y) == bf`
//! - **Composition Law**: `bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)`
//! - **first/second Consistency Law**: `bf.bimap(f, g) == bf.first(f).second(g)`

use adtkit::control::{Outcome, Sum};
use adtkit::typeclass::Bifunctor;
use proptest::prelude::*;

fn outcome_strategy() -> impl Strategy<Value = Outcome<i32, String>> {
    prop::result::maybe_ok(any::<i32>(), any::<String>()).prop_map(Outcome::from)
}

fn sum_strategy() -> impl Strategy<Value = Sum<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Sum::left),
        any::<String>().prop_map(Sum::right),
    ]
}

proptest! {
    #[test]
    fn prop_outcome_identity_law(value in outcome_strategy()) {
        let result = value.clone().bimap(|e: String| e, |x: i32| x);
        prop_assert_eq!(result, value);
    }

    #[test]
    fn prop_outcome_composition_law(value in outcome_strategy()) {
        let f1 = |e: String| e.len();
        let f2 = |n: usize| n.wrapping_add(100);
        let g1 = |x: i32| x.wrapping_add(1);
        let g2 = |x: i32| x.wrapping_mul(2);

        let left = value.clone().bimap(|e| f2(f1(e)), |x| g2(g1(x)));
        let right = value.bimap(f1, g1).bimap(f2, g2);

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_outcome_first_second_consistency(value in outcome_strategy()) {
        let f = |e: String| e.len();
        let g = |x: i32| x.wrapping_mul(2);

        let by_bimap = value.clone().bimap(f, g);
        let by_first_second = value.clone().first(f).second(g);
        let by_second_first = value.second(g).first(f);

        prop_assert_eq!(by_bimap, by_first_second);
        prop_assert_eq!(by_first_second, by_second_first);
    }

    /// `first` is `map_err` and `second` is `map`.
    #[test]
    fn prop_outcome_sides_match_inherent_methods(value in outcome_strategy()) {
        prop_assert_eq!(value.clone().first(|e: String| e.len()), value.clone().map_err(|e| e.len()));
        prop_assert_eq!(value.clone().second(|x: i32| x ^ 1), value.map(|x| x ^ 1));
    }

    #[test]
    fn prop_sum_identity_law(value in sum_strategy()) {
        prop_assert_eq!(value.clone().bimap(|x: i32| x, |y: String| y), value);
    }

    #[test]
    fn prop_sum_first_second_consistency(value in sum_strategy()) {
        let f = |x: i32| x.wrapping_sub(7);
        let g = |s: String| s.to_uppercase();

        let by_bimap = value.clone().bimap(f, g);
        let by_first_second = value.first(f).second(g);

        prop_assert_eq!(by_bimap, by_first_second);
    }
}

//! Tests for the `Sum` primitive and the eliminators derived from it.

use adtkit::control::{Optional, Outcome, Sum};
use proptest::prelude::*;
use rstest::rstest;
use std::cell::Cell;

fn sum_strategy() -> impl Strategy<Value = Sum<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Sum::left),
        any::<String>().prop_map(Sum::right),
    ]
}

#[rstest]
fn either_invokes_exactly_one_handler() {
    let left_calls = Cell::new(0);
    let right_calls = Cell::new(0);

    let result = Sum::<i32, &str>::right("x").either(
        |_| {
            left_calls.set(left_calls.get() + 1);
            0
        },
        |text| {
            right_calls.set(right_calls.get() + 1);
            text.len()
        },
    );

    assert_eq!(result, 1);
    assert_eq!((left_calls.get(), right_calls.get()), (0, 1));
}

#[rstest]
fn optional_round_trips_through_sum() {
    assert_eq!(Optional::from_sum(Optional::Some(3).into_sum()), Optional::Some(3));
    assert_eq!(Optional::from_sum(Optional::<i32>::None.into_sum()), Optional::None);
}

#[rstest]
fn outcome_places_err_on_the_left() {
    let failed: Outcome<i32, &str> = Outcome::Err("e");
    assert_eq!(failed.into_sum(), Sum::left("e"));
    assert_eq!(Outcome::<i32, &str>::Ok(1).into_sum(), Sum::right(1));
}

proptest! {
    #[test]
    fn prop_either_with_constructors_is_identity(value in sum_strategy()) {
        let rebuilt = value.clone().either(Sum::left, Sum::right);
        prop_assert_eq!(rebuilt, value);
    }

    #[test]
    fn prop_outcome_sum_round_trip(
        value in prop::result::maybe_ok(any::<i32>(), any::<String>()).prop_map(Outcome::from)
    ) {
        prop_assert_eq!(Outcome::from_sum(value.clone().into_sum()), value);
    }

    /// `either` agrees with a native `match` on the variant.
    #[test]
    fn prop_outcome_either_agrees_with_match(
        value in prop::result::maybe_ok(any::<i32>(), any::<i32>()).prop_map(Outcome::from)
    ) {
        let by_match = match value {
            Outcome::Ok(n) => i64::from(n) * 2,
            Outcome::Err(e) => -i64::from(e),
        };
        prop_assert_eq!(value.either(|e| -i64::from(e), |n| i64::from(n) * 2), by_match);
    }
}

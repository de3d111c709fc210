//! Applicative type class - combining independent computations.
//!
//! # Laws
//!
//! Written with `apply` (function on the left):
//!
//! ## Identity Law
//!
//! ```text
//! pure(id).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! pure(compose).apply(u).apply(v).apply(w) == u.apply(v.apply(w))
//! ```
//!
//! The inherent `ap` methods on [`Optional`] and [`Outcome`] take the
//! function as the argument instead (`x.ap(f) == f.apply(x)` whenever at
//! most one side is an error). Both report the first `Err` from the left,
//! so when both sides fail `apply` returns the function's error and `ap`
//! returns the value's.

use super::functor::Functor;
use crate::control::{Optional, Outcome};

/// A functor that can lift values and combine independent contexts.
///
/// # Examples
///
/// ```rust
/// use adtkit::control::Optional;
/// use adtkit::typeclass::Applicative;
///
/// let lifted: Optional<i32> = <Optional<()>>::pure(42);
/// assert_eq!(lifted, Optional::Some(42));
///
/// let sum = Optional::Some(1).map3(Optional::Some(2), Optional::Some(3), |a, b, c| a + b + c);
/// assert_eq!(sum, Optional::Some(6));
/// ```
pub trait Applicative: Functor {
    /// Lifts a value into the context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two contexts with a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three contexts with a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Applies the function held in `self` to the value held in `other`.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;

    /// Pairs the values of two contexts.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Combines two contexts, keeping the left value.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Combines two contexts, keeping the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }
}

// =============================================================================
// Optional<A> Implementation
// =============================================================================

impl<A> Applicative for Optional<A> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Optional<B>, function: F) -> Optional<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Self::map2(self, other, function)
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Optional<B>, third: Optional<C>, function: F) -> Optional<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        self.zip(second)
            .map2(third, |(a, b), c| function(a, b, c))
    }

    #[inline]
    fn apply<B, Output>(self, other: Optional<B>) -> Optional<Output>
    where
        A: FnOnce(B) -> Output,
    {
        other.ap(self)
    }
}

// =============================================================================
// Outcome<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Applicative for Outcome<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B, E> {
        Outcome::Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Outcome<B, E>, function: F) -> Outcome<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        Self::map2(self, other, function)
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Outcome<B, E>,
        third: Outcome<C, E>,
        function: F,
    ) -> Outcome<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        self.zip(second)
            .map2(third, |(a, b), c| function(a, b, c))
    }

    /// The function's error takes precedence over the argument's error.
    #[inline]
    fn apply<B, Output>(self, other: Outcome<B, E>) -> Outcome<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        Self::map2(self, other, |function, value| function(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn optional_pure_creates_some() {
        assert_eq!(<Optional<()>>::pure(7), Optional::Some(7));
    }

    #[rstest]
    #[case(Optional::Some(1), Optional::Some(2), Optional::Some(3))]
    #[case(Optional::Some(1), Optional::None, Optional::None)]
    #[case(Optional::None, Optional::Some(2), Optional::None)]
    fn optional_map2(
        #[case] left: Optional<i32>,
        #[case] right: Optional<i32>,
        #[case] expected: Optional<i32>,
    ) {
        assert_eq!(Applicative::map2(left, right, |a, b| a + b), expected);
    }

    #[rstest]
    fn optional_map3_with_none() {
        let result = Optional::Some(1).map3(Optional::<i32>::None, Optional::Some(3), |a, b, c| {
            a + b + c
        });
        assert_eq!(result, Optional::None);
    }

    #[rstest]
    fn optional_apply_matches_ap() {
        let function = Optional::Some(|n: i32| n * 3);
        assert_eq!(function.apply(Optional::Some(4)), Optional::Some(12));
        assert_eq!(Optional::Some(4).ap(function), Optional::Some(12));
    }

    #[rstest]
    fn optional_product_variants() {
        assert_eq!(Optional::Some(1).product(Optional::Some("a")), Optional::Some((1, "a")));
        assert_eq!(Optional::Some(1).product_left(Optional::Some("a")), Optional::Some(1));
        assert_eq!(Optional::Some(1).product_right(Optional::Some("a")), Optional::Some("a"));
        assert_eq!(Optional::Some(1).product_right(Optional::<i32>::None), Optional::None);
    }

    #[rstest]
    fn outcome_map3_keeps_first_error() {
        let result = Outcome::<i32, &str>::Ok(1).map3(
            Outcome::Err("second"),
            Outcome::Err("third"),
            |a: i32, b: i32, c: i32| a + b + c,
        );
        assert_eq!(result, Outcome::Err("second"));
    }

    #[rstest]
    fn outcome_apply_prefers_function_error() {
        let function: Outcome<fn(i32) -> i32, &str> = Outcome::Err("function");
        let value: Outcome<i32, &str> = Outcome::Err("value");
        assert_eq!(function.apply(value), Outcome::Err("function"));
        assert_eq!(value.ap(function), Outcome::Err("value"));
    }

    #[rstest]
    #[case(Outcome::Ok(2), Outcome::Ok(6))]
    #[case(Outcome::Err("value"), Outcome::Err("value"))]
    fn outcome_apply_agrees_with_ap_when_function_is_ok(
        #[case] value: Outcome<i32, &'static str>,
        #[case] expected: Outcome<i32, &'static str>,
    ) {
        let function: Outcome<fn(i32) -> i32, &str> = Outcome::Ok(|n| n * 3);
        assert_eq!(function.apply(value), expected);
        assert_eq!(value.ap(function), expected);
    }

    #[rstest]
    fn outcome_validate_fields() {
        fn positive(value: i32) -> Outcome<i32, &'static str> {
            if value > 0 { Outcome::Ok(value) } else { Outcome::Err("not positive") }
        }
        fn even(value: i32) -> Outcome<i32, &'static str> {
            if value % 2 == 0 { Outcome::Ok(value) } else { Outcome::Err("not even") }
        }

        assert_eq!(positive(4).product(even(4)), Outcome::Ok((4, 4)));
        assert_eq!(positive(-4).product(even(3)), Outcome::Err("not positive"));
    }
}

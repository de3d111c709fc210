//! Bifunctor type class - mapping over both sides of a two-parameter type.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! ## first/second Consistency Law
//!
//! ```text
//! bf.bimap(f, g) == bf.first(f).second(g) == bf.second(g).first(f)
//! ```
//!
//! # Parameter Order for Outcome
//!
//! `Outcome<T, E>` is implemented as `Bifunctor<E, T>`, so `first` maps the
//! error (like `map_err`) and `second` maps the success value (like `map`).
//!
//! ```rust
//! use adtkit::control::Outcome;
//! use adtkit::typeclass::Bifunctor;
//!
//! let failed: Outcome<i32, String> = Outcome::Err("bad".to_string());
//! assert_eq!(failed.bimap(|e: String| e.len(), |n: i32| n + 1), Outcome::Err(3));
//! ```

use crate::control::{Outcome, Sum};

/// A type with two parameters that can each have a function mapped over them.
pub trait Bifunctor<A, B> {
    /// The same shape applied to `C` and `D`.
    ///
    /// For `Outcome<T, E>` (a `Bifunctor<E, T>`) this is `Outcome<D, C>`.
    type Target<C, D>;

    /// Maps both sides at once. Only the function for the present side runs.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Maps the first parameter only.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        Self: Sized,
        F: FnOnce(A) -> C,
    {
        self.bimap(function, |b| b)
    }

    /// Maps the second parameter only.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        Self: Sized,
        G: FnOnce(B) -> D,
    {
        self.bimap(|a| a, function)
    }
}

impl<T, E> Bifunctor<E, T> for Outcome<T, E> {
    type Target<C, D> = Outcome<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Outcome<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        self.map(second_function).map_err(first_function)
    }
}

impl<A, B> Bifunctor<A, B> for Sum<A, B> {
    type Target<C, D> = Sum<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Sum<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        self.either(
            |left| Sum::left(first_function(left)),
            |right| Sum::right(second_function(right)),
        )
    }
}

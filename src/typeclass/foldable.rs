//! Foldable type class - reducing a structure to a summary value.
//!
//! `Optional` and `Outcome` hold at most one value, so every fold visits zero
//! or one element. An `Err` contributes nothing, the same as a `None`.
//!
//! # Examples
//!
//! ```rust
//! use adtkit::control::{Optional, Outcome};
//! use adtkit::typeclass::Foldable;
//!
//! assert_eq!(Optional::Some(5).fold_left(10, |acc, n| acc + n), 15);
//! assert_eq!(Outcome::<i32, &str>::Err("e").fold_left(10, |acc, n| acc + n), 10);
//! ```

use super::higher::TypeConstructor;
use crate::control::{Optional, Outcome};

/// A structure whose elements can be folded into a single value.
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Returns whether the structure contains no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements in the structure.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects the elements into a `Vec` in fold order.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Returns the first element satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::{Optional, Outcome};
    /// use adtkit::typeclass::Foldable;
    ///
    /// assert_eq!(Outcome::<i32, ()>::Ok(4).find(|n| n % 2 == 0), Optional::Some(4));
    /// assert_eq!(Optional::Some(3).find(|n| n % 2 == 0), Optional::None);
    /// ```
    fn find<P>(self, mut predicate: P) -> Optional<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(Optional::None, |accumulator, element| {
            if accumulator.is_some() {
                accumulator
            } else if predicate(&element) {
                Optional::Some(element)
            } else {
                Optional::None
            }
        })
    }

    /// Checks whether any element satisfies the predicate.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(|element| predicate(element)).is_some()
    }

    /// Checks whether every element satisfies the predicate.
    ///
    /// Vacuously true for `None` and `Err`.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}

impl<A> Foldable for Optional<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Optional::Some(element) => function(init, element),
            Optional::None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Optional::Some(element) => function(element, init),
            Optional::None => init,
        }
    }

    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.is_none()
    }

    fn length(&self) -> usize
    where
        Self: Clone,
    {
        usize::from(self.is_some())
    }
}

impl<T, E> Foldable for Outcome<T, E> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Outcome::Ok(element) => function(init, element),
            Outcome::Err(_) => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        match self {
            Outcome::Ok(element) => function(element, init),
            Outcome::Err(_) => init,
        }
    }

    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.is_err()
    }

    fn length(&self) -> usize
    where
        Self: Clone,
    {
        usize::from(self.is_ok())
    }
}

//! Iteration over `Optional` and `Outcome`.
//!
//! Both types behave as collections of zero or one element: an `Optional`
//! yields its value when `Some`, an `Outcome` yields its value when `Ok`.
//! Collecting an iterator of optionals (or outcomes) short-circuits on the
//! first `None` (or `Err`).
//!
//! # Examples
//!
//! ```rust
//! use adtkit::control::{Optional, Outcome};
//!
//! let all: Optional<Vec<i32>> = vec![Optional::Some(1), Optional::Some(2)]
//!     .into_iter()
//!     .collect();
//! assert_eq!(all, Optional::Some(vec![1, 2]));
//!
//! let parsed: Outcome<Vec<i32>, String> = ["1", "x", "3"]
//!     .iter()
//!     .map(|s| Outcome::from(s.parse::<i32>().map_err(|e| e.to_string())))
//!     .collect();
//! assert!(parsed.is_err());
//! ```

use std::iter::FusedIterator;

use super::optional::Optional;
use super::outcome::Outcome;

/// Borrowing iterator over the value of an `Optional` or the `Ok` value of an `Outcome`.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    item: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.item.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.item.is_some());
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.item.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the value of an `Optional` or the `Ok` value of an `Outcome`.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    item: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.item.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.item.is_some());
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.item.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

// =============================================================================
// Optional
// =============================================================================

impl<T> Optional<T> {
    /// Returns an iterator over the contained value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Optional;
    ///
    /// assert_eq!(Optional::Some(4).iter().next(), Some(&4));
    /// assert_eq!(Optional::<i32>::None.iter().count(), 0);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            item: self.as_ref().into(),
        }
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { item: self.into() }
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<A, V> FromIterator<Optional<A>> for Optional<V>
where
    V: FromIterator<A>,
{
    /// Collects every `Some` value; the first `None` makes the whole result `None`.
    fn from_iter<I: IntoIterator<Item = Optional<A>>>(iterator: I) -> Self {
        let collected: Option<V> = iterator
            .into_iter()
            .map(Option::<A>::from)
            .collect();
        collected.into()
    }
}

// =============================================================================
// Outcome
// =============================================================================

impl<T, E> Outcome<T, E> {
    /// Returns an iterator over the `Ok` value, if any.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            item: self.as_ref().ok().into(),
        }
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            item: self.ok().into(),
        }
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<A, E, V> FromIterator<Outcome<A, E>> for Outcome<V, E>
where
    V: FromIterator<A>,
{
    /// Collects every `Ok` value; the first `Err` becomes the whole result.
    fn from_iter<I: IntoIterator<Item = Outcome<A, E>>>(iterator: I) -> Self {
        let collected: Result<V, E> = iterator
            .into_iter()
            .map(Result::<A, E>::from)
            .collect();
        collected.into()
    }
}

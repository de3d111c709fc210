//! Sum primitive - exactly one of two alternatives.
//!
//! `Sum<A, B>` holds either a left payload of type `A` or a right payload of
//! type `B`. Unlike an ordinary enum, its branches are private: the only way
//! to read a `Sum` is the eliminator [`Sum::either`], which takes one handler
//! per branch and invokes exactly one of them.
//!
//! [`Optional`](super::Optional) and [`Outcome`](super::Outcome) define their
//! own eliminators through this type, so every derived combinator ultimately
//! reduces to a single case analysis.
//!
//! # Examples
//!
//! ```rust
//! use adtkit::control::Sum;
//!
//! let left: Sum<i32, String> = Sum::left(42);
//! let right: Sum<i32, String> = Sum::right("hello".to_string());
//!
//! assert_eq!(left.either(|n| n.to_string(), |s| s), "42");
//! assert_eq!(right.either(|n| n.to_string(), |s| s), "hello");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

/// A value that is exactly one of `Left(A)` or `Right(B)`.
///
/// The populated branch is not observable except through [`Sum::either`].
///
/// # Type Parameters
///
/// * `A` - The type of the left payload
/// * `B` - The type of the right payload
#[derive(Clone, Copy)]
pub struct Sum<A, B> {
    branch: Branch<A, B>,
}

#[derive(Clone, Copy)]
enum Branch<A, B> {
    Left(A),
    Right(B),
}

impl<A, B> Sum<A, B> {
    /// Creates a `Sum` holding a left payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Sum;
    ///
    /// let value: Sum<i32, &str> = Sum::left(1);
    /// assert!(value.either(|_| true, |_| false));
    /// ```
    #[inline]
    pub const fn left(value: A) -> Self {
        Self {
            branch: Branch::Left(value),
        }
    }

    /// Creates a `Sum` holding a right payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Sum;
    ///
    /// let value: Sum<i32, &str> = Sum::right("right");
    /// assert!(value.either(|_| false, |_| true));
    /// ```
    #[inline]
    pub const fn right(value: B) -> Self {
        Self {
            branch: Branch::Right(value),
        }
    }

    /// Eliminates the sum by applying the handler for the populated branch.
    ///
    /// Exactly one of `on_left` and `on_right` is invoked, on the payload of
    /// the populated branch, and its result is returned. The other handler
    /// is dropped without being called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Sum;
    ///
    /// let value: Sum<i32, String> = Sum::left(21);
    /// let doubled = value.either(|n| n * 2, |s| s.len() as i32);
    /// assert_eq!(doubled, 42);
    /// ```
    #[inline]
    pub fn either<C, F, G>(self, on_left: F, on_right: G) -> C
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> C,
    {
        match self.branch {
            Branch::Left(value) => on_left(value),
            Branch::Right(value) => on_right(value),
        }
    }

    const fn borrowed(&self) -> Sum<&A, &B> {
        match &self.branch {
            Branch::Left(value) => Sum::left(value),
            Branch::Right(value) => Sum::right(value),
        }
    }
}

// The trait impls below read the payload through `either` like every other
// consumer of `Sum`.

impl<A: fmt::Debug, B: fmt::Debug> fmt::Debug for Sum<A, B> {
    /// Formats as the constructor call that built the value, e.g. `Sum::left(1)`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (constructor, value): (&str, &dyn fmt::Debug) = self.borrowed().either(
            |value| ("Sum::left", value as &dyn fmt::Debug),
            |value| ("Sum::right", value as &dyn fmt::Debug),
        );
        formatter.debug_tuple(constructor).field(value).finish()
    }
}

impl<A: PartialEq, B: PartialEq> PartialEq for Sum<A, B> {
    fn eq(&self, other: &Self) -> bool {
        self.borrowed().either(
            |left| other.borrowed().either(|other_left| left == other_left, |_| false),
            |right| other.borrowed().either(|_| false, |other_right| right == other_right),
        )
    }
}

impl<A: Eq, B: Eq> Eq for Sum<A, B> {}

impl<A: Hash, B: Hash> Hash for Sum<A, B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (left, right): (Option<&A>, Option<&B>) =
            self.borrowed().either(|value| (Some(value), None), |value| (None, Some(value)));
        left.hash(state);
        right.hash(state);
    }
}
